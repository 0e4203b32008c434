//! CLI tool for card brand identification.
//!
//! # Usage
//!
//! ```bash
//! # Classify one or more card numbers
//! ccbrand classify 4532-1234-5678-8909 378282246310005
//!
//! # JSON output
//! ccbrand classify 4532123456788909 --output json
//!
//! # Luhn check only
//! ccbrand luhn 79927398713
//!
//! # Print the brand rule table
//! ccbrand rules
//!
//! # Generate test card numbers
//! ccbrand generate --brand amex --count 3
//!
//! # Classify the built-in example numbers
//! ccbrand demo
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `-v`) to trace each classification.

use std::process::ExitCode;

use cc_brand::detect::Length;
use cc_brand::{classify, generate, is_luhn_valid, sanitize, CardBrand, Classification, BRAND_RULES};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Numbers classified by the `demo` subcommand.
const DEMO_NUMBERS: [&str; 4] = [
    "4532123456788909", // VISA
    "5412345678901232", // MASTERCARD
    "371234567890120",  // AMEX
    "invalid_number",
];

#[derive(Parser)]
#[command(name = "ccbrand")]
#[command(author, version, about = "Identify the brand of a payment card number")]
struct Cli {
    /// Log each classification step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify card numbers (separators are ignored)
    Classify {
        /// Card numbers to classify
        #[arg(required = true)]
        card_numbers: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check if a number passes the Luhn algorithm
    Luhn {
        /// Card number to check (separators are ignored)
        card_number: String,
    },

    /// Print the brand rules in match order
    Rules,

    /// Generate test card numbers (for testing only)
    Generate {
        /// Card brand to generate (VISA, MASTERCARD, AMEX, ...)
        #[arg(short, long, default_value = "VISA")]
        brand: CardBrand,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Classify a fixed list of example numbers
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Classify {
            card_numbers,
            output,
        } => cmd_classify(&card_numbers, output),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Rules => cmd_rules(),
        Commands::Generate { brand, count } => cmd_generate(brand, count),
        Commands::Demo => cmd_demo(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn classify_logged(raw: &str) -> Classification {
    let result = classify(raw);
    debug!(
        sanitized = %result.sanitized_number,
        digits = result.sanitized_number.len(),
        luhn = is_luhn_valid(&result.sanitized_number),
        brand = ?result.brand,
        "classified card number"
    );
    result
}

fn cmd_classify(card_numbers: &[String], output: OutputFormat) -> ExitCode {
    let results: Vec<Classification> = card_numbers.iter().map(|n| classify_logged(n)).collect();

    match output {
        OutputFormat::Text => {
            for result in &results {
                println!("Number: {}", result.sanitized_number);
                match result.brand {
                    Some(brand) => println!("Brand: {}", brand),
                    None => println!("Brand: unidentified"),
                }
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    if results.iter().all(Classification::is_identified) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    let digits = sanitize(card_number);
    if is_luhn_valid(&digits) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_rules() -> ExitCode {
    for rule in BRAND_RULES {
        let patterns: Vec<String> = rule
            .patterns
            .iter()
            .map(|p| match p.length {
                Length::Exactly(n) => format!("{} ({} digits)", p.prefix, n),
                Length::Any => format!("{} (any length)", p.prefix),
            })
            .collect();
        println!("{:<10} {}", rule.brand.as_str(), patterns.join(", "));
    }
    ExitCode::SUCCESS
}

fn cmd_generate(brand: CardBrand, count: usize) -> ExitCode {
    info!(%brand, count, "generating test card numbers");
    for _ in 0..count {
        println!("{}", generate::generate_card(brand));
    }
    ExitCode::SUCCESS
}

fn cmd_demo() -> ExitCode {
    for number in DEMO_NUMBERS {
        let result = classify_logged(number);
        if !result.is_identified() {
            info!(input = number, "number not identified");
        }
        println!("Number: {}", number);
        match result.brand {
            Some(brand) => println!("Brand: {}\n", brand),
            None => println!("Brand: unidentified/invalid\n"),
        }
    }
    ExitCode::SUCCESS
}
