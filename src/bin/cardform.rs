//! CLI tool for payment form validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a full set of form fields
//! cardform check --name "Jane Doe" --number 4111111111111111 \
//!     --month 09 --year 30 --cvc 123
//!
//! # Format a card number for display
//! cardform format 4111111111111111
//!
//! # Check an expiry month/year pair
//! cardform expiry 09 30
//! ```

use card_form::{format, validate, CardInputState, CurrentDate};
use clap::{Parser, Subcommand};
use std::process;

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Payment form field validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a full set of form fields
    Check {
        /// Cardholder name
        #[arg(long, default_value = "")]
        name: String,

        /// Card number (spaces allowed)
        #[arg(long, default_value = "")]
        number: String,

        /// Expiry month
        #[arg(long, default_value = "")]
        month: String,

        /// Expiry year (two digits)
        #[arg(long, default_value = "")]
        year: String,

        /// Card verification code
        #[arg(long, default_value = "")]
        cvc: String,
    },

    /// Format a card number for display
    Format {
        /// The card number to format
        number: String,
    },

    /// Check an expiry month/year pair
    Expiry {
        /// Expiry month
        month: String,

        /// Expiry year (two digits)
        year: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            name,
            number,
            month,
            year,
            cvc,
        } => {
            let state = CardInputState::new(name, number, month, year, cvc);
            let verdict = validate::validate_form(&state, &CurrentDate::now());

            for field in verdict.verdicts() {
                match field.message() {
                    None => println!("{}: ok", field.field()),
                    Some(message) => println!("{}: {}", field.field(), message),
                }
            }

            if verdict.all_valid() {
                println!("form is valid");
            } else {
                process::exit(1);
            }
        }

        Commands::Format { number } => {
            let formatted = format::format_card_number(&number);
            println!("display: {}", formatted.display);
            println!("value:   {}", formatted.value);
        }

        Commands::Expiry { month, year } => {
            println!("display: {}", format::format_expiry(&month, &year));

            match validate::validate_expiry(&month, &year, &CurrentDate::now()) {
                Ok(()) => println!("expiry is valid"),
                Err(e) => {
                    println!("invalid: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
