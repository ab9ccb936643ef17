use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

mod commands;

use commands::*;

#[derive(Parser)]
#[command(name = "sampler")]
#[command(about = "A small command-line tour of the sundry_option combinators", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log each decision at debug level
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value produced by the default sample
    Greet,

    /// Look a fruit up in the inventory
    Stock {
        /// Fruit name
        #[arg(long, default_value = "apple")]
        fruit: String,
        /// Units on the shelf; zero or less means out of stock
        #[arg(long, allow_negative_numbers = true)]
        count: i64,
    },

    /// Parse an optional integer; empty input is absent
    Parse {
        /// Text to parse
        #[arg(default_value = "")]
        text: String,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Greet => {
            greet();
        }
        Commands::Stock { fruit, count } => {
            check_stock(&fruit, count);
        }
        Commands::Parse { text } => {
            parse_number(&text)?;
        }
    }

    Ok(())
}
