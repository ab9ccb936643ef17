use colored::*;

mod greet;
mod stock;
mod parse;

pub use greet::greet;
pub use stock::check_stock;
pub use parse::parse_number;

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
