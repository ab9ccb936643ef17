use anyhow::{Context, Result};
use sundry_option::parse_optional;
use super::{print_info, print_warning};

pub fn parse_number(text: &str) -> Result<()> {
    let parsed = parse_optional::<i64>(Some(text))
        .with_context(|| format!("Failed to read {:?} as an integer", text))?;

    tracing::debug!(input = text, present = parsed.is_present(), "parsed");
    println!("{}", parsed);

    let doubled = parsed.map(|n| n.saturating_mul(2));
    doubled.match_with(
        |n| print_info(&format!("doubled: {}", n)),
        || print_warning("no number given"),
    );

    Ok(())
}
