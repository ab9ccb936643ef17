use sundry_option::{none, some, Optional};
use super::{print_success, print_warning};

/// `Some(fruit)` while there is at least one unit on the shelf.
pub fn lookup(fruit: &str, count: i64) -> Optional<String> {
    if count > 0 {
        some(fruit.to_string())
    } else {
        none()
    }
}

pub fn check_stock(fruit: &str, count: i64) {
    let found = lookup(fruit, count)
        .when_some(|name| tracing::debug!(fruit = %name, count, "in stock"))
        .when_none(|| tracing::debug!(fruit, count, "stock empty"));

    // Absent renders as an empty line
    println!("{}", found);

    found.match_with(
        |name| print_success(&format!("{} is in stock ({} left)", name, count)),
        || print_warning(&format!("{} is out of stock", fruit)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_positive_count() {
        let apple = lookup("apple", 3);
        assert_eq!(apple, some("apple".to_string()));
        assert_eq!(apple.to_string(), "apple");
    }

    #[test]
    fn test_lookup_empty_shelf() {
        assert_eq!(lookup("apple", 0), none());
        assert_eq!(lookup("apple", -2).to_string(), "");
    }
}
