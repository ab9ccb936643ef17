// Example demonstrating Optional usage

use sundry_option::{none, of_string, some, Optional, ToOptional};

fn unwrap_or(opt: Optional<i32>, default: i32) -> Optional<i32> {
    some(opt.match_with(|n| n, || default))
}

fn find_first_even(start: i32, end_val: i32) -> Optional<i32> {
    (start..=end_val).find(|i| i % 2 == 0).to_optional()
}

fn main() {
    // Basic usage
    let x = some(42);
    let y = none::<i32>();

    println!("x unwrap_or 0 = {}", unwrap_or(x, 0));
    println!("y unwrap_or 0 = {}", unwrap_or(y, 0));

    find_first_even(1, 10)
        .when_some(|n| println!("first even: {}", n))
        .when_none(|| println!("No even number found"));

    // Nested
    let nested = some(some(100));
    println!("nested = {}", nested.bind(|inner| inner).get_or_default());

    // Strings: empty counts as absent
    for input in [Some("plum"), Some(""), None] {
        let label = of_string(input).get_with_or(|s| format!("'{}'", s), "<absent>".to_string());
        println!("of_string({:?}) -> {}", input, label);
    }
}
