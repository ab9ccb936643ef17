use sundry_option::{some, Optional};

/// A value source whose default implementation always has something to say.
pub trait Sample {
    fn some_value(&self) -> Optional<String> {
        some("Some Value".to_string())
    }
}

pub struct DefaultSample;

impl Sample for DefaultSample {}

pub fn greet() {
    let value = DefaultSample.some_value();
    tracing::debug!(present = value.is_present(), "sample produced a value");
    println!("{}", value);
}
