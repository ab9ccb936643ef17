pub mod error;
pub mod optional;
pub mod combinators;
pub mod convert;


pub use error::*;
pub use optional::*;
pub use convert::*;
