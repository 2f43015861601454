#![forbid(unsafe_code)]

pub mod json;
pub mod source;

pub use json::{BankError, JsonBank};
pub use source::{InMemorySource, QuestionSource};
