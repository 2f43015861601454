#![forbid(unsafe_code)]

pub mod terminal;

pub use terminal::TerminalPrompter;
