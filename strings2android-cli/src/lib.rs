//! CLI library for testing purposes

pub mod args;
pub mod reporter;

pub use args::Args;
pub use reporter::ConsoleReporter;
