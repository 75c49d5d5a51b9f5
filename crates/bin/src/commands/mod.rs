//! Command implementations, one module per area.

pub mod account;
pub mod favorites;
pub mod recipes;

/// Error type returned by every command
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
