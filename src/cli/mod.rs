//! CLI command handlers.

pub mod args;
pub mod dispatch;
pub mod handlers;

pub use args::{Cli, Commands};
