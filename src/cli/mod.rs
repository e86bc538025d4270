//! # CLI Module
//!
//! Command-line access to the dispatcher, mostly for checking routing
//! decisions against a YAML router configuration (see [`crate::config`]).
//!
//! ## Commands
//!
//! ### `tokenize`
//!
//! Print the segments a path reduces to:
//!
//! ```bash
//! segrouter tokenize "/a//b?x=1"
//! ```
//!
//! ### `resolve`
//!
//! Report which component or controller the first segment selects, without
//! instantiating or invoking anything:
//!
//! ```bash
//! segrouter resolve --config router.yaml /test/lol
//! ```
//!
//! ### `dispatch`
//!
//! Run the full lifecycle and print the action result as JSON:
//!
//! ```bash
//! SEGR_CONFIG=router.yaml segrouter dispatch /users/42 --verb PUT
//! ```
//!
//! Without `--config` (or `SEGR_CONFIG`) an empty router of the requested
//! flavor is used.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, run_cli, Cli, Commands};
