//! # lit-core
//!
//! Core error definitions shared by every crate of the liturgical calendar
//! workspace: the [`Error`] enum, the [`Result`] alias and the `ensure!`
//! macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
