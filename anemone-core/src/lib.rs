//! Shared primitives and traits for the anemone sequence-analysis workspace.
//!
//! `anemone-core` provides the foundation the other anemone crates build on:
//!
//! - **Error types** — [`AnemoneError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Sequence`], [`Scored`], [`Summarizable`]
//!
//! Errors are always returned as values; no operation in the workspace panics
//! on invalid input.

pub mod error;
pub mod traits;

pub use error::{AnemoneError, Result};
pub use traits::*;
