//! Shared primitives for the Aurelia alignment toolkit.
//!
//! `aurelia-core` provides the foundation the other Aurelia crates build on:
//!
//! - **Error types** — [`AureliaError`] and [`Result`] for structured error handling

pub mod error;

pub use error::{AureliaError, Result};
