//! Shared primitives for the maftag workspace.
//!
//! `maftag-core` provides the foundation the other maftag crates build on:
//!
//! - **Error types** — [`MaftagError`] and [`Result`] for structured error handling
//! - **Traits** — [`Summarizable`] for one-line display summaries

pub mod error;
pub mod traits;

pub use error::{MaftagError, Result};
pub use traits::*;
