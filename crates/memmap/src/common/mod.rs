//! Common types shared by the reader and the renderer.
//!
//! 1. **Error Handling:** The crate-wide error enum and result alias.
//! 2. **Number Parsing:** Base-prefixed unsigned integer parsing for attribute files.

/// Error types.
pub mod error;

/// Attribute number parsing.
pub mod number;

pub use error::{MemmapError, Result};
pub use number::{ParseNumberError, parse_u64};
