//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fault!`]
//! - **Types**: [`Fault`], [`TextParseError`], [`UserFacingError`]
//! - **Traits**: [`Diagnostic`], [`Annotate`], [`UserFacingResultExt`], [`ParseResultExt`]
//! - **Functions**: [`format_error`], [`format_diagnostic`]
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn read_port(line: &str) -> Result<u16, TextParseError> {
//!     line.trim()
//!         .parse()
//!         .map_err(|_| TextParseError::new("port must be a number", 1, line).unwrap())
//! }
//!
//! fn load() -> UserResult<u16> {
//!     read_port("http").in_path("server.conf").promote_user_facing()
//! }
//!
//! let err = load().unwrap_err();
//! assert!(err.message().starts_with("Error in server.conf on line 1"));
//! ```

pub use crate::fault;

pub use crate::types::{
    format_diagnostic, format_error, Fault, TextParseError, UserFacingError, UserResult,
};

pub use crate::traits::{Diagnostic, ParseResultExt, UserFacingResultExt};
pub use crate::types::Annotate;
