//! Cause-chain rendering and user-facing error classification.
//!
//! Every error in the model implements [`Diagnostic`]: a message, an optional
//! cause and a few optional annotations. On top of that the crate provides
//! - a chain walker ([`format_error`]) rendering an error and all of its causes
//!   for logs,
//! - [`TextParseError`] for unexpected content at a known line of a text source,
//! - [`UserFacingError`], separating what may be shown to an end user from
//!   diagnostic detail that must stay in the logs.
//!
//! # Examples
//!
//! ## Rendering a Chain for Logs
//!
//! ```
//! use error_trail::{format_error, Annotate, Fault};
//!
//! let err = Fault::with_cause("could not load settings", Fault::new("file not found"))
//!     .with_data("path", "settings.ini");
//!
//! let log = format_error(&err);
//! assert!(log.starts_with("could not load settings"));
//! assert!(log.contains("Data.path: settings.ini"));
//! assert!(log.contains("InnerException:"));
//! ```
//!
//! ## Showing Only What the User May See
//!
//! ```
//! use error_trail::{Diagnostic, TextParseError, UserFacingError};
//!
//! let parse = TextParseError::with_path("expected '='", "settings.ini", 4, "name value").unwrap();
//! let err = UserFacingError::with_cause("Your settings file is damaged", parse);
//!
//! let shown: Vec<_> = err.user_facing_chain().map(|e| e.message().into_owned()).collect();
//! assert_eq!(shown, ["Your settings file is damaged"]);
//! ```
//!
//! ## Promotion
//!
//! ```
//! use error_trail::{TextParseError, UserFacingError};
//!
//! let parse = TextParseError::new("unknown key 'colour'", 7, "colour = red").unwrap();
//! let err = UserFacingError::promote(parse);
//!
//! assert_eq!(err.user_facing_chain().count(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits of the error model
pub mod traits;
/// Error types, annotations and the chain walker
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    format_diagnostic, format_error, reformat_stack_trace, Annotate, Annotations, ArgumentError,
    ErrorFormatBuilder, ErrorFormatConfig, ErrorFormatter, ErrorVec, Fault, LineEnding,
    TextParseError, UserFacingChain, UserFacingError, UserResult,
};

#[doc(hidden)]
pub mod __private {
    pub use crate::types::alloc_type::format;
}
