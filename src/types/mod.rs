//! Error types and the chain walker.
//!
//! # Examples
//!
//! ```
//! use error_trail::{format_error, Annotate, Fault, TextParseError, UserFacingError};
//!
//! let parse = TextParseError::with_path("expected '='", "settings.ini", 4, "name value").unwrap();
//! let err = UserFacingError::with_cause("Your settings file is damaged", parse)
//!     .with_help_link("https://example.com/settings");
//!
//! let log = format_error(&err);
//! assert!(log.contains("HelpLink: https://example.com/settings"));
//! assert!(log.contains("Error in settings.ini on line 4"));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod annotations;
pub mod argument_error;
pub mod error_formatter;
pub mod fault;
pub mod parse_error;
pub mod stack_trace;
pub mod user_facing;

pub use annotations::*;
pub use argument_error::ArgumentError;
pub use error_formatter::*;
pub use fault::Fault;
pub use parse_error::{TextParseError, TextParseErrorBuilder};
pub use stack_trace::{reformat_stack_trace, reformat_stack_trace_with};
pub use user_facing::{UserFacingChain, UserFacingError};

/// SmallVec-backed collection used for collected chains.
///
/// Uses inline storage for one element, the common case of a user-facing
/// error with no user-facing detail beneath it.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Result alias for operations that fail with a [`UserFacingError`].
pub type UserResult<T> = Result<T, UserFacingError>;
