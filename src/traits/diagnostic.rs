//! The capability set shared by every error the chain walker can render.
//!
//! [`Diagnostic`] is the crate's notion of "an error": a message, an optional
//! cause, a type identifier, and a handful of optional annotations. The crate's
//! own error types implement it, and callers can implement it for theirs.
//!
//! # Examples
//!
//! ```
//! use error_trail::{format_error, Diagnostic};
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! impl core::fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         f.write_str("operation timed out")
//!     }
//! }
//!
//! impl core::error::Error for Timeout {}
//! impl Diagnostic for Timeout {}
//!
//! let text = format_error(&Timeout);
//! assert!(text.starts_with("operation timed out"));
//! assert!(text.contains("Type: "));
//! ```

use crate::types::alloc_type::{Arc, BTreeMap, Cow, String, ToString};
use crate::types::{Annotations, UserFacingError};

/// Auxiliary key-value data attached to a diagnostic, iterated in key order.
pub type Data = BTreeMap<String, String>;

/// Access to a diagnostic as a plain `core::error::Error` trait object.
///
/// Blanket-implemented for every sized error type, so `dyn Diagnostic` can hand
/// out its causes through [`core::error::Error::source`].
pub trait AsStdError {
    fn as_std_error(&self) -> &(dyn core::error::Error + Send + Sync + 'static);
}

impl<T> AsStdError for T
where
    T: core::error::Error + Send + Sync + 'static,
{
    #[inline]
    fn as_std_error(&self) -> &(dyn core::error::Error + Send + Sync + 'static) {
        self
    }
}

/// An error value the chain walker knows how to render.
///
/// Only [`Display`](core::fmt::Display) and [`Debug`](core::fmt::Debug) are
/// required; every other capability has a default. Types that carry
/// [`Annotations`] only need to return them from [`annotations`](Self::annotations)
/// to expose data, origin, help link and stack trace.
pub trait Diagnostic: core::error::Error + AsStdError + Send + Sync + 'static {
    /// Message of this error alone, without its causes. May be empty.
    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    /// Fully-qualified type identifier.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// The error this one was raised in response to.
    fn inner(&self) -> Option<&dyn Diagnostic> {
        None
    }

    /// Optional ambient annotations owned by this error.
    fn annotations(&self) -> Option<&Annotations> {
        None
    }

    fn data(&self) -> Option<&Data> {
        self.annotations().map(Annotations::data)
    }

    /// Origin tag, e.g. the module that raised the error.
    fn origin(&self) -> Option<&str> {
        self.annotations().and_then(Annotations::origin)
    }

    fn help_link(&self) -> Option<&str> {
        self.annotations().and_then(Annotations::help_link)
    }

    fn stack_trace(&self) -> Option<&str> {
        self.annotations().and_then(Annotations::stack_trace)
    }

    /// Downcast hook used by the user-facing chain.
    ///
    /// Only [`UserFacingError`] returns `Some`.
    fn as_user_facing(&self) -> Option<&UserFacingError> {
        None
    }
}

/// Returns `true` when `text` is empty or whitespace only.
#[inline]
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// `core::error::Error::source` for types holding a shared cause.
#[inline]
pub(crate) fn source_of(
    cause: &Option<Arc<dyn Diagnostic>>,
) -> Option<&(dyn core::error::Error + 'static)> {
    match cause {
        Some(cause) => {
            let error: &(dyn core::error::Error + 'static) = (**cause).as_std_error();
            Some(error)
        }
        None => None,
    }
}
