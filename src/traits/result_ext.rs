//! Extension traits for classifying errors as they travel up through `Result`.
//!
//! [`UserFacingResultExt`] wraps or promotes an error as user-facing without a
//! `.map_err()` closure. [`ParseResultExt`] lets a layer that knows which file
//! was being parsed attach its path to a [`TextParseError`].
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::UserFacingResultExt;
//! use error_trail::{Fault, UserFacingError};
//!
//! fn connect() -> Result<(), Fault> {
//!     Err(Fault::new("connection refused (os error 111)"))
//! }
//!
//! fn sync() -> Result<(), UserFacingError> {
//!     connect().user_facing("Could not reach the sync server")
//! }
//!
//! let err = sync().unwrap_err();
//! assert_eq!(err.user_facing_messages().len(), 1);
//! ```

use crate::traits::Diagnostic;
use crate::types::alloc_type::String;
use crate::types::{TextParseError, UserFacingError};

/// Extension trait turning a `Result`'s error into a [`UserFacingError`].
pub trait UserFacingResultExt<T> {
    /// Wraps the error as diagnostic detail under a user-facing message.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::traits::UserFacingResultExt;
    /// use error_trail::Fault;
    ///
    /// let result: Result<(), Fault> = Err(Fault::new("timeout"));
    /// let err = result.user_facing("Please try again later").unwrap_err();
    ///
    /// assert!(!err.is_inner_user_facing());
    /// ```
    fn user_facing(self, message: impl Into<String>) -> Result<T, UserFacingError>;

    /// Like [`user_facing`](Self::user_facing), with the message built only on
    /// the error path.
    fn user_facing_with<F>(self, f: F) -> Result<T, UserFacingError>
    where
        F: FnOnce() -> String;

    /// Promotes the error itself as user-facing.
    fn promote_user_facing(self) -> Result<T, UserFacingError>;
}

impl<T, E: Diagnostic> UserFacingResultExt<T> for Result<T, E> {
    #[inline]
    fn user_facing(self, message: impl Into<String>) -> Result<T, UserFacingError> {
        self.map_err(|e| UserFacingError::with_cause(message, e))
    }

    #[inline]
    fn user_facing_with<F>(self, f: F) -> Result<T, UserFacingError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| UserFacingError::with_cause(f(), e))
    }

    #[inline]
    fn promote_user_facing(self) -> Result<T, UserFacingError> {
        self.map_err(UserFacingError::promote)
    }
}

/// Extension trait attaching a source path to a failed parse.
pub trait ParseResultExt<T> {
    /// Sets the error's path unless the parser already supplied one.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::traits::ParseResultExt;
    /// use error_trail::TextParseError;
    ///
    /// fn parse(text: &str) -> Result<u32, TextParseError> {
    ///     text.trim().parse().map_err(|_| TextParseError::new("expected a number", 1, text).unwrap())
    /// }
    ///
    /// let err = parse("abc").in_path("limits.txt").unwrap_err();
    /// assert_eq!(err.path(), "limits.txt");
    /// ```
    fn in_path(self, path: impl Into<String>) -> Result<T, TextParseError>;
}

impl<T> ParseResultExt<T> for Result<T, TextParseError> {
    fn in_path(self, path: impl Into<String>) -> Result<T, TextParseError> {
        self.map_err(|mut e| {
            if e.path().is_empty() {
                e.set_path(path);
            }
            e
        })
    }
}
