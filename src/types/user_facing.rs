//! Errors whose message is safe to show an end user.
//!
//! A [`UserFacingError`] signals a problem the user caused or can do something
//! about. Its message, when not blank, is presentable as-is. Its cause is
//! presentable too when it is itself a `UserFacingError`, or when the error was
//! built by [promotion](UserFacingError::promote). Anything else beneath it is
//! diagnostic detail for logs only.
//!
//! # Examples
//!
//! ```
//! use error_trail::{Diagnostic, Fault, UserFacingError};
//!
//! let detail = UserFacingError::with_cause("settings.ini is read-only", Fault::new("EACCES"));
//! let err = UserFacingError::with_cause("Could not save your settings", detail);
//!
//! let shown: Vec<_> = err.user_facing_chain().map(|e| e.message().into_owned()).collect();
//! assert_eq!(shown, ["Could not save your settings", "settings.ini is read-only"]);
//! ```

use crate::traits::diagnostic::{is_blank, source_of};
use crate::traits::Diagnostic;
use crate::types::alloc_type::{Arc, Cow, String};
use crate::types::{Annotate, Annotations, ErrorVec};
use core::fmt::{self, Display};
use core::iter::FusedIterator;

/// A user-facing error, optionally wrapping a cause.
#[must_use]
#[derive(Debug, Clone)]
pub struct UserFacingError {
    message: String,
    cause: Option<Arc<dyn Diagnostic>>,
    inner_user_facing: bool,
    annotations: Annotations,
}

impl UserFacingError {
    /// Creates a user-facing error with no cause.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_parts(message.into(), None, false)
    }

    /// Creates a user-facing error raised in response to `cause`.
    ///
    /// `cause` is user-facing only if it is itself a `UserFacingError`; any
    /// other error is kept as diagnostic detail.
    #[inline]
    pub fn with_cause<C: Diagnostic>(message: impl Into<String>, cause: C) -> Self {
        Self::with_shared_cause(message, Arc::new(cause))
    }

    #[inline]
    pub fn with_shared_cause(message: impl Into<String>, cause: Arc<dyn Diagnostic>) -> Self {
        Self::from_parts(message.into(), Some(cause), false)
    }

    /// Promotes `error` as user-facing.
    ///
    /// The new error copies `error`'s message and wraps it as a user-facing
    /// cause. The promotion does not extend to `error`'s own cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::{Diagnostic, Fault, UserFacingError};
    ///
    /// let err = UserFacingError::promote(Fault::new("disk quota exceeded"));
    ///
    /// assert_eq!(err.message(), "disk quota exceeded");
    /// assert!(err.is_inner_user_facing());
    /// assert_eq!(err.inner().unwrap().message(), "disk quota exceeded");
    /// ```
    pub fn promote<E: Diagnostic>(error: E) -> Self {
        Self::promote_shared(Arc::new(error))
    }

    pub fn promote_shared(error: Arc<dyn Diagnostic>) -> Self {
        let message = error.message().into_owned();
        Self::from_parts(message, Some(error), true)
    }

    fn from_parts(
        message: String,
        cause: Option<Arc<dyn Diagnostic>>,
        inner_user_facing: bool,
    ) -> Self {
        Self { message, cause, inner_user_facing, annotations: Annotations::new() }
    }

    /// Can the cause be shown to the user even though it is not a
    /// `UserFacingError`?
    #[inline]
    pub fn is_inner_user_facing(&self) -> bool {
        self.inner_user_facing
    }

    /// Returns the shared cause, if any.
    #[inline]
    pub fn shared_cause(&self) -> Option<&Arc<dyn Diagnostic>> {
        self.cause.as_ref()
    }

    /// Errors in this chain that are safe to show the user, outermost first.
    ///
    /// The iterator is lazy and starts over on every call. It never yields an
    /// error with a blank message, and never walks past a cause that is neither
    /// a `UserFacingError` nor promoted.
    #[inline]
    pub fn user_facing_chain(&self) -> UserFacingChain<'_> {
        UserFacingChain { next: Some(Link::User(self)) }
    }

    /// Messages of [`user_facing_chain`](Self::user_facing_chain), in order.
    pub fn user_facing_messages(&self) -> ErrorVec<Cow<'_, str>> {
        self.user_facing_chain().map(|error| error.message()).collect()
    }
}

impl Display for UserFacingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&crate::types::ErrorFormatBuilder::new(self), f);
        }
        f.write_str(&self.message)
    }
}

impl core::error::Error for UserFacingError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        source_of(&self.cause)
    }
}

impl Diagnostic for UserFacingError {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    fn inner(&self) -> Option<&dyn Diagnostic> {
        self.cause.as_deref()
    }

    fn annotations(&self) -> Option<&Annotations> {
        Some(&self.annotations)
    }

    fn as_user_facing(&self) -> Option<&UserFacingError> {
        Some(self)
    }
}

impl Annotate for UserFacingError {
    #[inline]
    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}

#[derive(Clone, Copy)]
enum Link<'a> {
    User(&'a UserFacingError),
    Promoted(&'a dyn Diagnostic),
}

/// Iterator over the user-presentable part of a [`UserFacingError`] chain.
///
/// Created by [`UserFacingError::user_facing_chain`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct UserFacingChain<'a> {
    next: Option<Link<'a>>,
}

impl<'a> Iterator for UserFacingChain<'a> {
    type Item = &'a dyn Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next.take()? {
                Link::User(error) => {
                    self.next = error.cause.as_deref().and_then(|cause| {
                        match cause.as_user_facing() {
                            Some(user) => Some(Link::User(user)),
                            None if error.inner_user_facing => Some(Link::Promoted(cause)),
                            None => None,
                        }
                    });
                    if !is_blank(&error.message) {
                        return Some(error);
                    }
                }
                Link::Promoted(cause) => {
                    if !is_blank(&cause.message()) {
                        return Some(cause);
                    }
                }
            }
        }
    }
}

impl FusedIterator for UserFacingChain<'_> {}

impl fmt::Debug for UserFacingChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFacingChain").finish_non_exhaustive()
    }
}
