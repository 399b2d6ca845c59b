//! Optional ambient fields carried alongside an error's message and cause.

use crate::traits::diagnostic::Data;
use crate::types::alloc_type::{String, ToString};
use core::fmt::Display;

/// Data, origin, help link and stack trace of a single error.
///
/// Every field is optional. Annotations are set while the error is still owned
/// by its creator, through [`Annotate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    data: Data,
    origin: Option<String>,
    help_link: Option<String>,
    stack_trace: Option<String>,
}

impl Annotations {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn data(&self) -> &Data {
        &self.data
    }

    #[inline]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    #[inline]
    pub fn help_link(&self) -> Option<&str> {
        self.help_link.as_deref()
    }

    #[inline]
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    /// Inserts a data entry using the `Display` text of key and value.
    ///
    /// An existing entry with the same key is replaced.
    pub fn insert_data<K: Display, V: Display>(&mut self, key: K, value: V) {
        self.data.insert(key.to_string(), value.to_string());
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = Some(origin.into());
    }

    pub fn set_help_link(&mut self, help_link: impl Into<String>) {
        self.help_link = Some(help_link.into());
    }

    pub fn set_stack_trace(&mut self, stack_trace: impl Into<String>) {
        self.stack_trace = Some(stack_trace.into());
    }

    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
            && self.origin.is_none()
            && self.help_link.is_none()
            && self.stack_trace.is_none()
    }
}

/// Builder-style setters for errors that own [`Annotations`].
///
/// # Examples
///
/// ```
/// use error_trail::{Annotate, Diagnostic, Fault};
///
/// let err = Fault::new("disk full")
///     .with_data("device", "/dev/sda1")
///     .with_origin("storage")
///     .with_help_link("https://example.com/disk-full");
///
/// assert_eq!(err.data().unwrap()["device"], "/dev/sda1");
/// assert_eq!(err.origin(), Some("storage"));
/// ```
pub trait Annotate: Sized {
    fn annotations_mut(&mut self) -> &mut Annotations;

    #[must_use]
    fn with_data<K: Display, V: Display>(mut self, key: K, value: V) -> Self {
        self.annotations_mut().insert_data(key, value);
        self
    }

    #[must_use]
    fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.annotations_mut().set_origin(origin);
        self
    }

    #[must_use]
    fn with_help_link(mut self, help_link: impl Into<String>) -> Self {
        self.annotations_mut().set_help_link(help_link);
        self
    }

    #[must_use]
    fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.annotations_mut().set_stack_trace(stack_trace);
        self
    }

    /// Captures the current backtrace as this error's stack trace.
    ///
    /// Honors `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`: when capture is disabled
    /// the stack trace is left unset.
    #[cfg(feature = "std")]
    #[must_use]
    fn with_backtrace(mut self) -> Self {
        let backtrace = std::backtrace::Backtrace::capture();
        if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            self.annotations_mut().set_stack_trace(backtrace.to_string());
        }
        self
    }

    /// Captures a backtrace regardless of environment variables.
    #[cfg(feature = "std")]
    #[must_use]
    fn with_forced_backtrace(mut self) -> Self {
        let backtrace = std::backtrace::Backtrace::force_capture();
        self.annotations_mut().set_stack_trace(backtrace.to_string());
        self
    }
}
