//! General-purpose diagnostic error.
//!
//! [`Fault`] is the plain error of the model: a message, an optional cause and
//! [`Annotations`]. It is also the bridge for foreign error types, see
//! [`Fault::wrap`].

use crate::traits::diagnostic::source_of;
use crate::traits::Diagnostic;
use crate::types::alloc_type::{Arc, Cow, String, ToString};
use crate::types::{Annotate, Annotations};
use core::fmt::{self, Display};

/// Type identifier reported for foreign causes whose concrete type was erased.
const ERASED_TYPE_NAME: &str = "dyn core::error::Error";

/// A diagnostic error with a message, optional cause and annotations.
///
/// # Examples
///
/// ```
/// use error_trail::{format_error, Annotate, Fault};
///
/// let err = Fault::with_cause("request failed", Fault::new("connection reset"))
///     .with_data("attempt", 3);
///
/// let text = format_error(&err);
/// assert!(text.contains("Data.attempt: 3"));
/// assert!(text.contains("InnerException:"));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct Fault {
    message: String,
    type_name: Option<&'static str>,
    cause: Option<Arc<dyn Diagnostic>>,
    annotations: Annotations,
}

impl Fault {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            type_name: None,
            cause: None,
            annotations: Annotations::new(),
        }
    }

    /// Creates a fault raised in response to `cause`.
    #[inline]
    pub fn with_cause<C: Diagnostic>(message: impl Into<String>, cause: C) -> Self {
        Self::with_shared_cause(message, Arc::new(cause))
    }

    /// Creates a fault whose cause is already shared.
    #[inline]
    pub fn with_shared_cause(message: impl Into<String>, cause: Arc<dyn Diagnostic>) -> Self {
        Self { cause: Some(cause), ..Self::new(message) }
    }

    /// Adapts any `core::error::Error` into the model.
    ///
    /// The message is the error's `Display` text and the type identifier is
    /// `E`'s type name. The `source()` chain is copied into nested faults; their
    /// concrete types are erased behind `dyn core::error::Error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::{Diagnostic, Fault};
    ///
    /// let parse = "x1".parse::<u32>().unwrap_err();
    /// let fault = Fault::wrap(parse);
    ///
    /// assert!(fault.type_name().ends_with("ParseIntError"));
    /// assert_eq!(fault.message(), "invalid digit found in string");
    /// ```
    pub fn wrap<E>(error: E) -> Self
    where
        E: core::error::Error,
    {
        let mut fault = Self::snapshot(&error);
        fault.type_name = Some(core::any::type_name::<E>());
        fault
    }

    fn snapshot(error: &dyn core::error::Error) -> Self {
        Self {
            message: error.to_string(),
            type_name: Some(ERASED_TYPE_NAME),
            cause: error
                .source()
                .map(|source| Arc::new(Self::snapshot(source)) as Arc<dyn Diagnostic>),
            annotations: Annotations::new(),
        }
    }

    /// Returns the shared cause, if any.
    #[inline]
    pub fn shared_cause(&self) -> Option<&Arc<dyn Diagnostic>> {
        self.cause.as_ref()
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&crate::types::ErrorFormatBuilder::new(self), f);
        }
        f.write_str(&self.message)
    }
}

impl core::error::Error for Fault {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        source_of(&self.cause)
    }
}

impl Diagnostic for Fault {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    fn type_name(&self) -> &'static str {
        self.type_name.unwrap_or(core::any::type_name::<Self>())
    }

    fn inner(&self) -> Option<&dyn Diagnostic> {
        self.cause.as_deref()
    }

    fn annotations(&self) -> Option<&Annotations> {
        Some(&self.annotations)
    }
}

impl Annotate for Fault {
    #[inline]
    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}

/// Creates a [`Fault`] with a `format!`-style message and the calling module
/// as its origin.
///
/// # Examples
///
/// ```
/// use error_trail::{fault, Diagnostic};
///
/// let err = fault!("user {} not found", 42);
/// assert_eq!(err.message(), "user 42 not found");
/// assert_eq!(err.origin(), Some(module_path!()));
/// ```
#[macro_export]
macro_rules! fault {
    ($($arg:tt)*) => {
        $crate::Annotate::with_origin(
            $crate::Fault::new($crate::__private::format!($($arg)*)),
            ::core::module_path!(),
        )
    };
}
