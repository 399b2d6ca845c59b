//! Unexpected content encountered while parsing a text source.
//!
//! [`TextParseError`] carries where the problem is (path, 1-based line number,
//! the offending line) and what it is (a description). Its message is derived
//! from those fields every time it is read:
//!
//! ```text
//! Error in settings.ini on line 4
//!   expected '='
//!   name value
//! ```

use crate::traits::diagnostic::source_of;
use crate::traits::Diagnostic;
use crate::types::alloc_type::{Arc, String};
use crate::types::argument_error::{at_least, required};
use crate::types::error_formatter::LineEnding;
use crate::types::{Annotate, Annotations, ArgumentError};
use core::fmt::{self, Display};

/// Unexpected content at a known location in a text source.
///
/// # Examples
///
/// ```
/// use error_trail::TextParseError;
///
/// let err = TextParseError::with_path("bad token", "file.txt", 5, "x=?").unwrap();
/// let lines: Vec<_> = err.to_string().lines().map(str::to_owned).collect();
///
/// assert_eq!(lines, ["Error in file.txt on line 5", "  bad token", "  x=?"]);
/// ```
#[derive(Debug, Clone)]
pub struct TextParseError {
    description: String,
    path: String,
    line_number: usize,
    line: String,
    cause: Option<Arc<dyn Diagnostic>>,
    annotations: Annotations,
}

impl TextParseError {
    /// Creates a parse error without a path.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::Required`] if `description` is blank,
    /// [`ArgumentError::OutOfRange`] if `line_number` is 0.
    pub fn new(
        description: impl Into<String>,
        line_number: usize,
        line: impl Into<String>,
    ) -> Result<Self, ArgumentError> {
        Self::builder(description, line_number).line(line).build()
    }

    /// Creates a parse error in the source named `path`.
    ///
    /// # Errors
    ///
    /// Same as [`TextParseError::new`].
    pub fn with_path(
        description: impl Into<String>,
        path: impl Into<String>,
        line_number: usize,
        line: impl Into<String>,
    ) -> Result<Self, ArgumentError> {
        Self::builder(description, line_number).path(path).line(line).build()
    }

    /// Starts a builder; the only way to attach a cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::{Diagnostic, Fault, TextParseError};
    ///
    /// let err = TextParseError::builder("not a number", 2)
    ///     .line("port = http")
    ///     .cause(Fault::wrap("http".parse::<u16>().unwrap_err()))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(err.path(), "");
    /// assert!(err.inner().is_some());
    /// ```
    pub fn builder(description: impl Into<String>, line_number: usize) -> TextParseErrorBuilder {
        TextParseErrorBuilder {
            description: description.into(),
            path: None,
            line_number,
            line: None,
            cause: None,
        }
    }

    /// What was unexpected.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Path or name of the source being parsed; empty when unknown.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Attaches the source path after construction.
    ///
    /// Meant for a catching layer that knows the path when the parser did not.
    #[inline]
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// 1-based line number of the offending line.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Contents of the offending line; empty when not supplied.
    #[inline]
    pub fn line(&self) -> &str {
        &self.line
    }

    fn write_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nl = LineEnding::Platform.as_str();
        f.write_str("Error")?;
        if !self.path.is_empty() {
            write!(f, " in {}", self.path)?;
        }
        write!(f, " on line {}{}", self.line_number, nl)?;
        write!(f, "  {}{}", self.description, nl)?;
        write!(f, "  {}", self.line)
    }
}

impl Display for TextParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&crate::types::ErrorFormatBuilder::new(self), f);
        }
        self.write_message(f)
    }
}

impl core::error::Error for TextParseError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        source_of(&self.cause)
    }
}

impl Diagnostic for TextParseError {
    fn inner(&self) -> Option<&dyn Diagnostic> {
        self.cause.as_deref()
    }

    fn annotations(&self) -> Option<&Annotations> {
        Some(&self.annotations)
    }
}

impl Annotate for TextParseError {
    #[inline]
    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}

/// Builder for [`TextParseError`], created by [`TextParseError::builder`].
#[must_use]
#[derive(Debug)]
pub struct TextParseErrorBuilder {
    description: String,
    path: Option<String>,
    line_number: usize,
    line: Option<String>,
    cause: Option<Arc<dyn Diagnostic>>,
}

impl TextParseErrorBuilder {
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    pub fn cause<C: Diagnostic>(self, cause: C) -> Self {
        self.shared_cause(Arc::new(cause))
    }

    pub fn shared_cause(mut self, cause: Arc<dyn Diagnostic>) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Validates the arguments and builds the error.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::Required`] if the description is blank,
    /// [`ArgumentError::OutOfRange`] if the line number is 0.
    pub fn build(self) -> Result<TextParseError, ArgumentError> {
        required(&self.description, "description")?;
        at_least(self.line_number, 1, "line_number")?;

        Ok(TextParseError {
            description: self.description,
            path: self.path.unwrap_or_default(),
            line_number: self.line_number,
            line: self.line.unwrap_or_default(),
            cause: self.cause,
            annotations: Annotations::new(),
        })
    }
}
