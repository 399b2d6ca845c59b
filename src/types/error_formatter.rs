//! Cause chain rendering.
//!
//! The chain walker renders a [`Diagnostic`] and every cause beneath it as a
//! multi-line block meant for logs:
//!
//! ```text
//! could not load settings
//! Type: error_trail::types::fault::Fault
//! Data.attempt: 3
//! Source: app::settings
//! InnerException:
//!   Error in settings.ini on line 4
//!     expected '='
//!     name value
//!   Type: error_trail::types::parse_error::TextParseError
//! ```

use crate::traits::diagnostic::is_blank;
use crate::traits::Diagnostic;
use crate::types::alloc_type::String;
use crate::types::stack_trace::{push_indented, push_line, reformat_stack_trace_with};
use core::fmt::{Display, Write};

/// Line terminator used between rendered lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` everywhere else.
    #[default]
    Platform,
    Lf,
    CrLf,
}

impl LineEnding {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Trait for customizing how a cause chain is rendered.
///
/// Every method has a default, so an implementor only overrides what it
/// needs. [`format_chain`](Self::format_chain) drives the walk.
pub trait ErrorFormatter {
    fn indent(&self) -> &str {
        "  "
    }

    fn line_ending(&self) -> &str {
        LineEnding::Platform.as_str()
    }

    /// Number of nested causes rendered before the walk is cut short.
    ///
    /// `None` renders the whole chain.
    fn max_depth(&self) -> Option<usize> {
        None
    }

    fn format_stack_trace(&self, stack_trace: &str) -> String {
        reformat_stack_trace_with(stack_trace, self.indent(), self.line_ending())
    }

    /// Renders `error` and its causes. Absent input renders as empty text.
    fn format_chain(&self, error: Option<&dyn Diagnostic>) -> String {
        let mut out = String::new();
        if let Some(error) = error {
            write_level(self, error, 0, &mut out);
        }
        out
    }
}

fn write_level<F>(formatter: &F, error: &dyn Diagnostic, depth: usize, out: &mut String)
where
    F: ErrorFormatter + ?Sized,
{
    let nl = formatter.line_ending();
    let indent = formatter.indent();

    push_line(out, &error.message(), nl);
    let _ = write!(out, "Type: {}{}", error.type_name(), nl);

    if let Some(data) = error.data() {
        for (key, value) in data {
            let _ = write!(out, "Data.{}: {}{}", key, value, nl);
        }
    }
    if let Some(origin) = error.origin().filter(|s| !is_blank(s)) {
        let _ = write!(out, "Source: {}{}", origin, nl);
    }
    if let Some(help_link) = error.help_link().filter(|s| !is_blank(s)) {
        let _ = write!(out, "HelpLink: {}{}", help_link, nl);
    }
    if let Some(stack_trace) = error.stack_trace().filter(|s| !is_blank(s)) {
        push_line(out, "StackTrace:", nl);
        push_indented(out, &formatter.format_stack_trace(stack_trace), indent, nl);
    }
    if let Some(cause) = error.inner() {
        push_line(out, "InnerException:", nl);
        if formatter.max_depth().is_some_and(|max| depth >= max) {
            push_indented(out, "...", indent, nl);
            return;
        }
        let mut nested = String::new();
        write_level(formatter, cause, depth + 1, &mut nested);
        push_indented(out, &nested, indent, nl);
    }
}

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub indent: String,
    pub line_ending: LineEnding,
    pub reformat_stack_traces: bool,
    pub max_depth: Option<usize>,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            line_ending: LineEnding::Platform,
            reformat_stack_traces: true,
            max_depth: None,
        }
    }
}

impl ErrorFormatConfig {
    /// `\n` line endings regardless of platform.
    #[inline]
    pub fn unix() -> Self {
        Self { line_ending: LineEnding::Lf, ..Default::default() }
    }

    /// Keeps stack traces exactly as captured, only trimming each line.
    #[inline]
    pub fn raw_stack_traces() -> Self {
        Self { reformat_stack_traces: false, ..Default::default() }
    }

    /// Renders at most `depth` nested causes.
    #[inline]
    pub fn shallow(depth: usize) -> Self {
        Self { max_depth: Some(depth), ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn indent(&self) -> &str {
        &self.indent
    }

    fn line_ending(&self) -> &str {
        self.line_ending.as_str()
    }

    fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    fn format_stack_trace(&self, stack_trace: &str) -> String {
        if self.reformat_stack_traces {
            return reformat_stack_trace_with(stack_trace, &self.indent, self.line_ending());
        }
        let mut out = String::with_capacity(stack_trace.len());
        for (i, line) in stack_trace.lines().enumerate() {
            if i > 0 {
                out.push_str(self.line_ending());
            }
            out.push_str(line.trim());
        }
        out
    }
}

/// Builder for customizing chain output of a single error.
///
/// # Examples
///
/// ```
/// use error_trail::{ErrorFormatBuilder, Fault, LineEnding};
///
/// let err = Fault::with_cause("outer", Fault::new("inner"));
/// let text = ErrorFormatBuilder::new(&err)
///     .line_ending(LineEnding::Lf)
///     .indent("    ")
///     .to_string();
///
/// assert!(text.contains("InnerException:\n    inner\n"));
/// ```
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: Option<&'a dyn Diagnostic>,
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(error: &'a dyn Diagnostic) -> Self {
        Self { error: Some(error), config: ErrorFormatConfig::default() }
    }

    /// Builder over a possibly absent error; renders empty text for `None`.
    pub fn optional(error: Option<&'a dyn Diagnostic>) -> Self {
        Self { error, config: ErrorFormatConfig::default() }
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config.line_ending = line_ending;
        self
    }

    pub fn reformat_stack_traces(mut self, enabled: bool) -> Self {
        self.config.reformat_stack_traces = enabled;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }

    pub fn config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.config.format_chain(self.error))
    }
}

/// Renders `error` and its whole cause chain with the default configuration.
///
/// Returns empty text for `None`.
///
/// # Examples
///
/// ```
/// use error_trail::{format_diagnostic, Diagnostic, Fault};
///
/// assert_eq!(format_diagnostic(None), "");
///
/// let err = Fault::new("boom");
/// assert!(format_diagnostic(Some(&err as &dyn Diagnostic)).starts_with("boom"));
/// ```
pub fn format_diagnostic(error: Option<&dyn Diagnostic>) -> String {
    ErrorFormatConfig::default().format_chain(error)
}

/// Renders `error` and its whole cause chain with the default configuration.
#[inline]
pub fn format_error(error: &dyn Diagnostic) -> String {
    format_diagnostic(Some(error))
}
