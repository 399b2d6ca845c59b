//! Stack trace reformatting and the small text helpers the chain walker uses.

use crate::types::alloc_type::String;
use crate::types::error_formatter::LineEnding;
use crate::types::ErrorVec;

/// Separator between a frame's call site and its location.
const LOCATION_SEPARATOR: &str = " in ";

/// Reformats a raw stack trace using two-space indentation and the platform
/// line terminator.
///
/// Frames of the form `at Frame.Method() in /path/file:line 10` become two
/// lines: the call site, then the location indented one level. Lines without
/// a location pass through trimmed but otherwise unchanged.
///
/// # Examples
///
/// ```
/// use error_trail::reformat_stack_trace;
///
/// let trace = "  at Foo.Bar() in /src/foo.cs:line 10\n  at Foo.Main()";
/// let lines: Vec<_> = reformat_stack_trace(trace).lines().map(str::to_owned).collect();
///
/// assert_eq!(lines, ["at Foo.Bar()", "  in /src/foo.cs:line 10", "at Foo.Main()"]);
/// ```
pub fn reformat_stack_trace(stack_trace: &str) -> String {
    reformat_stack_trace_with(stack_trace, "  ", LineEnding::Platform.as_str())
}

/// Reformats a raw stack trace with an explicit indent and line terminator.
pub fn reformat_stack_trace_with(stack_trace: &str, indent: &str, line_ending: &str) -> String {
    let mut lines: ErrorVec<String> = ErrorVec::new();

    for line in stack_trace.lines().map(str::trim) {
        match line.find(LOCATION_SEPARATOR) {
            Some(at) if at > 0 => {
                lines.push(String::from(&line[..at]));
                let mut location = String::with_capacity(indent.len() + line.len() - at);
                location.push_str(indent);
                location.push_str(&line[at + 1..]);
                lines.push(location);
            }
            _ => lines.push(String::from(line)),
        }
    }

    lines.join(line_ending)
}

/// Appends every line of `text`, prefixed by `indent` and terminated by
/// `line_ending`.
pub(crate) fn push_indented(out: &mut String, text: &str, indent: &str, line_ending: &str) {
    for line in text.lines() {
        out.push_str(indent);
        out.push_str(line);
        out.push_str(line_ending);
    }
}

/// Appends `line` followed by `line_ending`.
#[inline]
pub(crate) fn push_line(out: &mut String, line: &str, line_ending: &str) {
    out.push_str(line);
    out.push_str(line_ending);
}
