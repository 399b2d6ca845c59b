use error_trail::reformat_stack_trace;
use error_trail::types::reformat_stack_trace_with;

#[test]
fn frame_with_location_splits_in_two() {
    let out = reformat_stack_trace_with("at Foo.Bar() in /src/foo.cs:line 10", "  ", "\n");
    assert_eq!(out, "at Foo.Bar()\n  in /src/foo.cs:line 10");
}

#[test]
fn frame_without_location_passes_through() {
    assert_eq!(reformat_stack_trace_with("at Foo.Bar()", "  ", "\n"), "at Foo.Bar()");
}

#[test]
fn lines_are_trimmed() {
    let out = reformat_stack_trace_with("   at A()  \n\tat B() in b.rs:line 2 ", "  ", "\n");
    assert_eq!(out, "at A()\nat B()\n  in b.rs:line 2");
}

#[test]
fn only_first_separator_splits() {
    let out = reformat_stack_trace_with("at Load() in /data in use/x.cs:line 1", "  ", "\n");
    assert_eq!(out, "at Load()\n  in /data in use/x.cs:line 1");
}

#[test]
fn separator_at_line_start_is_kept() {
    // After trimming a line cannot start with the separator's leading space,
    // so a frame that begins with "in" stays whole.
    let out = reformat_stack_trace_with("in /src/foo.cs:line 3", "  ", "\n");
    assert_eq!(out, "in /src/foo.cs:line 3");
}

#[test]
fn separator_is_case_sensitive() {
    let out = reformat_stack_trace_with("at Foo() IN bar.cs", "  ", "\n");
    assert_eq!(out, "at Foo() IN bar.cs");
}

#[test]
fn lines_rejoin_with_given_terminator() {
    let out = reformat_stack_trace_with("at A()\nat B()", "  ", "\r\n");
    assert_eq!(out, "at A()\r\nat B()");
}

#[test]
fn default_reformat_uses_two_space_indent() {
    let out = reformat_stack_trace("at Foo.Bar() in /src/foo.cs:line 10");
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines, ["at Foo.Bar()", "  in /src/foo.cs:line 10"]);
    assert!(lines[1].ends_with("/src/foo.cs:line 10"));
}

#[test]
fn rust_backtrace_frames_are_left_alone() {
    let trace = "   0: app::main\n             at ./src/main.rs:4:5";
    let out = reformat_stack_trace_with(trace, "  ", "\n");
    assert_eq!(out, "0: app::main\nat ./src/main.rs:4:5");
}
