use error_trail::{fault, format_error, Annotate, Diagnostic, Fault};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
struct Outer {
    source: std::io::Error,
}

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to open settings")
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn new_fault_has_no_cause() {
    let err = Fault::new("boom");
    assert_eq!(err.message(), "boom");
    assert!(Diagnostic::inner(&err).is_none());
    assert!(err.source().is_none());
}

#[test]
fn with_cause_links_both_models() {
    let err = Fault::with_cause("outer", Fault::new("inner"));
    assert_eq!(Diagnostic::inner(&err).unwrap().message(), "inner");
    assert_eq!(err.source().unwrap().to_string(), "inner");
}

#[test]
fn wrap_keeps_concrete_type_and_source_chain() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.ini missing");
    let err = Fault::wrap(Outer { source: io });

    assert!(err.type_name().ends_with("Outer"));
    assert_eq!(err.message(), "failed to open settings");

    let cause = Diagnostic::inner(&err).unwrap();
    assert_eq!(cause.message(), "settings.ini missing");
    assert_eq!(cause.type_name(), "dyn core::error::Error");
    assert!(Diagnostic::inner(cause).is_none());
}

#[test]
fn wrapped_chain_renders_every_level() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.ini missing");
    let text = format_error(&Fault::wrap(Outer { source: io }));
    assert!(text.contains("failed to open settings"));
    assert!(text.contains("InnerException:"));
    assert!(text.contains("settings.ini missing"));
}

#[test]
fn fault_macro_formats_and_records_origin() {
    let err = fault!("user {} not found", 42);
    assert_eq!(err.message(), "user 42 not found");
    assert_eq!(err.origin(), Some(module_path!()));
    assert!(format_error(&err).contains(&format!("Source: {}", module_path!())));
}

#[test]
fn fault_is_cloneable_and_shares_its_cause() {
    let err = Fault::with_cause("outer", Fault::new("inner")).with_data("k", "v");
    let copy = err.clone();
    assert!(std::sync::Arc::ptr_eq(
        err.shared_cause().unwrap(),
        copy.shared_cause().unwrap()
    ));
    assert_eq!(copy.data(), err.data());
}

#[test]
fn fault_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Fault>();
    assert_send_sync::<error_trail::TextParseError>();
    assert_send_sync::<error_trail::UserFacingError>();
}
