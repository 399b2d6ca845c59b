use error_trail::traits::UserFacingResultExt;
use error_trail::{Diagnostic, Fault, TextParseError, UserResult};

#[test]
fn user_facing_wraps_err() {
    let result: Result<(), Fault> = Err(Fault::new("timeout"));
    let err = result.user_facing("Please try again later").unwrap_err();

    assert_eq!(err.message(), "Please try again later");
    assert!(!err.is_inner_user_facing());
    assert_eq!(err.inner().unwrap().message(), "timeout");
    assert_eq!(err.user_facing_messages().as_slice(), ["Please try again later"]);
}

#[test]
fn user_facing_passes_ok_through() {
    let result: Result<i32, Fault> = Ok(42);
    assert_eq!(result.user_facing("unused").unwrap(), 42);
}

#[test]
fn user_facing_with_is_lazy_on_ok() {
    let mut called = false;
    let result: Result<(), Fault> = Ok(());
    let _ = result.user_facing_with(|| {
        called = true;
        "should not be called".to_string()
    });
    assert!(!called, "Closure for user_facing_with should not be called on Ok result");
}

#[test]
fn user_facing_with_builds_message_on_err() {
    let id = 7;
    let result: Result<(), Fault> = Err(Fault::new("row missing"));
    let err = result.user_facing_with(|| format!("Order {id} does not exist")).unwrap_err();
    assert_eq!(err.message(), "Order 7 does not exist");
}

#[test]
fn promote_user_facing_exposes_the_error() {
    fn parse() -> UserResult<()> {
        Err(TextParseError::new("unknown key", 3, "foo = 1").unwrap()).promote_user_facing()
    }

    let err = parse().unwrap_err();
    assert!(err.is_inner_user_facing());
    assert_eq!(err.user_facing_chain().count(), 2);
}

#[test]
fn nested_user_facing_results_chain_messages() {
    fn inner() -> UserResult<()> {
        Err(Fault::new("EACCES")).user_facing("settings.ini is read-only")
    }
    fn outer() -> UserResult<()> {
        inner().user_facing("Could not save your settings")
    }

    let err = outer().unwrap_err();
    assert_eq!(err.user_facing_messages().join(" "), "Could not save your settings settings.ini is read-only");
}
