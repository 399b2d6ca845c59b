use error_trail::{format_error, Annotate, Diagnostic, Fault, TextParseError, UserFacingError};
use std::sync::Arc;

fn messages(err: &UserFacingError) -> Vec<String> {
    err.user_facing_chain().map(|e| e.message().into_owned()).collect()
}

#[test]
fn message_only_has_no_cause() {
    let err = UserFacingError::new("File not found");
    assert_eq!(err.message(), "File not found");
    assert!(err.inner().is_none());
    assert!(!err.is_inner_user_facing());
    assert_eq!(messages(&err), ["File not found"]);
}

#[test]
fn message_with_cause_is_not_promoted() {
    let err = UserFacingError::with_cause("Save failed", Fault::new("EACCES"));
    assert!(!err.is_inner_user_facing());
    assert_eq!(err.inner().unwrap().message(), "EACCES");
}

#[test]
fn promotion_copies_message_and_wraps_error() {
    let inner = Arc::new(Fault::new("disk quota exceeded")) as Arc<dyn Diagnostic>;
    let err = UserFacingError::promote_shared(Arc::clone(&inner));

    assert_eq!(err.message(), inner.message());
    assert!(Arc::ptr_eq(err.shared_cause().unwrap(), &inner));
    assert!(err.is_inner_user_facing());
}

#[test]
fn chain_stops_at_diagnostic_cause() {
    let d = Fault::new("stack overflow in parser");
    let u2 = UserFacingError::with_cause("B", d);
    let u1 = UserFacingError::with_cause("A", u2);

    assert_eq!(messages(&u1), ["A", "B"]);
}

#[test]
fn chain_includes_promoted_cause() {
    let d = Fault::new("D");
    let u2 = UserFacingError::promote(d);
    let u1 = UserFacingError::with_cause("A", u2);

    // U2 copies D's message, then D itself follows.
    assert_eq!(messages(&u1), ["A", "D", "D"]);

    let types: Vec<_> = u1.user_facing_chain().map(|e| e.type_name()).collect();
    assert!(types[0].ends_with("UserFacingError"));
    assert!(types[1].ends_with("UserFacingError"));
    assert!(types[2].ends_with("Fault"));
}

#[test]
fn flag_on_outer_error_is_irrelevant_when_cause_is_user_facing() {
    let u2 = UserFacingError::with_cause("B", Fault::new("D"));
    let u1 = UserFacingError::promote(u2);

    // The promoted error is itself user-facing, so its own chain decides.
    assert_eq!(messages(&u1), ["B", "B"]);
}

#[test]
fn promotion_is_one_level_deep() {
    let root = Fault::new("connection reset by peer");
    let middle = Fault::with_cause("request to billing failed", root);
    let err = UserFacingError::promote(middle);

    assert_eq!(messages(&err), ["request to billing failed", "request to billing failed"]);
    assert!(!messages(&err).iter().any(|m| m.contains("reset")));
}

#[test]
fn blank_messages_are_skipped() {
    let inner = UserFacingError::with_cause("Detail", Fault::new("hidden"));
    let outer = UserFacingError::with_cause("   ", inner);

    assert_eq!(messages(&outer), ["Detail"]);
}

#[test]
fn blank_promoted_cause_is_skipped() {
    let err = UserFacingError::promote(Fault::new(""));
    assert_eq!(err.user_facing_chain().count(), 0);
}

#[test]
fn chain_never_yields_blank_messages() {
    let deep = UserFacingError::promote(Fault::new(" "));
    let mid = UserFacingError::with_cause("", deep);
    let top = UserFacingError::with_cause("Top", mid);

    for e in top.user_facing_chain() {
        assert!(!e.message().trim().is_empty());
    }
    assert_eq!(messages(&top), ["Top"]);
}

#[test]
fn transitive_through_long_user_facing_run() {
    let mut err = UserFacingError::with_cause("level 0", Fault::new("secret"));
    for i in 1..50 {
        err = UserFacingError::with_cause(format!("level {i}"), err);
    }

    let got = messages(&err);
    assert_eq!(got.len(), 50);
    assert_eq!(got[0], "level 49");
    assert_eq!(got[49], "level 0");
}

#[test]
fn chain_restarts_on_each_call() {
    let err = UserFacingError::with_cause("A", UserFacingError::new("B"));
    assert_eq!(err.user_facing_chain().count(), 2);
    assert_eq!(err.user_facing_chain().count(), 2);
}

#[test]
fn chain_is_fused() {
    let err = UserFacingError::new("A");
    let mut chain = err.user_facing_chain();
    assert!(chain.next().is_some());
    assert!(chain.next().is_none());
    assert!(chain.next().is_none());
}

#[test]
fn user_facing_messages_collects_in_order() {
    let err = UserFacingError::with_cause("A", UserFacingError::new("B"));
    assert_eq!(err.user_facing_messages().join(": "), "A: B");
}

#[test]
fn promoted_parse_error_is_presentable() {
    let parse = TextParseError::with_path("unknown key 'colour'", "app.ini", 7, "colour = red").unwrap();
    let err = UserFacingError::with_cause("Settings are invalid", UserFacingError::promote(parse));

    let got = messages(&err);
    assert_eq!(got.len(), 3);
    assert!(got[2].starts_with("Error in app.ini on line 7"));
}

#[test]
fn as_user_facing_downcasts_only_user_facing_errors() {
    let err = UserFacingError::new("A");
    let dynamic: &dyn Diagnostic = &err;
    assert!(dynamic.as_user_facing().is_some());
    assert!(Fault::new("x").as_user_facing().is_none());
}

#[test]
fn full_chain_is_still_available_for_logs() {
    let err = UserFacingError::with_cause("B", Fault::new("stack overflow in parser"));
    let log = format_error(&err);
    assert!(log.contains("stack overflow in parser"));
    assert!(log.contains("UserFacingError"));
}

#[test]
fn annotations_do_not_affect_chain() {
    let err = UserFacingError::new("A").with_data("request_id", "r-1");
    assert_eq!(messages(&err), ["A"]);
    assert!(format_error(&err).contains("Data.request_id: r-1"));
}
