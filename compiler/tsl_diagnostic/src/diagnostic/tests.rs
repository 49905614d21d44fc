use pretty_assertions::assert_eq;
use tsl_ir::LogArgKind;

use super::*;

#[test]
fn test_builder() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("boom")
        .with_secondary_label(Span::new(0, 1), "context")
        .with_label(Span::new(4, 8), "here")
        .with_note("more");

    assert_eq!(diag.primary_span(), Some(Span::new(4, 8)));
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.notes, vec!["more".to_string()]);
}

#[test]
fn test_no_label_has_no_primary_span() {
    let diag = Diagnostic::error(ErrorCode::E2001).with_message("bare");
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn test_circular_reference_message() {
    let diag = circular_reference(Span::new(10, 12), Span::new(0, 3), &["c_a", "c_b", "c_a"]);
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.primary_span(), Some(Span::new(10, 12)));
    assert_eq!(
        diag.labels[1],
        Label::secondary(Span::new(0, 3), "`c_a` declared here")
    );
    assert_eq!(diag.message, "circular reference: `c_a` depends on itself");
    assert_eq!(diag.notes, vec!["cycle: c_a -> c_b -> c_a".to_string()]);
}

#[test]
fn test_display() {
    let diag = circular_reference(Span::new(1, 2), Span::new(0, 1), &["x", "x"]);
    assert_eq!(
        diag.to_string(),
        "error [E2001]: circular reference: `x` depends on itself\n  \
         --> 1..2: reference closes the cycle here\n      \
         0..1: `x` declared here\n  = note: cycle: x -> x"
    );
}

#[test]
fn test_invalid_log_argument() {
    let err = LogArgError::KindMismatch {
        expected: LogArgKind::Value,
        found: LogArgKind::Reference,
    };
    let diag = invalid_log_argument(Span::new(0, 3), &err);
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(
        diag.message,
        "log argument tagged as value carries a reference payload"
    );
}
