use pretty_assertions::assert_eq;
use tsl_ir::Span;

use super::*;

fn error_at(start: u32, message: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(message)
        .with_label(Span::new(start, start + 1), "here")
}

#[test]
fn test_flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error_at(20, "second"));
    queue.add(error_at(5, "first"));

    let flushed = queue.flush();
    let messages: Vec<_> = flushed.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn test_deduplicates_identical_reports() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(error_at(3, "cycle")));
    assert!(!queue.add(error_at(3, "cycle")));
    assert!(queue.add(error_at(4, "cycle")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_unlimited_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.add(error_at(3, "cycle")));
    assert!(queue.add(error_at(3, "cycle")));
    assert_eq!(queue.error_count(), 2);
    assert!(!queue.limit_reached());
}

#[test]
fn test_error_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    });
    let kept = queue.extend((0..5).map(|i| error_at(i, "e")));
    assert_eq!(kept, 2);
    assert!(queue.limit_reached());
    assert!(queue.has_errors());
}
