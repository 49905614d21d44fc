//! End-to-end tests: check a log statement, then generate its code.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tsl_codegen::{
    emit_log2str, emit_log_statement, init_tracing, CodegenConfig, CodegenContext, ExprBuffer,
};
use tsl_diagnostic::{invalid_log_argument, DiagnosticQueue, ErrorCode};
use tsl_ir::{
    CompilationEpoch, DeclTable, Declaration, LogArgKind, LogArgument, LogPayload, LogStatement,
    Reference, Span, StringInterner, ValueExpr,
};
use tsl_sema::{check_log_statement, RecursionChain};

fn reference(interner: &StringInterner, name: &str) -> Reference {
    Reference::new(interner.intern(name), Span::new(10, 11))
}

fn generate(interner: &StringInterner, stmt: &LogStatement) -> String {
    init_tracing();
    let mut cx = CodegenContext::new(interner, CodegenConfig::default());
    emit_log_statement(&mut cx, stmt);
    cx.take_output()
}

#[test]
fn empty_and_single_char_strings() {
    let interner = StringInterner::new();
    let stmt = LogStatement::new(
        vec![
            LogArgument::string(""),
            LogArgument::string("x"),
            LogArgument::value(ValueExpr::Ref(reference(&interner, "v"))),
        ],
        Span::DUMMY,
    );

    assert_eq!(
        generate(&interner, &stmt),
        "TTCN_Logger::begin_event(TTCN_Logger::USER_UNQUALIFIED);\n\
         TTCN_Logger::log_char('x');\n\
         v.log();\n\
         TTCN_Logger::end_event();\n"
    );
}

#[test]
fn check_then_emit_clean_statement() {
    let interner = StringInterner::new();
    let mut decls = DeclTable::new();
    decls.add(Declaration::constant(
        interner.intern("c_limit"),
        Span::DUMMY,
        ValueExpr::Integer(10),
    ));
    let mut stmt = LogStatement::new(
        vec![
            LogArgument::string("limit = "),
            LogArgument::reference(reference(&interner, "c_limit")),
        ],
        Span::DUMMY,
    );

    let mut chain = RecursionChain::new(&decls, &interner, CompilationEpoch::INITIAL);
    assert!(check_log_statement(&mut stmt, &mut chain));
    assert!(chain.diagnostics().is_empty());
    assert!(chain.is_empty());

    assert_eq!(
        generate(&interner, &stmt),
        "TTCN_Logger::begin_event(TTCN_Logger::USER_UNQUALIFIED);\n\
         TTCN_Logger::log_event_str(\"limit = \");\n\
         c_limit.log();\n\
         TTCN_Logger::end_event();\n"
    );
}

#[test]
fn cycle_is_reported_through_value_argument() {
    let interner = StringInterner::new();
    let mut decls = DeclTable::new();
    decls.add(Declaration::constant(
        interner.intern("c_a"),
        Span::DUMMY,
        ValueExpr::concat(
            ValueExpr::Charstring("a".into()),
            ValueExpr::Ref(reference(&interner, "c_b")),
        ),
    ));
    decls.add(Declaration::constant(
        interner.intern("c_b"),
        Span::DUMMY,
        ValueExpr::Ref(reference(&interner, "c_a")),
    ));
    let mut stmt = LogStatement::new(
        vec![LogArgument::value(ValueExpr::Ref(reference(&interner, "c_a")))],
        Span::DUMMY,
    );

    let mut chain = RecursionChain::new(&decls, &interner, CompilationEpoch::INITIAL);
    check_log_statement(&mut stmt, &mut chain);
    assert!(chain.is_empty());

    let mut queue = DiagnosticQueue::new();
    assert_eq!(chain.report_into(&mut queue), 1);
    let diags = queue.flush();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E2001);
    assert_eq!(diags[0].message, "circular reference: `c_a` depends on itself");
    assert_eq!(diags[0].notes, vec!["cycle: c_a -> c_b -> c_a".to_string()]);

    // Same epoch: the statement is not checked again.
    assert!(!check_log_statement(&mut stmt, &mut chain));
    assert!(chain.diagnostics().is_empty());
}

#[test]
fn recheck_in_next_epoch() {
    let interner = StringInterner::new();
    let decls = DeclTable::new();
    let mut stmt = LogStatement::new(vec![LogArgument::string("hi")], Span::DUMMY);

    let first = CompilationEpoch::INITIAL;
    let mut chain = RecursionChain::new(&decls, &interner, first);
    assert!(check_log_statement(&mut stmt, &mut chain));

    let mut chain = RecursionChain::new(&decls, &interner, first.next());
    assert!(check_log_statement(&mut stmt, &mut chain));
    assert_eq!(stmt.memo.last_checked(), Some(first.next()));
}

#[test]
fn mismatched_argument_becomes_diagnostic() {
    let interner = StringInterner::new();
    let payload = LogPayload::Reference(reference(&interner, "v"));
    let err = LogArgument::new(LogArgKind::String, Some(payload)).unwrap_err();

    let diag = invalid_log_argument(Span::new(3, 4), &err);
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "log argument tagged as string carries a reference payload");

    // The front end keeps a recovered node in its place; it emits nothing.
    let stmt = LogStatement::new(
        vec![LogArgument::recovered(LogArgKind::String), LogArgument::string("ok")],
        Span::DUMMY,
    );
    assert_eq!(
        generate(&interner, &stmt),
        "TTCN_Logger::begin_event(TTCN_Logger::USER_UNQUALIFIED);\n\
         TTCN_Logger::log_event_str(\"ok\");\n\
         TTCN_Logger::end_event();\n"
    );
}

#[test]
fn tracing_init_is_repeatable() {
    init_tracing();
    init_tracing();
    let interner = StringInterner::new();
    let stmt = LogStatement::new(vec![LogArgument::string("ok")], Span::DUMMY);
    assert!(generate(&interner, &stmt).contains("log_event_str(\"ok\")"));
}

#[test]
fn log2str_expression() {
    let interner = StringInterner::new();
    let mut cx = CodegenContext::new(&interner, CodegenConfig::default());
    let args = [
        LogArgument::string("n="),
        LogArgument::value(ValueExpr::Integer(5)),
    ];
    let mut buf = ExprBuffer::new();
    emit_log2str(&mut cx, &args, &mut buf);

    cx.writeln("{");
    cx.indent();
    cx.merge_expr(&buf);
    cx.dedent();
    cx.writeln("}");

    assert_eq!(
        cx.take_output(),
        "{\n    TTCN_Logger::begin_event_log2str();\n    \
         TTCN_Logger::log_event_str(\"n=\");\n    \
         TTCN_Logger::log_event_str(\"5\");\n    \
         TTCN_Logger::end_event_log2str();\n}\n"
    );
}

proptest! {
    #[test]
    fn string_argument_is_at_most_one_line(text in "\\PC{0,12}") {
        let interner = StringInterner::new();
        let stmt = LogStatement::new(vec![LogArgument::string(text.clone())], Span::DUMMY);
        let out = generate(&interner, &stmt);
        let expected = if text.is_empty() { 2 } else { 3 };
        prop_assert_eq!(out.lines().count(), expected);
    }
}
