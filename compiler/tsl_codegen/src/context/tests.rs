use pretty_assertions::assert_eq;

use super::*;

fn context(interner: &StringInterner) -> CodegenContext<'_> {
    CodegenContext::new(interner, CodegenConfig::default())
}

#[test]
fn test_mangle_simple() {
    let interner = StringInterner::new();
    let name = interner.intern("c_limit");
    assert_eq!(context(&interner).mangle(name), "c_limit");
}

#[test]
fn test_mangle_special_chars() {
    let interner = StringInterner::new();
    let ctx = context(&interner);
    assert_eq!(ctx.mangle(interner.intern("my-const")), "_my_x2dconst");
    assert_eq!(ctx.mangle(interner.intern("9lives")), "_9lives");
    assert_eq!(ctx.mangle(interner.intern("_hidden")), "__x5fhidden");
    assert_eq!(ctx.mangle(interner.intern("naïve")), "_na_xefve");
    assert_eq!(ctx.mangle(interner.intern("π")), "_u0003c0");
    assert_eq!(ctx.mangle(Name::EMPTY), "_");
}

#[test]
fn test_mangle_reserved_word() {
    let interner = StringInterner::new();
    let ctx = context(&interner);
    assert_eq!(ctx.mangle(interner.intern("class")), "_class");
    assert_eq!(ctx.mangle(interner.intern("classic")), "classic");
    assert_eq!(ctx.mangle(interner.intern("class_")), "class_");
}

#[test]
fn test_mangle_keeps_names_apart() {
    let interner = StringInterner::new();
    let ctx = context(&interner);
    let names = ["a-b", "a_b", "a.b", "_a_b", "ab", "auto", "auto_", "_tmp0", "tmp0"];
    let mut mangled: Vec<String> = names.iter().map(|n| ctx.mangle(interner.intern(n))).collect();
    mangled.push("_tmp0".to_string());
    mangled.sort();
    mangled.dedup();
    assert_eq!(mangled.len(), names.len() + 1);
}

#[test]
fn test_fresh_temp() {
    let interner = StringInterner::new();
    let mut ctx = context(&interner);
    assert_eq!(ctx.fresh_temp(), "_tmp0");
    assert_eq!(ctx.fresh_temp(), "_tmp1");
    assert_eq!(ctx.fresh_temp(), "_tmp2");
}

#[test]
fn test_includes_are_deduplicated_and_sorted() {
    let interner = StringInterner::new();
    let mut ctx = context(&interner);
    assert!(ctx.add_include("b.hh"));
    assert!(ctx.add_include("a.hh"));
    assert!(!ctx.add_include("b.hh"));

    assert_eq!(ctx.includes(), vec!["a.hh", "b.hh"]);
    assert_eq!(ctx.include_directives(), "#include <a.hh>\n#include <b.hh>\n");
}

#[test]
fn test_indent_dedent() {
    let interner = StringInterner::new();
    let mut ctx = CodegenContext::new(&interner, CodegenConfig::default().with_indent_width(2));

    ctx.writeln("line1");
    ctx.indent();
    ctx.writeln("line2");
    ctx.indent();
    ctx.writeln("line3");
    ctx.dedent();
    ctx.writeln("line4");
    ctx.dedent();
    ctx.writeln("line5");

    let output = ctx.take_output();
    assert_eq!(output, "line1\n  line2\n    line3\n  line4\nline5\n");
}

#[test]
fn test_merge_expr_skips_empty_expression() {
    let interner = StringInterner::new();
    let mut ctx = context(&interner);
    ctx.indent();

    let mut buf = ExprBuffer::new();
    buf.push_preamble("const auto _tmp0 = x;");
    buf.push_expr("t.log_match(_tmp0)");
    ctx.merge_expr(&buf);
    ctx.merge_expr(&ExprBuffer::new());

    assert_eq!(
        ctx.take_output(),
        "    const auto _tmp0 = x;\n    t.log_match(_tmp0);\n"
    );
}
