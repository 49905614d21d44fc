//! Payload capabilities used by log argument emission.
//!
//! Each payload kind implements only the capabilities its logging rule
//! needs:
//!
//! | payload            | capabilities                         |
//! |--------------------|--------------------------------------|
//! | `TemplateInstance` | `EmitExpression`                     |
//! | `ValueExpr`        | `EmitSelfLog`                        |
//! | `MatchExpr`        | `EmitLogMatch`                       |
//! | `Macro`            | `RenderMacro`, `EmitExpression`      |
//! | `Reference`        | `EmitConstRef`                       |

use tsl_ir::{
    Macro, MacroKind, MatchExpr, MatchRestriction, Reference, TemplateBody, TemplateInstance,
    ValueExpr,
};

use crate::literal::escape_str;
use crate::{CodegenContext, ExprBuffer};

/// Append general evaluation code for a node.
pub trait EmitExpression {
    fn emit_expression(
        &self,
        cx: &mut CodegenContext<'_>,
        buf: &mut ExprBuffer,
        restriction: MatchRestriction,
    );
}

/// Append code that logs the node's own value.
pub trait EmitSelfLog {
    fn emit_self_log(&self, cx: &mut CodegenContext<'_>, buf: &mut ExprBuffer);
}

/// Append code that logs the outcome of a match, field by field.
pub trait EmitLogMatch {
    fn emit_log_match(&self, cx: &mut CodegenContext<'_>, buf: &mut ExprBuffer);
}

/// Compile-time rendering of a macro.
pub trait RenderMacro {
    /// Whether the expansion can be written as one literal expression.
    fn is_single_expression_renderable(&self) -> bool;

    /// The expansion as a C++ string literal, quotes included.
    ///
    /// Only meaningful when `is_single_expression_renderable` holds.
    fn render_expression(&self, cx: &CodegenContext<'_>) -> String;
}

/// Append an expression naming an existing value without copying it.
pub trait EmitConstRef {
    fn emit_const_ref(&self, cx: &mut CodegenContext<'_>, buf: &mut ExprBuffer);
}

/// C++ expression for a value.
pub(crate) fn value_code(cx: &CodegenContext<'_>, value: &ValueExpr) -> String {
    match value {
        // The magnitude of i64::MIN has no C++ literal of its own.
        ValueExpr::Integer(i64::MIN) => "INTEGER(-9223372036854775807LL - 1)".to_string(),
        ValueExpr::Integer(n) => format!("INTEGER({n})"),
        ValueExpr::Float(bits) => {
            let f = f64::from_bits(*bits);
            if f.is_nan() {
                "FLOAT(NAN)".to_string()
            } else if f.is_infinite() {
                let sign = if f.is_sign_positive() { "" } else { "-" };
                format!("FLOAT({sign}INFINITY)")
            } else {
                // Debug format keeps full precision and always has a `.`
                format!("FLOAT({f:?})")
            }
        }
        ValueExpr::Boolean(b) => if *b { "BOOLEAN(TRUE)" } else { "BOOLEAN(FALSE)" }.to_string(),
        ValueExpr::Charstring(s) => {
            if s.contains('\0') {
                // Embedded NUL would end a plain C string early.
                format!("CHARSTRING({}, \"{}\")", s.len(), escape_str(s))
            } else {
                format!("CHARSTRING(\"{}\")", escape_str(s))
            }
        }
        ValueExpr::Omit => "OMIT_VALUE".to_string(),
        ValueExpr::Ref(reference) => cx.mangle(reference.name),
        ValueExpr::Concat(lhs, rhs) => {
            format!("({} + {})", value_code(cx, lhs), value_code(cx, rhs))
        }
    }
}

/// Text the runtime would log for a literal, if the value is one.
fn literal_log_text(value: &ValueExpr) -> Option<String> {
    match value {
        ValueExpr::Integer(n) => Some(n.to_string()),
        ValueExpr::Boolean(b) => Some(b.to_string()),
        ValueExpr::Omit => Some("omit".to_string()),
        // Float formatting and charstring quoting belong to the runtime.
        ValueExpr::Float(_)
        | ValueExpr::Charstring(_)
        | ValueExpr::Ref(_)
        | ValueExpr::Concat(..) => None,
    }
}

impl EmitSelfLog for ValueExpr {
    fn emit_self_log(&self, cx: &mut CodegenContext<'_>, buf: &mut ExprBuffer) {
        if let Some(text) = literal_log_text(self) {
            buf.push_expr(&format!("{}::log_event_str(\"{}\")", cx.logger(), escape_str(&text)));
            return;
        }
        buf.push_expr(&value_code(cx, self));
        buf.push_expr(".log()");
    }
}

fn template_body_code(cx: &CodegenContext<'_>, body: &TemplateBody) -> String {
    let list = |items: &[TemplateBody]| {
        items
            .iter()
            .map(|item| template_body_code(cx, item))
            .collect::<Vec<_>>()
            .join(", ")
    };
    match body {
        TemplateBody::Specific(value) => format!("Template({})", value_code(cx, value)),
        TemplateBody::AnyValue => "Template(ANY_VALUE)".to_string(),
        TemplateBody::AnyOrOmit => "Template(ANY_OR_OMIT)".to_string(),
        TemplateBody::Omit => "Template(OMIT_VALUE)".to_string(),
        TemplateBody::ValueList(items) => format!("Template::value_list({{{}}})", list(items)),
        TemplateBody::Complement(items) => {
            format!("Template::complemented_list({{{}}})", list(items))
        }
    }
}

fn restriction_code(restriction: MatchRestriction) -> Option<&'static str> {
    match restriction {
        MatchRestriction::None => None,
        MatchRestriction::Omit => Some("TR_OMIT"),
        MatchRestriction::Value => Some("TR_VALUE"),
        MatchRestriction::Present => Some("TR_PRESENT"),
    }
}

impl EmitExpression for TemplateInstance {
    fn emit_expression(
        &self,
        cx: &mut CodegenContext<'_>,
        buf: &mut ExprBuffer,
        restriction: MatchRestriction,
    ) {
        let body = template_body_code(cx, &self.body);
        let code = match &self.derived_from {
            Some(base) => format!("Template::modify({}, {body})", cx.mangle(base.name)),
            None => body,
        };
        buf.push_expr(&code);
        if let Some(tr) = restriction_code(restriction) {
            buf.push_expr(&format!(".check_restriction({tr})"));
        }
    }
}

impl EmitLogMatch for MatchExpr {
    fn emit_log_match(&self, cx: &mut CodegenContext<'_>, buf: &mut ExprBuffer) {
        let value = value_code(cx, &self.value);
        // Bind computed values once so the template sees a stable object.
        let matched = if self.value.is_literal() || matches!(self.value, ValueExpr::Ref(_)) {
            value
        } else {
            let temp = cx.fresh_temp();
            buf.push_preamble(&format!("const auto {temp} = {value};"));
            temp
        };
        self.template.emit_expression(cx, buf, MatchRestriction::None);
        buf.push_expr(&format!(".log_match({matched})"));
    }
}

/// Compile-time expansion of a macro; `None` for run-time-only macros.
fn macro_expansion(mac: &Macro, cx: &CodegenContext<'_>) -> Option<String> {
    let site = &mac.site;
    let text = match mac.kind {
        MacroKind::ModuleId => cx.resolve_name(site.module).to_string(),
        MacroKind::DefinitionId => site
            .definition
            .map(|d| cx.resolve_name(d))
            .unwrap_or_default()
            .to_string(),
        MacroKind::FileName => cx.resolve_name(site.file).to_string(),
        MacroKind::BaseFileName => {
            let path = cx.resolve_name(site.file);
            path.rsplit(['/', '\\']).next().unwrap_or(path).to_string()
        }
        MacroKind::LineNumber => site.line.to_string(),
        MacroKind::Scope => cx
            .resolve_name(site.definition.unwrap_or(site.module))
            .to_string(),
        MacroKind::TestcaseId => return None,
    };
    Some(text)
}

impl RenderMacro for Macro {
    fn is_single_expression_renderable(&self) -> bool {
        self.kind.is_compile_time_known()
    }

    fn render_expression(&self, cx: &CodegenContext<'_>) -> String {
        format!("\"{}\"", escape_str(&macro_expansion(self, cx).unwrap_or_default()))
    }
}

impl EmitExpression for Macro {
    /// Every macro evaluates to a charstring; restrictions never apply.
    fn emit_expression(
        &self,
        cx: &mut CodegenContext<'_>,
        buf: &mut ExprBuffer,
        _restriction: MatchRestriction,
    ) {
        match macro_expansion(self, cx) {
            Some(text) => buf.push_expr(&format!("CHARSTRING(\"{}\")", escape_str(&text))),
            None => buf.push_expr(&format!("{}::get_testcase_id_macro()", cx.config().runtime)),
        }
    }
}

impl EmitConstRef for Reference {
    fn emit_const_ref(&self, cx: &mut CodegenContext<'_>, buf: &mut ExprBuffer) {
        buf.push_expr(&cx.mangle(self.name));
    }
}
