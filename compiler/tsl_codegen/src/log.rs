//! Emission of log arguments and the statements that own them.

use tsl_ir::{LogArgument, LogPayload, LogStatement, MatchRestriction};

use crate::literal::emit_string_log;
use crate::{
    CodegenContext, EmitConstRef, EmitExpression, EmitLogMatch, EmitSelfLog, ExprBuffer,
    RenderMacro,
};

/// Code generation entry points of a log argument.
///
/// Both assume the argument already passed the recursion check. An
/// argument without a payload appends nothing.
pub trait EmitLogArgument {
    /// Append code that logs the argument. A template instance contributes
    /// only its evaluation code.
    fn emit(&self, cx: &mut CodegenContext<'_>, buf: &mut ExprBuffer);

    /// Like [`emit`](Self::emit), but a template instance is also logged.
    fn emit_and_log(&self, cx: &mut CodegenContext<'_>, buf: &mut ExprBuffer);
}

impl EmitLogArgument for LogArgument {
    fn emit(&self, cx: &mut CodegenContext<'_>, buf: &mut ExprBuffer) {
        emit_argument(self, cx, buf, false);
    }

    fn emit_and_log(&self, cx: &mut CodegenContext<'_>, buf: &mut ExprBuffer) {
        emit_argument(self, cx, buf, true);
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(kind = ?arg.kind(), log_template = log_template))]
fn emit_argument(
    arg: &LogArgument,
    cx: &mut CodegenContext<'_>,
    buf: &mut ExprBuffer,
    log_template: bool,
) {
    let Some(payload) = arg.payload() else {
        tracing::trace!("recovered argument without payload");
        return;
    };

    match payload {
        LogPayload::TemplateInstance(template) => {
            template.emit_expression(cx, buf, MatchRestriction::None);
            if log_template {
                append_log_call(buf);
            }
        }
        LogPayload::Value(value) => value.emit_self_log(cx, buf),
        LogPayload::Match(expr) => expr.emit_log_match(cx, buf),
        LogPayload::Macro(mac) => {
            if mac.is_single_expression_renderable() {
                let rendered = mac.render_expression(cx);
                buf.push_expr(&format!("{}::log_event_str({rendered})", cx.logger()));
            } else {
                mac.emit_expression(cx, buf, MatchRestriction::None);
                append_log_call(buf);
            }
        }
        LogPayload::Reference(reference) => {
            reference.emit_const_ref(cx, buf);
            append_log_call(buf);
        }
        LogPayload::String(text) => emit_string_log(cx.logger(), text, buf),
    }
}

fn append_log_call(buf: &mut ExprBuffer) {
    buf.push_expr(".log()");
}

/// Write a `log(...)` statement into the context output.
///
/// Arguments are emitted in order between `begin_event` and `end_event`,
/// one statement each; arguments that produce no code produce no line.
#[tracing::instrument(level = "debug", skip_all, fields(args = stmt.args.len()))]
pub fn emit_log_statement(cx: &mut CodegenContext<'_>, stmt: &LogStatement) {
    let header = cx.config().header.clone();
    cx.add_include(&header);

    let logger = cx.logger().to_string();
    cx.writeln(&format!("{logger}::begin_event({logger}::USER_UNQUALIFIED);"));
    for arg in &stmt.args {
        let mut buf = ExprBuffer::new();
        arg.emit_and_log(cx, &mut buf);
        cx.merge_expr(&buf);
    }
    cx.writeln(&format!("{logger}::end_event();"));
}

/// Append a `log2str(...)` expression to `buf`.
///
/// The arguments are logged in the preamble; the expression itself is the
/// call returning the collected text.
#[tracing::instrument(level = "debug", skip_all, fields(args = args.len()))]
pub fn emit_log2str(cx: &mut CodegenContext<'_>, args: &[LogArgument], buf: &mut ExprBuffer) {
    let header = cx.config().header.clone();
    cx.add_include(&header);

    let logger = cx.logger().to_string();
    buf.push_preamble(&format!("{logger}::begin_event_log2str();"));
    for arg in args {
        let mut arg_buf = ExprBuffer::new();
        arg.emit_and_log(cx, &mut arg_buf);
        buf.push_statement(arg_buf);
    }
    buf.push_expr(&format!("{logger}::end_event_log2str()"));
}
