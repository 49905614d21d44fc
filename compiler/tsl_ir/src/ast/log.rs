//! Arguments of runtime logging statements.
//!
//! A `LogArgument` is one of six closed kinds. Each owns at most one payload;
//! an argument without a payload is a parse-error recovery node and every
//! pass treats it as a no-op.

use std::fmt;

use crate::{EpochMemo, Macro, MatchExpr, Reference, Span, TemplateInstance, ValueExpr};

/// The six kinds of log argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogArgKind {
    TemplateInstance,
    Value,
    Match,
    Macro,
    Reference,
    String,
}

impl fmt::Display for LogArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogArgKind::TemplateInstance => "template instance",
            LogArgKind::Value => "value",
            LogArgKind::Match => "match expression",
            LogArgKind::Macro => "macro",
            LogArgKind::Reference => "reference",
            LogArgKind::String => "string",
        };
        f.write_str(name)
    }
}

/// The payload of a log argument. The variant determines the kind.
#[derive(Clone, PartialEq, Debug)]
pub enum LogPayload {
    TemplateInstance(Box<TemplateInstance>),
    Value(Box<ValueExpr>),
    Match(Box<MatchExpr>),
    Macro(Macro),
    Reference(Reference),
    String(String),
}

impl LogPayload {
    pub fn kind(&self) -> LogArgKind {
        match self {
            LogPayload::TemplateInstance(_) => LogArgKind::TemplateInstance,
            LogPayload::Value(_) => LogArgKind::Value,
            LogPayload::Match(_) => LogArgKind::Match,
            LogPayload::Macro(_) => LogArgKind::Macro,
            LogPayload::Reference(_) => LogArgKind::Reference,
            LogPayload::String(_) => LogArgKind::String,
        }
    }
}

/// Error constructing a log argument.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum LogArgError {
    #[error("log argument tagged as {expected} carries a {found} payload")]
    KindMismatch {
        expected: LogArgKind,
        found: LogArgKind,
    },
}

/// One argument of a log statement.
///
/// Not `Clone`: an argument belongs to exactly one statement.
#[derive(PartialEq, Debug)]
pub struct LogArgument {
    kind: LogArgKind,
    payload: Option<LogPayload>,
    span: Span,
}

impl LogArgument {
    /// Build an argument from a tag and an optional payload.
    ///
    /// A present payload must agree with `kind`.
    pub fn new(kind: LogArgKind, payload: Option<LogPayload>) -> Result<Self, LogArgError> {
        if let Some(found) = payload.as_ref().map(LogPayload::kind) {
            if found != kind {
                return Err(LogArgError::KindMismatch {
                    expected: kind,
                    found,
                });
            }
        }
        Ok(LogArgument {
            kind,
            payload,
            span: Span::DUMMY,
        })
    }

    /// Build an argument whose kind is taken from the payload.
    pub fn from_payload(payload: LogPayload) -> Self {
        LogArgument {
            kind: payload.kind(),
            payload: Some(payload),
            span: Span::DUMMY,
        }
    }

    /// An argument whose payload was lost to a parse error.
    pub fn recovered(kind: LogArgKind) -> Self {
        LogArgument {
            kind,
            payload: None,
            span: Span::DUMMY,
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::from_payload(LogPayload::String(text.into()))
    }

    pub fn value(value: ValueExpr) -> Self {
        Self::from_payload(LogPayload::Value(Box::new(value)))
    }

    pub fn template(template: TemplateInstance) -> Self {
        Self::from_payload(LogPayload::TemplateInstance(Box::new(template)))
    }

    pub fn matching(expr: MatchExpr) -> Self {
        Self::from_payload(LogPayload::Match(Box::new(expr)))
    }

    pub fn macro_call(mac: Macro) -> Self {
        Self::from_payload(LogPayload::Macro(mac))
    }

    pub fn reference(reference: Reference) -> Self {
        Self::from_payload(LogPayload::Reference(reference))
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn kind(&self) -> LogArgKind {
        self.kind
    }

    pub fn payload(&self) -> Option<&LogPayload> {
        self.payload.as_ref()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// `log(...)`: owns its ordered argument sequence.
#[derive(Debug)]
pub struct LogStatement {
    pub args: Vec<LogArgument>,
    pub span: Span,
    /// Last epoch the recursion check ran in.
    pub memo: EpochMemo,
}

impl LogStatement {
    pub fn new(args: Vec<LogArgument>, span: Span) -> Self {
        LogStatement {
            args,
            span,
            memo: EpochMemo::new(),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProfilerCommand {
    Start,
    Stop,
}

/// `@profiler.start` / `@profiler.stop`.
#[derive(Debug)]
pub struct ProfilerStatement {
    pub command: ProfilerCommand,
    pub span: Span,
    pub memo: EpochMemo,
}

impl ProfilerStatement {
    pub fn new(command: ProfilerCommand, span: Span) -> Self {
        ProfilerStatement {
            command,
            span,
            memo: EpochMemo::new(),
        }
    }
}
