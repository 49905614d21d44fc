use crate::{Reference, Span, ValueExpr};

/// Restriction a context imposes on what a template may match.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum MatchRestriction {
    /// Any matching mechanism is accepted. Used by logging.
    #[default]
    None,
    /// Only specific values or `omit`.
    Omit,
    /// Only specific values.
    Value,
    /// Anything except `omit`.
    Present,
}

/// Matching mechanism of a template.
#[derive(Clone, PartialEq, Debug)]
pub enum TemplateBody {
    Specific(ValueExpr),
    /// `?`
    AnyValue,
    /// `*`
    AnyOrOmit,
    Omit,
    ValueList(Vec<TemplateBody>),
    Complement(Vec<TemplateBody>),
}

/// A template used as a value or as a pattern depending on context.
#[derive(Clone, PartialEq, Debug)]
pub struct TemplateInstance {
    pub body: TemplateBody,
    /// Base template of a modified template.
    pub derived_from: Option<Reference>,
    pub span: Span,
}

impl TemplateInstance {
    pub fn new(body: TemplateBody, span: Span) -> Self {
        TemplateInstance {
            body,
            derived_from: None,
            span,
        }
    }

    #[must_use]
    pub fn derived_from(mut self, base: Reference) -> Self {
        self.derived_from = Some(base);
        self
    }
}

/// Outcome of matching `value` against `template`.
#[derive(Clone, PartialEq, Debug)]
pub struct MatchExpr {
    pub value: ValueExpr,
    pub template: TemplateInstance,
    pub span: Span,
}

impl MatchExpr {
    pub fn new(value: ValueExpr, template: TemplateInstance, span: Span) -> Self {
        MatchExpr {
            value,
            template,
            span,
        }
    }
}
