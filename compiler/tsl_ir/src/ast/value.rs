use crate::{Name, Span};

/// A name binding, resolved lazily to a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Reference {
    pub name: Name,
    pub span: Span,
}

impl Reference {
    pub fn new(name: Name, span: Span) -> Self {
        Reference { name, span }
    }
}

/// Generic value expression.
#[derive(Clone, PartialEq, Debug)]
pub enum ValueExpr {
    Integer(i64),
    /// Stored as bits for Hash/Eq compatibility.
    Float(u64),
    Boolean(bool),
    Charstring(String),
    Omit,
    Ref(Reference),
    Concat(Box<ValueExpr>, Box<ValueExpr>),
}

impl ValueExpr {
    pub fn float(value: f64) -> Self {
        ValueExpr::Float(value.to_bits())
    }

    pub fn concat(lhs: ValueExpr, rhs: ValueExpr) -> Self {
        ValueExpr::Concat(Box::new(lhs), Box::new(rhs))
    }

    /// Literal values are fully known at compile time.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            ValueExpr::Integer(_)
                | ValueExpr::Float(_)
                | ValueExpr::Boolean(_)
                | ValueExpr::Charstring(_)
                | ValueExpr::Omit
        )
    }
}
