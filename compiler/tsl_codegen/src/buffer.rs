//! Expression sink for one argument or expression.

/// Target code for one expression: statements that must run before it and
/// the expression itself.
///
/// Emission only appends.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExprBuffer {
    preamble: String,
    expr: String,
}

impl ExprBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the expression text.
    pub fn push_expr(&mut self, code: &str) {
        self.expr.push_str(code);
    }

    /// Append one statement line to the preamble.
    pub fn push_preamble(&mut self, line: &str) {
        self.preamble.push_str(line);
        self.preamble.push('\n');
    }

    /// Append `other` as a complete statement to this buffer's preamble.
    ///
    /// An empty expression contributes no statement line.
    pub fn push_statement(&mut self, other: ExprBuffer) {
        self.preamble.push_str(&other.preamble);
        if !other.expr.is_empty() {
            self.preamble.push_str(&other.expr);
            self.preamble.push_str(";\n");
        }
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// True if nothing has been appended anywhere.
    pub fn is_empty(&self) -> bool {
        self.preamble.is_empty() && self.expr.is_empty()
    }

    /// Total appended bytes across both parts.
    pub fn len(&self) -> usize {
        self.preamble.len() + self.expr.len()
    }
}
