//! Error codes for frontend diagnostics.

use std::fmt;

/// Error codes for frontend diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Elaboration errors
/// - E2xxx: Semantic errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Log argument tag disagrees with its payload
    E1001,
    /// Circular reference between definitions
    E2001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
