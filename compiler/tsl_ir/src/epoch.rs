//! Compilation epochs.
//!
//! Every re-check cycle of the semantic pass runs under a new, strictly
//! larger epoch. Nodes whose check is idempotent remember the last epoch they
//! were validated in and skip work until a newer epoch arrives.

use std::fmt;

/// Marker of one compilation re-check cycle. Totally ordered.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CompilationEpoch(u32);

impl CompilationEpoch {
    /// The epoch of the first full check.
    pub const INITIAL: CompilationEpoch = CompilationEpoch(0);

    /// The epoch following this one.
    #[inline]
    #[must_use]
    pub const fn next(self) -> CompilationEpoch {
        CompilationEpoch(self.0.saturating_add(1))
    }
}

impl fmt::Debug for CompilationEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "epoch#{}", self.0)
    }
}

/// Last-validated epoch of a node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct EpochMemo {
    last_checked: Option<CompilationEpoch>,
}

impl EpochMemo {
    /// Create a memo that has never been checked.
    pub const fn new() -> Self {
        EpochMemo { last_checked: None }
    }

    /// Decide whether a check must run in `current`, recording it if so.
    ///
    /// Returns `false` when the node was already validated at or after
    /// `current`.
    pub fn should_check(&mut self, current: CompilationEpoch) -> bool {
        match self.last_checked {
            Some(last) if last >= current => false,
            _ => {
                self.last_checked = Some(current);
                true
            }
        }
    }

    /// The epoch of the most recent check, if any.
    pub fn last_checked(&self) -> Option<CompilationEpoch> {
        self.last_checked
    }
}
