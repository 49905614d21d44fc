//! The recursion chain shared by one traversal.

use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tsl_diagnostic::{circular_reference, Diagnostic, DiagnosticQueue};
use tsl_ir::{CompilationEpoch, DeclId, DeclTable, Span, StringInterner};

/// Savepoint returned by [`RecursionChain::mark`]: the chain length at the
/// time of the mark.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ChainMark(usize);

/// Ordered stack of the declarations the current traversal is evaluating.
///
/// Invariant: after any `mark` / `restore` bracket the visited sequence is
/// exactly what it was before the bracket. Cycle diagnostics are not part of
/// the sequence and outlive `restore`.
pub struct RecursionChain<'d> {
    decls: &'d DeclTable,
    interner: &'d StringInterner,
    epoch: CompilationEpoch,
    visited: SmallVec<[DeclId; 8]>,
    /// Declarations whose cycle was already reported on this chain.
    reported: FxHashSet<DeclId>,
    errors: Vec<Diagnostic>,
}

impl<'d> RecursionChain<'d> {
    /// An empty chain for one traversal in `epoch`.
    pub fn new(
        decls: &'d DeclTable,
        interner: &'d StringInterner,
        epoch: CompilationEpoch,
    ) -> Self {
        RecursionChain {
            decls,
            interner,
            epoch,
            visited: SmallVec::new(),
            reported: FxHashSet::default(),
            errors: Vec::new(),
        }
    }

    /// The table references on this chain resolve against.
    pub fn decls(&self) -> &'d DeclTable {
        self.decls
    }

    pub fn epoch(&self) -> CompilationEpoch {
        self.epoch
    }

    /// Current savepoint.
    pub fn mark(&self) -> ChainMark {
        ChainMark(self.visited.len())
    }

    /// Truncate the chain back to `mark`.
    pub fn restore(&mut self, mark: ChainMark) {
        debug_assert!(
            mark.0 <= self.visited.len(),
            "restoring to a savepoint beyond the chain"
        );
        self.visited.truncate(mark.0);
    }

    /// Push `decl`, reached through a reference at `at`.
    ///
    /// Returns `false` without pushing when `decl` is already on the chain;
    /// the cycle is recorded as a diagnostic the first time it is seen.
    pub fn add(&mut self, decl: DeclId, at: Span) -> bool {
        let Some(start) = self.visited.iter().position(|&d| d == decl) else {
            self.visited.push(decl);
            return true;
        };

        if self.reported.insert(decl) {
            let path: Vec<&str> = self.visited[start..]
                .iter()
                .chain(std::iter::once(&decl))
                .map(|&id| self.name_of(id))
                .collect();
            tracing::debug!(cycle = %path.join(" -> "), "circular reference detected");
            let declared_at = self.decls.get(decl).map_or(Span::DUMMY, |d| d.span);
            self.errors.push(circular_reference(at, declared_at, &path));
        }
        false
    }

    /// Open a bracket that restores the chain when dropped.
    pub fn enter(&mut self) -> ChainGuard<'_, 'd> {
        let mark = self.mark();
        ChainGuard { chain: self, mark }
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn contains(&self, decl: DeclId) -> bool {
        self.visited.contains(&decl)
    }

    /// The visited declarations, outermost first.
    pub fn visited(&self) -> &[DeclId] {
        &self.visited
    }

    /// Cycle diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Move the recorded cycle diagnostics into `queue`.
    pub fn report_into(&mut self, queue: &mut DiagnosticQueue) -> usize {
        queue.extend(self.errors.drain(..))
    }

    fn name_of(&self, id: DeclId) -> &'d str {
        self.decls
            .get(id)
            .map_or("<unknown>", |decl| self.interner.lookup(decl.name))
    }
}

/// Scoped bracket over a [`RecursionChain`].
///
/// Dereferences to the chain; on drop the chain is truncated back to the
/// length it had when the guard was created, whichever way the scope exits.
pub struct ChainGuard<'c, 'd> {
    chain: &'c mut RecursionChain<'d>,
    mark: ChainMark,
}

impl<'d> Deref for ChainGuard<'_, 'd> {
    type Target = RecursionChain<'d>;

    fn deref(&self) -> &Self::Target {
        &*self.chain
    }
}

impl DerefMut for ChainGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.chain
    }
}

impl Drop for ChainGuard<'_, '_> {
    fn drop(&mut self) {
        self.chain.restore(self.mark);
    }
}
