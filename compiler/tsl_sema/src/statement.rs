//! Statement-level checks with epoch memoization.

use tsl_ir::{CompilationEpoch, LogStatement, ProfilerStatement};

use crate::{CheckRecursion, RecursionChain};

/// Check every argument of `stmt` against one shared chain, in order.
///
/// Runs at most once per epoch; returns whether the arguments were checked.
#[tracing::instrument(level = "debug", skip_all, fields(args = stmt.args.len()))]
pub fn check_log_statement(stmt: &mut LogStatement, chain: &mut RecursionChain<'_>) -> bool {
    if !stmt.memo.should_check(chain.epoch()) {
        tracing::trace!("log statement already checked in this epoch");
        return false;
    }
    for arg in &stmt.args {
        arg.check_recursion(chain);
    }
    true
}

/// Semantic hook of a profiler control statement.
///
/// There is nothing to validate; the hook only records the epoch so it runs
/// at most once per epoch. Returns whether it ran.
pub fn check_profiler_statement(stmt: &mut ProfilerStatement, epoch: CompilationEpoch) -> bool {
    let ran = stmt.memo.should_check(epoch);
    if ran {
        tracing::trace!(command = ?stmt.command, ?epoch, "profiler statement checked");
    }
    ran
}
