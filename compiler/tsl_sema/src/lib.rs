//! Circular-definition checks.
//!
//! A [`RecursionChain`] records the declarations the current traversal is
//! evaluating. Payload nodes implement [`CheckRecursion`] to walk their
//! dependencies, bracketing every push with a savepoint so sibling checks
//! never see each other's entries. Re-adding a declaration already on the
//! chain is reported as an `E2001` diagnostic collected on the chain.
//!
//! # Architecture
//!
//! ```text
//! LogStatement ──check_log_statement──► LogArgument::check_recursion
//!                                            │
//!            ┌───────────────┬───────────────┼──────────────┐
//!            ▼               ▼               ▼              ▼
//!     TemplateInstance   ValueExpr      MatchExpr      Reference
//!            │               │                              │
//!            └──► fold_reference (guard + initializer) ◄────┘ (one step only)
//! ```

mod chain;
mod check;
mod stack;
mod statement;

pub use chain::{ChainGuard, ChainMark, RecursionChain};
pub use check::{CheckRecursion, Resolve};
pub use stack::ensure_sufficient_stack;
pub use statement::{check_log_statement, check_profiler_statement};
