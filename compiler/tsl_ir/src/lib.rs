//! TSL IR - Intermediate Representation Types
//!
//! Core data structures shared by the semantic and code generation passes
//! of the TSL compiler frontend:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Declarations and the table references resolve against
//! - Compilation epochs for memoized re-checks
//! - AST payload nodes and the `LogArgument` data model
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: Strings → `Name(u32)`, declarations → `DeclId(u32)`
//! - **Closed variants**: every argument kind is an enum variant, matched exhaustively
//! - **Behaviour lives elsewhere**: recursion checks are in `tsl_sema`,
//!   emission is in `tsl_codegen`; this crate only holds data
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.

pub mod ast;
mod decl;
mod epoch;
mod interner;
mod name;
mod span;

pub use ast::{
    LogArgError, LogArgKind, LogArgument, LogPayload, LogStatement, Macro, MacroKind, MacroSite,
    MatchExpr, MatchRestriction, ProfilerCommand, ProfilerStatement, Reference, TemplateBody,
    TemplateInstance, ValueExpr,
};
pub use decl::{DeclId, DeclKind, Declaration, DeclTable};
pub use epoch::{CompilationEpoch, EpochMemo};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::Span;
