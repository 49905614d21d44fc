//! AST payload nodes referenced by log statements.
//!
//! # Module Structure
//!
//! - `value`: value expressions and name references
//! - `template`: template instances, match restrictions, match expressions
//! - `macros`: compile-time macros and the site they expand at
//! - `log`: the six-kind `LogArgument` and the statements that own it

mod log;
mod macros;
mod template;
mod value;

pub use log::{
    LogArgError, LogArgKind, LogArgument, LogPayload, LogStatement, ProfilerCommand,
    ProfilerStatement,
};
pub use macros::{Macro, MacroKind, MacroSite};
pub use template::{MatchExpr, MatchRestriction, TemplateBody, TemplateInstance};
pub use value::{Reference, ValueExpr};
