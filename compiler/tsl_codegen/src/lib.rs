//! Target code generation for log statements.
//!
//! Emits C++ against the test runtime's logger. Each log argument renders
//! into an [`ExprBuffer`]; statements merge the buffers, in argument order,
//! into the [`CodegenContext`] output.
//!
//! Emission picks the cheapest primitive that is adequate:
//!
//! 1. **Empty strings** produce no code at all
//! 2. **One-byte strings** use `log_char` instead of `log_event_str`
//! 3. **Compile-time macros** log their expansion inline, no temporaries
//!
//! # Architecture
//!
//! ```text
//! LogStatement
//!      ↓
//!  emit_log_statement   (begin_event … end_event)
//!      ↓ per argument
//!  LogArgument::emit_and_log ──► payload capability / string translator
//!      ↓
//!  ExprBuffer ──merge_expr──► CodegenContext output
//! ```

mod buffer;
mod config;
mod context;
mod emit;
mod literal;
mod log;

pub use buffer::ExprBuffer;
pub use config::CodegenConfig;
pub use context::CodegenContext;
pub use emit::{EmitConstRef, EmitExpression, EmitLogMatch, EmitSelfLog, RenderMacro};
pub use literal::{emit_string_log, escape_char, escape_str};
pub use log::{emit_log2str, emit_log_statement, EmitLogArgument};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tsl_codegen=trace`; set `TSL_LOG_TREE` to get
/// indented span trees instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        // Another subscriber may already be installed by the host binary.
        let _ = if std::env::var_os("TSL_LOG_TREE").is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };
    });
}
