//! Code generation context and state.
//!
//! The `CodegenContext` holds everything shared across the statements of
//! one generated unit: name resolution, configuration, the output buffer,
//! temporaries and required headers.

use std::fmt::Write;

use rustc_hash::FxHashSet;
use tsl_ir::{Name, StringInterner};

use crate::{CodegenConfig, ExprBuffer};

/// C++ keywords that are also valid TSL identifiers.
const RESERVED: &[&str] = &[
    "auto", "bool", "case", "char", "class", "default", "delete", "double", "explicit", "extern",
    "float", "friend", "goto", "inline", "int", "long", "namespace", "new", "operator", "private",
    "protected", "public", "register", "short", "signed", "sizeof", "static", "struct", "switch",
    "this", "throw", "typedef", "typename", "union", "unsigned", "using", "virtual", "void",
    "volatile", "while",
];

/// Code generation context.
pub struct CodegenContext<'a> {
    /// String interner for resolving names.
    pub interner: &'a StringInterner,
    config: CodegenConfig,
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
    /// Headers the generated code depends on.
    includes: FxHashSet<String>,
    /// Counter for generating unique temporary names.
    temp_counter: u32,
}

impl<'a> CodegenContext<'a> {
    /// Create a new codegen context.
    pub fn new(interner: &'a StringInterner, config: CodegenConfig) -> Self {
        Self {
            interner,
            config,
            indent: 0,
            output: String::with_capacity(1024),
            includes: FxHashSet::default(),
            temp_counter: 0,
        }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Class name of the logging primitives.
    pub fn logger(&self) -> &str {
        &self.config.logger
    }

    /// Resolve a name to its string representation.
    #[inline]
    pub fn resolve_name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// Mangle a TSL name into a C++ identifier.
    ///
    /// A name that is already a C++ identifier starting with a letter, and is
    /// not a keyword, is kept as is. Any other name gets a leading `_`, with
    /// `_` and characters outside `[A-Za-z0-9]` written as `_xHH` (or
    /// `_uHHHHHH` above U+00FF). Distinct names never mangle to the same
    /// identifier, and no mangled name collides with [`fresh_temp`](Self::fresh_temp).
    pub fn mangle(&self, name: Name) -> String {
        let s = self.interner.lookup(name);
        let plain = s.starts_with(|c: char| c.is_ascii_alphabetic())
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !RESERVED.contains(&s);
        if plain {
            return s.to_string();
        }

        let mut result = String::with_capacity(s.len() + 8);
        result.push('_');
        for c in s.chars() {
            if c.is_ascii_alphanumeric() {
                result.push(c);
            } else if u32::from(c) <= 0xff {
                let _ = write!(result, "_x{:02x}", u32::from(c));
            } else {
                let _ = write!(result, "_u{:06x}", u32::from(c));
            }
        }
        result
    }

    /// Generate a unique temporary variable name.
    pub fn fresh_temp(&mut self) -> String {
        let n = self.temp_counter;
        self.temp_counter += 1;
        format!("_tmp{n}")
    }

    /// Record that the output needs `header`. Returns false if already recorded.
    pub fn add_include(&mut self, header: &str) -> bool {
        if self.includes.contains(header) {
            return false;
        }
        self.includes.insert(header.to_string())
    }

    /// Required headers, sorted.
    pub fn includes(&self) -> Vec<&str> {
        let mut headers: Vec<&str> = self.includes.iter().map(String::as_str).collect();
        headers.sort_unstable();
        headers
    }

    /// `#include` lines for every required header.
    pub fn include_directives(&self) -> String {
        self.includes()
            .into_iter()
            .map(|h| format!("#include <{h}>\n"))
            .collect()
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write indentation to output.
    pub fn write_indent(&mut self) {
        let width = self.indent * self.config.indent_width;
        self.output.extend(std::iter::repeat(' ').take(width));
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write `buf` as statements: the preamble, then the expression if any.
    pub fn merge_expr(&mut self, buf: &ExprBuffer) {
        for line in buf.preamble().lines() {
            self.writeln(line);
        }
        if !buf.expr().is_empty() {
            self.write_indent();
            self.output.push_str(buf.expr());
            self.output.push_str(";\n");
        }
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

#[cfg(test)]
mod tests;
