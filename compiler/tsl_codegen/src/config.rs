//! Code generation settings.

/// Names and layout used in emitted code.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CodegenConfig {
    /// Class holding the static logging primitives.
    pub logger: String,
    /// Class providing run-time-only macro values.
    pub runtime: String,
    /// Header declaring both classes.
    pub header: String,
    /// Spaces per indentation level.
    pub indent_width: usize,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            logger: "TTCN_Logger".to_string(),
            runtime: "TTCN_Runtime".to_string(),
            header: "TTCN3.hh".to_string(),
            indent_width: 4,
        }
    }
}

impl CodegenConfig {
    #[must_use]
    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = logger.into();
        self
    }

    #[must_use]
    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}
