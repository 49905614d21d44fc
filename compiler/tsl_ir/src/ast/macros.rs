use crate::{Name, Span};

/// Which value a macro expands to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MacroKind {
    /// Name of the enclosing module.
    ModuleId,
    /// Name of the enclosing definition.
    DefinitionId,
    /// Source file path.
    FileName,
    /// Source file name without directories.
    BaseFileName,
    LineNumber,
    /// Innermost named scope: the definition if any, else the module.
    Scope,
    /// Name of the running testcase. Only known at run time.
    TestcaseId,
}

impl MacroKind {
    /// Whether the expansion is fixed at elaboration time.
    pub fn is_compile_time_known(self) -> bool {
        !matches!(self, MacroKind::TestcaseId)
    }
}

/// Where a macro occurs, recorded during elaboration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MacroSite {
    pub module: Name,
    pub definition: Option<Name>,
    pub file: Name,
    pub line: u32,
}

/// A compile-time placeholder such as `%moduleId`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Macro {
    pub kind: MacroKind,
    pub site: MacroSite,
    pub span: Span,
}

impl Macro {
    pub fn new(kind: MacroKind, site: MacroSite, span: Span) -> Self {
        Macro { kind, site, span }
    }
}
