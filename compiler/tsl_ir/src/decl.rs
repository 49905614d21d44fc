//! Module-level declarations and the table references resolve against.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Name, Span, ValueExpr};

/// Index into a [`DeclTable`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct DeclId(u32);

impl DeclId {
    /// Create a new `DeclId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        DeclId(index)
    }

    /// Get the index into the table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({})", self.0)
    }
}

/// What a declaration introduces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    Constant,
    ModuleParameter,
    Template,
    Variable,
    Function,
}

impl DeclKind {
    /// Whether the initializer is evaluated at elaboration time.
    ///
    /// Only these kinds take part in the constant-folding recursion walk.
    pub fn is_folded(self) -> bool {
        matches!(self, DeclKind::Constant | DeclKind::ModuleParameter)
    }
}

/// A named module-level declaration.
#[derive(Clone, PartialEq, Debug)]
pub struct Declaration {
    pub name: Name,
    pub kind: DeclKind,
    pub span: Span,
    pub initializer: Option<ValueExpr>,
}

impl Declaration {
    /// A declaration without an initializer.
    pub fn new(name: Name, kind: DeclKind, span: Span) -> Self {
        Declaration {
            name,
            kind,
            span,
            initializer: None,
        }
    }

    /// A constant with its initializer.
    pub fn constant(name: Name, span: Span, initializer: ValueExpr) -> Self {
        Declaration {
            name,
            kind: DeclKind::Constant,
            span,
            initializer: Some(initializer),
        }
    }

    /// Attach an initializer.
    #[must_use]
    pub fn with_initializer(mut self, initializer: ValueExpr) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

/// Declarations of one module, addressable by id and by name.
#[derive(Default, Debug)]
pub struct DeclTable {
    decls: Vec<Declaration>,
    by_name: FxHashMap<Name, DeclId>,
}

impl DeclTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration. A later declaration with the same name shadows
    /// the earlier one for name lookup.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` declarations.
    pub fn add(&mut self, decl: Declaration) -> DeclId {
        let index = u32::try_from(self.decls.len())
            .unwrap_or_else(|_| panic!("declaration table exceeded u32::MAX entries"));
        let id = DeclId::new(index);
        self.by_name.insert(decl.name, id);
        self.decls.push(decl);
        id
    }

    /// Get a declaration by id.
    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    /// Find the declaration bound to `name`.
    pub fn lookup(&self, name: Name) -> Option<DeclId> {
        self.by_name.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
