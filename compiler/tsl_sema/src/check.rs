//! Circular-definition checks for log arguments and their payloads.

use tsl_ir::{
    CompilationEpoch, DeclId, DeclTable, LogArgument, LogPayload, Macro, MatchExpr, Reference,
    TemplateBody, TemplateInstance, ValueExpr,
};

use crate::{ensure_sufficient_stack, RecursionChain};

/// Detect whether evaluating a node could re-enter a declaration already on
/// the chain.
///
/// Implementations must leave the chain exactly as they found it.
pub trait CheckRecursion {
    fn check_recursion(&self, chain: &mut RecursionChain<'_>);
}

/// Lazy binding of a name to its declaration.
pub trait Resolve {
    /// The bound declaration, or `None` if the name does not resolve.
    ///
    /// Never reports: resolution failures are diagnosed by the resolver.
    fn resolve(&self, decls: &DeclTable, epoch: CompilationEpoch) -> Option<DeclId>;
}

impl Resolve for Reference {
    fn resolve(&self, decls: &DeclTable, epoch: CompilationEpoch) -> Option<DeclId> {
        let found = decls.lookup(self.name);
        if found.is_none() {
            tracing::trace!(?epoch, name = ?self.name, "reference does not resolve");
        }
        found
    }
}

impl CheckRecursion for LogArgument {
    #[tracing::instrument(level = "trace", skip_all, fields(kind = ?self.kind()))]
    fn check_recursion(&self, chain: &mut RecursionChain<'_>) {
        let Some(payload) = self.payload() else {
            tracing::trace!("recovered argument without payload");
            return;
        };

        match payload {
            LogPayload::TemplateInstance(template) => template.check_recursion(chain),
            LogPayload::Value(value) => value.check_recursion(chain),
            LogPayload::Match(expr) => expr.check_recursion(chain),
            LogPayload::Macro(mac) => mac.check_recursion(chain),
            LogPayload::Reference(reference) => {
                // Record the one-step edge for the cycle detector; the
                // declaration's own initializer is checked where it is defined.
                if let Some(decl) = reference.resolve(chain.decls(), chain.epoch()) {
                    let mark = chain.mark();
                    chain.add(decl, reference.span);
                    chain.restore(mark);
                }
            }
            LogPayload::String(_) => {}
        }
    }
}

impl CheckRecursion for ValueExpr {
    fn check_recursion(&self, chain: &mut RecursionChain<'_>) {
        match self {
            ValueExpr::Ref(reference) => fold_reference(reference, chain),
            ValueExpr::Concat(lhs, rhs) => {
                lhs.check_recursion(chain);
                rhs.check_recursion(chain);
            }
            ValueExpr::Integer(_)
            | ValueExpr::Float(_)
            | ValueExpr::Boolean(_)
            | ValueExpr::Charstring(_)
            | ValueExpr::Omit => {}
        }
    }
}

impl CheckRecursion for TemplateBody {
    fn check_recursion(&self, chain: &mut RecursionChain<'_>) {
        match self {
            TemplateBody::Specific(value) => value.check_recursion(chain),
            TemplateBody::ValueList(items) | TemplateBody::Complement(items) => {
                for item in items {
                    item.check_recursion(chain);
                }
            }
            TemplateBody::AnyValue | TemplateBody::AnyOrOmit | TemplateBody::Omit => {}
        }
    }
}

impl CheckRecursion for TemplateInstance {
    fn check_recursion(&self, chain: &mut RecursionChain<'_>) {
        if let Some(base) = &self.derived_from {
            fold_reference(base, chain);
        }
        self.body.check_recursion(chain);
    }
}

impl CheckRecursion for MatchExpr {
    fn check_recursion(&self, chain: &mut RecursionChain<'_>) {
        self.value.check_recursion(chain);
        self.template.check_recursion(chain);
    }
}

impl CheckRecursion for Macro {
    /// Macros expand to compile-time facts about their site and never
    /// depend on another declaration.
    fn check_recursion(&self, _chain: &mut RecursionChain<'_>) {}
}

/// Follow a reference into the initializer of a folded declaration.
///
/// The declaration stays on the chain only while its initializer is walked.
fn fold_reference(reference: &Reference, chain: &mut RecursionChain<'_>) {
    let decls = chain.decls();
    let Some(id) = reference.resolve(decls, chain.epoch()) else {
        return;
    };
    let Some(decl) = decls.get(id) else {
        return;
    };

    let mut guard = chain.enter();
    if !guard.add(id, reference.span) || !decl.kind.is_folded() {
        return;
    }
    if let Some(initializer) = &decl.initializer {
        ensure_sufficient_stack(|| initializer.check_recursion(&mut guard));
    }
}
