// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structural validation.
//!
//! Member rules return whether the checked member may be generated. A
//! failed rule records its diagnostic and the strategy skips the member, so
//! one bad member never takes the rest of the unit down with it. Type rules
//! only record; the unit is generated regardless.

use tracing::debug;

use crate::{
    describe::{MemberDescription, OperationKind, TypeDescription},
    model::{Diagnostic, DiagnosticId}
};

/// Collects diagnostics for one unit, in the order they are raised.
#[derive(Debug, Default)]
pub struct DiagnosticEmitter {
    diagnostics: Vec<Diagnostic>
}

impl DiagnosticEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        debug!(%diagnostic, "diagnostic raised");
        self.diagnostics.push(diagnostic);
    }

    /// A static class with Execute or Event members must be partial.
    ///
    /// Generation continues either way; the emitted stubs just won't
    /// compile until the declaration is fixed.
    pub fn static_partial(&mut self, ty: &TypeDescription) {
        if ty.is_partial || !ty.has_delegate_members() {
            return;
        }
        self.emit(Diagnostic::new(
            DiagnosticId::NonPartialStaticClass,
            format!(
                "static class `{}` declares Execute or Event members and must be partial",
                ty.name
            ),
            ty.location.clone()
        ));
    }

    /// An Execute member must return an awaitable.
    pub fn execute_awaitable(&mut self, member: &MemberDescription) -> bool {
        if member.is_task {
            return true;
        }
        self.emit(Diagnostic::new(
            DiagnosticId::ExecuteNotAwaitable,
            format!(
                "Execute member `{}` returns `{}`, which is not awaitable",
                member.name, member.return_type
            ),
            member.location.clone()
        ));
        false
    }

    /// Execute members only make sense on static classes.
    pub fn execute_outside_static(&mut self, ty: &TypeDescription, member: &MemberDescription) {
        self.emit(Diagnostic::new(
            DiagnosticId::ExecuteOutsideStaticClass,
            format!(
                "Execute member `{}` on `{}` is ignored; declare it on a static class",
                member.name, ty.name
            ),
            member.location.clone()
        ));
    }

    /// Two members of one kind share a save shape and a name postfix.
    pub fn ambiguous_save_group(
        &mut self,
        first: &MemberDescription,
        second: &MemberDescription,
        kind: OperationKind
    ) {
        self.emit(Diagnostic::new(
            DiagnosticId::AmbiguousSaveGroup,
            format!(
                "`{}` and `{}` are both {} methods with the same parameters; \
                 rename one to give it a distinct save",
                first.name,
                second.name,
                kind.word()
            ),
            second.location.clone()
        ));
    }

    /// A record constructor parameter without an ordinal property.
    pub fn record_ordinal_mismatch(&mut self, ty: &TypeDescription, parameter: &str) {
        self.emit(Diagnostic::new(
            DiagnosticId::RecordOrdinalMismatch,
            format!(
                "record `{}` constructor parameter `{parameter}` has no matching property; \
                 ordinal serialization is skipped",
                ty.name
            ),
            ty.location.clone()
        ));
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::SourceLocation;

    #[test]
    fn partial_static_class_passes() {
        let ty = TypeDescription::static_class("Jobs", "Shop")
            .partial()
            .with_member(MemberDescription::new("_Run", OperationKind::Execute).task());
        let mut emitter = DiagnosticEmitter::new();
        emitter.static_partial(&ty);
        assert!(emitter.into_diagnostics().is_empty());
    }

    #[test]
    fn static_class_without_delegates_needs_no_partial() {
        let ty = TypeDescription::static_class("Helpers", "Shop");
        let mut emitter = DiagnosticEmitter::new();
        emitter.static_partial(&ty);
        assert!(emitter.into_diagnostics().is_empty());
    }

    #[test]
    fn non_partial_static_class_reports_at_type() {
        let ty = TypeDescription::static_class("Jobs", "Shop")
            .at(SourceLocation::new("Jobs.cs", 3, 1))
            .with_member(MemberDescription::new("_OnDone", OperationKind::Event));
        let mut emitter = DiagnosticEmitter::new();
        emitter.static_partial(&ty);
        let diagnostics = emitter.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].id, DiagnosticId::NonPartialStaticClass);
        assert_eq!(diagnostics[0].location.line, 3);
    }

    #[test]
    fn void_execute_reports_at_member() {
        let member = MemberDescription::new("_Run", OperationKind::Execute)
            .at(SourceLocation::new("Jobs.cs", 9, 5));
        let mut emitter = DiagnosticEmitter::new();
        assert!(!emitter.execute_awaitable(&member));
        let diagnostics = emitter.into_diagnostics();
        assert_eq!(diagnostics[0].id, DiagnosticId::ExecuteNotAwaitable);
        assert!(diagnostics[0].message.contains("`void`"));
        assert_eq!(diagnostics[0].location.line, 9);
    }

    #[test]
    fn ambiguous_group_points_at_second_member() {
        let first = MemberDescription::new("Insert", OperationKind::Insert)
            .at(SourceLocation::new("Order.cs", 10, 5));
        let second = MemberDescription::new("_Insert", OperationKind::Insert)
            .at(SourceLocation::new("Order.cs", 20, 5));
        let mut emitter = DiagnosticEmitter::new();
        emitter.ambiguous_save_group(&first, &second, OperationKind::Insert);
        let diagnostics = emitter.into_diagnostics();
        assert_eq!(diagnostics[0].location.line, 20);
        assert!(diagnostics[0].is_error());
    }
}
