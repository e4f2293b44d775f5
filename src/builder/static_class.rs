// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static class strategy.
//!
//! Execute and Event members become delegates. The class itself must be
//! partial for the generated stubs to attach; a class that isn't is
//! reported but still built. An Execute member without an awaitable return
//! is reported and skipped on its own.

use tracing::{debug, trace};

use super::{diagnostics::DiagnosticEmitter, methods, unique};
use crate::{
    config::BuildOptions,
    describe::{OperationKind, TypeDescription},
    model::{EventMethod, ExecuteDelegate, StaticFactoryModel}
};

pub fn build(
    ty: &TypeDescription,
    options: &BuildOptions,
    emitter: &mut DiagnosticEmitter
) -> StaticFactoryModel {
    emitter.static_partial(ty);

    let mut executes = Vec::new();
    let mut events = Vec::new();
    for (index, member) in ty.members.iter().enumerate() {
        match member.kind {
            OperationKind::Execute => {
                if emitter.execute_awaitable(member) {
                    executes.push(methods::execute_delegate(member, index));
                }
            }
            OperationKind::Event => {
                events.push(methods::event_method(member, index, &options.event_suffix));
            }
            _ => trace!(member = %member.name, "not a delegate member, ignored")
        }
    }

    let (execute_delegates, events) =
        resolve_delegates(unique::resolve(executes), unique::resolve(events));
    debug!(
        executes = execute_delegates.len(),
        events = events.len(),
        "static factory built"
    );

    StaticFactoryModel {
        type_name: ty.name.clone(),
        execute_delegates,
        events
    }
}

/// Delegate types of one class share a namespace.
fn resolve_delegates(
    executes: Vec<ExecuteDelegate>,
    events: Vec<EventMethod>
) -> (Vec<ExecuteDelegate>, Vec<EventMethod>) {
    let mut names = unique::resolve_names(
        executes
            .iter()
            .map(|e| e.delegate_name.as_str())
            .chain(events.iter().map(|e| e.delegate_name.as_str()))
    )
    .into_iter();

    let executes = executes
        .into_iter()
        .zip(names.by_ref())
        .map(|(execute, delegate_name)| ExecuteDelegate {
            delegate_name,
            ..execute
        })
        .collect();
    let events = events
        .into_iter()
        .zip(names)
        .map(|(event, delegate_name)| EventMethod {
            delegate_name,
            ..event
        })
        .collect();
    (executes, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        describe::{MemberDescription, ParameterDescription},
        model::DiagnosticId
    };

    fn jobs() -> TypeDescription {
        TypeDescription::static_class("Jobs", "Shop").partial()
    }

    #[test]
    fn void_execute_is_skipped_alone() {
        let ty = jobs()
            .with_member(MemberDescription::new("_Broken", OperationKind::Execute))
            .with_member(
                MemberDescription::new("_Rebuild", OperationKind::Execute)
                    .returning("Task")
                    .task()
            )
            .with_member(MemberDescription::new("_OnDone", OperationKind::Event).task());
        let mut emitter = DiagnosticEmitter::new();
        let model = build(&ty, &BuildOptions::default(), &mut emitter);

        assert_eq!(model.execute_delegates.len(), 1);
        assert_eq!(model.execute_delegates[0].delegate_name, "Rebuild");
        assert_eq!(model.events.len(), 1);
        let diagnostics = emitter.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].id, DiagnosticId::ExecuteNotAwaitable);
    }

    #[test]
    fn non_partial_class_still_builds() {
        let ty = TypeDescription::static_class("Jobs", "Shop").with_member(
            MemberDescription::new("_OnDone", OperationKind::Event)
                .with_parameter(ParameterDescription::service("mailer", "Mailer"))
        );
        let mut emitter = DiagnosticEmitter::new();
        let model = build(&ty, &BuildOptions::default(), &mut emitter);

        assert_eq!(model.events.len(), 1);
        assert_eq!(model.events[0].service_parameters.len(), 1);
        assert_eq!(
            emitter.into_diagnostics()[0].id,
            DiagnosticId::NonPartialStaticClass
        );
    }

    #[test]
    fn delegate_names_do_not_collide() {
        let ty = jobs()
            .with_member(
                MemberDescription::new("ExecuteDoneEvent", OperationKind::Execute)
                    .returning("Task")
                    .task()
            )
            .with_member(MemberDescription::new("OnDone", OperationKind::Event))
            .with_member(MemberDescription::new("_OnDone", OperationKind::Event));
        let mut emitter = DiagnosticEmitter::new();
        let model = build(&ty, &BuildOptions::default(), &mut emitter);

        assert_eq!(model.execute_delegates[0].delegate_name, "DoneEvent");
        let events: Vec<&str> = model.events.iter().map(|e| e.delegate_name.as_str()).collect();
        assert_eq!(events, vec!["DoneEvent1", "DoneEvent2"]);
    }
}
