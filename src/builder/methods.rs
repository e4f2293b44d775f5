// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-member method models.
//!
//! One member in, one model out. Nothing here fails or reports: invalid
//! members are filtered by the diagnostic emitter before they get here.
//!
//! # Derived Flags
//!
//! Flags combine the member's own attributes with its authorization:
//!
//! | Flag | Rule |
//! |------|------|
//! | remote | member remote, or a check is remote, or a framework annotation exists |
//! | task | remote, or member awaitable, or a check awaitable, or a framework annotation |
//! | async | (authorized and member awaitable), or a check awaitable, or a framework annotation |
//! | nullable | member nullable, or authorized, or member returns a boolean |
//!
//! Remoting and framework authorization cross a process or middleware
//! boundary, so they force an awaitable signature. Authorization failure
//! and a `false` boolean result both surface as "no result".

use super::naming;
use crate::{
    describe::{MemberDescription, ParameterRole, TypeDescription},
    model::{
        AuthorizationModel, EventMethod, ExecuteDelegate, InterfaceMethod, Invocation,
        MethodSignature, ParameterModel, ReadMethod, WriteMethod
    }
};

/// Derived flags of a generated method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub is_remote:   bool,
    pub is_task:     bool,
    pub is_async:    bool,
    pub is_nullable: bool
}

impl Flags {
    /// Flags for a member of a class factory.
    pub fn derive(member: &MemberDescription, authorization: Option<&AuthorizationModel>) -> Self {
        let auth_remote = authorization.is_some_and(AuthorizationModel::is_remote);
        let auth_task = authorization.is_some_and(AuthorizationModel::is_task);
        let is_remote = member.is_remote || auth_remote;

        Self {
            is_remote,
            is_task: is_remote || member.is_task || auth_task,
            is_async: (authorization.is_some() && member.is_task) || auth_task,
            is_nullable: member.is_nullable || authorization.is_some() || member.is_bool
        }
    }

    /// Flags for an interface member, which is remote by definition and
    /// therefore always awaitable.
    pub fn derive_interface(
        member: &MemberDescription,
        authorization: Option<&AuthorizationModel>
    ) -> Self {
        let auth_task = authorization.is_some_and(AuthorizationModel::is_task);

        Self {
            is_remote:   true,
            is_task:     true,
            is_async:    (authorization.is_some() && member.is_task) || auth_task,
            is_nullable: member.is_nullable || authorization.is_some() || member.is_bool
        }
    }

    fn apply(self, signature: &mut MethodSignature) {
        signature.is_remote = self.is_remote;
        signature.is_task = self.is_task;
        signature.is_async = self.is_async;
        signature.is_nullable = self.is_nullable;
    }
}

fn parameters(member: &MemberDescription) -> Vec<ParameterModel> {
    member.parameters.iter().map(ParameterModel::from).collect()
}

fn signature(
    member: &MemberDescription,
    index: usize,
    return_type: &str,
    parameters: Vec<ParameterModel>,
    flags: Flags
) -> MethodSignature {
    let mut signature = MethodSignature::new(member.name.clone(), return_type);
    flags.apply(&mut signature);
    signature.parameters = parameters;
    signature.authorization = AuthorizationModel::from_requirements(&member.authorization);
    signature.declaration_index = Some(index);
    signature
}

/// Create or Fetch member of a class.
pub fn read_method(ty: &TypeDescription, member: &MemberDescription, index: usize) -> ReadMethod {
    let authorization = AuthorizationModel::from_requirements(&member.authorization);
    let flags = Flags::derive(member, authorization.as_ref());
    let invocation = if member.is_constructor {
        Invocation::Constructor
    } else if member.is_static_factory {
        Invocation::StaticFactory
    } else {
        Invocation::Instance
    };

    ReadMethod {
        signature: signature(member, index, &ty.service_type_name, parameters(member), flags),
        operation: member.kind,
        invocation
    }
}

/// Insert, Update, or Delete member of a class.
///
/// The target parameter comes first. Members that already declare one keep
/// their own; everyone else gets the implicit `target`.
pub fn write_method(ty: &TypeDescription, member: &MemberDescription, index: usize) -> WriteMethod {
    let authorization = AuthorizationModel::from_requirements(&member.authorization);
    let flags = Flags::derive(member, authorization.as_ref());

    let declared = parameters(member);
    let mut all = Vec::with_capacity(declared.len() + 1);
    match declared.iter().position(|p| p.role == ParameterRole::Target) {
        Some(position) => {
            all.push(declared[position].clone());
            all.extend(
                declared
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != position)
                    .map(|(_, p)| p.clone())
            );
        }
        None => {
            all.push(ParameterModel::target(ty.service_type_name.clone()));
            all.extend(declared);
        }
    }

    WriteMethod {
        signature: signature(member, index, &ty.service_type_name, all, flags),
        operation: member.kind
    }
}

/// Member of an interface factory.
pub fn interface_method(member: &MemberDescription, index: usize) -> InterfaceMethod {
    let authorization = AuthorizationModel::from_requirements(&member.authorization);
    let flags = Flags::derive_interface(member, authorization.as_ref());

    InterfaceMethod {
        signature: signature(member, index, &member.return_type, parameters(member), flags),
        operation: member.kind
    }
}

/// Split parameters into caller-visible values and container services.
///
/// Cancellation tokens go to neither list.
fn split_services(member: &MemberDescription) -> (Vec<ParameterModel>, Vec<ParameterModel>) {
    let mut values = Vec::new();
    let mut services = Vec::new();
    for parameter in parameters(member) {
        match parameter.role {
            ParameterRole::Service => services.push(parameter),
            ParameterRole::CancellationToken => {}
            _ => values.push(parameter)
        }
    }
    (values, services)
}

/// Event member, exposed as a fire-and-forget delegate.
pub fn event_method(member: &MemberDescription, index: usize, suffix: &str) -> EventMethod {
    let authorization = AuthorizationModel::from_requirements(&member.authorization);
    let auth_task = authorization
        .as_ref()
        .is_some_and(AuthorizationModel::is_task);
    let flags = Flags {
        is_remote:   true,
        is_task:     true,
        is_async:    (authorization.is_some() && member.is_task) || auth_task,
        is_nullable: false
    };
    let (values, services) = split_services(member);

    EventMethod {
        signature:          signature(member, index, &member.return_type, values, flags),
        service_parameters: services,
        delegate_name:      naming::event_delegate_name(&member.name, suffix),
        has_cancellation:   member.has_cancellation()
    }
}

/// Execute member of a static class.
///
/// Callers must have checked that the member returns an awaitable.
pub fn execute_delegate(member: &MemberDescription, index: usize) -> ExecuteDelegate {
    let authorization = AuthorizationModel::from_requirements(&member.authorization);
    let auth_task = authorization
        .as_ref()
        .is_some_and(AuthorizationModel::is_task);
    let flags = Flags {
        is_remote:   true,
        is_task:     true,
        is_async:    (authorization.is_some() && member.is_task) || auth_task,
        is_nullable: member.is_nullable || authorization.is_some()
    };
    let (values, services) = split_services(member);

    ExecuteDelegate {
        signature:          signature(member, index, &member.return_type, values, flags),
        service_parameters: services,
        delegate_name:      naming::execute_delegate_name(&member.name),
        has_cancellation:   member.has_cancellation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::{
        AuthorizationCheck, FrameworkAuthorize, OperationKind, ParameterDescription
    };

    fn order() -> TypeDescription {
        TypeDescription::class("Order", "Shop").serving("IOrder")
    }

    #[test]
    fn plain_fetch_is_local_and_sync() {
        let member = MemberDescription::new("Fetch", OperationKind::Fetch)
            .with_parameter(ParameterDescription::value("id", "i32"));
        let read = read_method(&order(), &member, 0);
        let s = &read.signature;
        assert_eq!(s.return_type, "IOrder");
        assert!(!s.is_remote && !s.is_task && !s.is_async && !s.is_nullable);
        assert_eq!(read.invocation, Invocation::Instance);
        assert_eq!(s.declaration_index, Some(0));
    }

    #[test]
    fn remote_forces_task_but_not_async() {
        let member = MemberDescription::new("Fetch", OperationKind::Fetch).remote();
        let s = read_method(&order(), &member, 0).signature;
        assert!(s.is_remote);
        assert!(s.is_task);
        assert!(!s.is_async);
    }

    #[test]
    fn awaitable_without_auth_is_task_but_not_async() {
        let member = MemberDescription::new("Fetch", OperationKind::Fetch).task();
        let s = read_method(&order(), &member, 0).signature;
        assert!(s.is_task);
        assert!(!s.is_async);
    }

    #[test]
    fn auth_with_awaitable_member_is_async_and_nullable() {
        let member = MemberDescription::new("Fetch", OperationKind::Fetch)
            .task()
            .with_check(AuthorizationCheck::new("OrderAuth", "CanRead"));
        let s = read_method(&order(), &member, 0).signature;
        assert!(s.is_async);
        assert!(s.is_nullable);
        assert!(!s.is_remote);
        assert!(s.has_auth());
    }

    #[test]
    fn remote_check_makes_member_remote() {
        let member = MemberDescription::new("Create", OperationKind::Create)
            .constructor()
            .with_check(AuthorizationCheck::new("OrderAuth", "CanCreate").remote());
        let read = read_method(&order(), &member, 0);
        assert!(read.signature.is_remote);
        assert!(read.signature.is_task);
        assert_eq!(read.invocation, Invocation::Constructor);
    }

    #[test]
    fn framework_authorize_forces_everything() {
        let member = MemberDescription::new("Fetch", OperationKind::Fetch)
            .with_framework_authorize(FrameworkAuthorize::policy("Admin"));
        let s = read_method(&order(), &member, 0).signature;
        assert!(s.is_remote && s.is_task && s.is_async && s.is_nullable);
    }

    #[test]
    fn boolean_fetch_is_nullable() {
        let member = MemberDescription::new("Fetch", OperationKind::Fetch).boolean();
        assert!(read_method(&order(), &member, 0).signature.is_nullable);
    }

    #[test]
    fn write_prepends_target() {
        let member = MemberDescription::new("Insert", OperationKind::Insert)
            .with_parameter(ParameterDescription::service("repo", "OrderRepository"));
        let write = write_method(&order(), &member, 3);
        let roles: Vec<ParameterRole> = write.signature.parameters.iter().map(|p| p.role).collect();
        assert_eq!(roles, vec![ParameterRole::Target, ParameterRole::Service]);
        assert_eq!(write.signature.parameters[0].ty, "IOrder");
        assert_eq!(write.operation, OperationKind::Insert);
    }

    #[test]
    fn write_keeps_declared_target_first() {
        let member = MemberDescription::new("Update", OperationKind::Update)
            .with_parameter(ParameterDescription::value("note", "String"))
            .with_parameter(ParameterDescription::target("order", "Order"));
        let write = write_method(&order(), &member, 0);
        let names: Vec<&str> = write
            .signature
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["order", "note"]);
    }

    #[test]
    fn interface_methods_are_always_remote() {
        let member = MemberDescription::new("GetTotals", OperationKind::None)
            .returning("Task<Totals>")
            .task();
        let method = interface_method(&member, 0);
        assert!(method.signature.is_remote);
        assert!(method.signature.is_task);
        assert!(!method.signature.is_async);
        assert_eq!(method.signature.return_type, "Task<Totals>");
    }

    #[test]
    fn synchronous_interface_member_is_awaitable() {
        let member = MemberDescription::new("Ping", OperationKind::None);
        let method = interface_method(&member, 0);
        assert!(method.signature.is_remote);
        assert!(method.signature.is_task);
        assert!(!method.signature.is_async);
    }

    #[test]
    fn event_splits_services_and_cancellation() {
        let member = MemberDescription::new("_OnOrderPlaced", OperationKind::Event)
            .with_parameter(ParameterDescription::value("order_id", "i32"))
            .with_parameter(ParameterDescription::service("mailer", "Mailer"))
            .with_parameter(ParameterDescription::cancellation("ct"));
        let event = event_method(&member, 0, "Event");
        assert_eq!(event.delegate_name, "OrderPlacedEvent");
        assert_eq!(event.signature.parameters.len(), 1);
        assert_eq!(event.service_parameters.len(), 1);
        assert_eq!(event.service_parameters[0].name, "mailer");
        assert!(event.has_cancellation);
    }

    #[test]
    fn execute_splits_and_names() {
        let member = MemberDescription::new("_RunNightly", OperationKind::Execute)
            .returning("Task<Report>")
            .task()
            .with_parameter(ParameterDescription::value("day", "Date"))
            .with_parameter(ParameterDescription::service("db", "Db"));
        let delegate = execute_delegate(&member, 1);
        assert_eq!(delegate.delegate_name, "RunNightly");
        assert_eq!(delegate.signature.return_type, "Task<Report>");
        assert_eq!(delegate.signature.parameters.len(), 1);
        assert!(!delegate.has_cancellation);
        assert!(delegate.signature.is_remote && delegate.signature.is_task);
    }
}
