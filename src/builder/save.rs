// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Grouping write methods into composite saves.
//!
//! # Grouping
//!
//! ```text
//! Insert(target)                 ─┐
//! Update(target)                  ├─ key []      ──► Save(target)
//! Delete(target)                 ─┘
//! InsertWithNote(target, String) ─┐
//! UpdateWithNote(target, String) ─┴─ key [String] ──► SaveWithNote(target, String)
//! ```
//!
//! The key is the list of value and params parameter types; targets,
//! services, and cancellation tokens don't change what the caller passes
//! to a save. Groups keep the order of their first member.
//!
//! A group with two members of one kind is split by name postfix
//! (`Insert` vs `InsertViaBulkLoader`). A postfix group that still holds two
//! members of one kind cannot be routed and is reported instead.

use tracing::debug;

use super::{diagnostics::DiagnosticEmitter, naming};
use crate::{
    describe::{OperationKind, ParameterRole, TypeDescription},
    model::{
        AuthorizationModel, MethodShape, MethodSignature, ParameterModel, SaveMethod, WriteMethod
    }
};

fn grouping_key(write: &WriteMethod) -> Vec<String> {
    grouping_parameters(write)
        .map(ParameterModel::type_key)
        .collect()
}

fn grouping_parameters(write: &WriteMethod) -> impl Iterator<Item = &ParameterModel> {
    write
        .signature
        .parameters
        .iter()
        .filter(|p| p.role.is_grouping())
}

fn postfix(write: &WriteMethod) -> &str {
    naming::name_postfix(write.name(), write.operation)
}

/// Partition by key, preserving first-appearance order.
fn partition_by<'a, K, F>(writes: &[&'a WriteMethod], key: F) -> Vec<(K, Vec<&'a WriteMethod>)>
where
    K: PartialEq,
    F: Fn(&'a WriteMethod) -> K
{
    let mut groups: Vec<(K, Vec<&'a WriteMethod>)> = Vec::new();
    for &write in writes {
        let k = key(write);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(write),
            None => groups.push((k, vec![write]))
        }
    }
    groups
}

/// First pair of members sharing an operation kind.
fn duplicate<'a>(members: &[&'a WriteMethod]) -> Option<(&'a WriteMethod, &'a WriteMethod)> {
    members.iter().enumerate().find_map(|(i, second)| {
        members[..i]
            .iter()
            .find(|first| first.operation == second.operation)
            .map(|first| (*first, *second))
    })
}

fn slot(members: &[&WriteMethod], kind: OperationKind) -> Option<WriteMethod> {
    members
        .iter()
        .find(|m| m.operation == kind)
        .map(|m| (*m).clone())
}

fn save_method(ty: &TypeDescription, members: &[&WriteMethod]) -> Option<SaveMethod> {
    let primary = members
        .iter()
        .copied()
        .reduce(|best, m| {
            if m.operation.save_priority() > best.operation.save_priority() {
                m
            } else {
                best
            }
        })?;

    let mut signature =
        MethodSignature::new(naming::save_name(postfix(primary)), ty.service_type_name.clone());
    signature.parameters = primary
        .signature
        .parameters
        .iter()
        .filter(|p| p.role.is_grouping() || p.role == ParameterRole::Target)
        .cloned()
        .collect();
    signature.authorization = AuthorizationModel::merge(
        members
            .iter()
            .filter_map(|m| m.signature.authorization.as_ref())
    );
    signature.is_remote = members.iter().any(|m| m.signature.is_remote);
    signature.is_task = signature.is_remote || members.iter().any(|m| m.signature.is_task);
    signature.is_async = members.iter().any(|m| m.signature.is_async);
    signature.is_nullable = members
        .iter()
        .any(|m| m.operation == OperationKind::Delete || m.signature.is_nullable);

    Some(SaveMethod {
        signature,
        insert: slot(members, OperationKind::Insert),
        update: slot(members, OperationKind::Update),
        delete: slot(members, OperationKind::Delete),
        is_default: false
    })
}

fn report(
    ty: &TypeDescription,
    emitter: &mut DiagnosticEmitter,
    first: &WriteMethod,
    second: &WriteMethod
) {
    let member = |w: &WriteMethod| {
        w.signature
            .declaration_index
            .and_then(|i| ty.members.get(i))
    };
    if let (Some(a), Some(b)) = (member(first), member(second)) {
        emitter.ambiguous_save_group(a, b, second.operation);
    }
}

/// Composite saves for a type's write methods.
///
/// At most one result is the default: among groups keyed only by the
/// target, the one named plain `Save`, else the first.
pub fn group(
    ty: &TypeDescription,
    writes: &[WriteMethod],
    emitter: &mut DiagnosticEmitter
) -> Vec<SaveMethod> {
    let writes: Vec<&WriteMethod> = writes.iter().collect();
    let mut saves: Vec<(bool, SaveMethod)> = Vec::new();

    for (key, members) in partition_by(&writes, grouping_key) {
        let subgroups: Vec<Vec<&WriteMethod>> = if duplicate(&members).is_some() {
            partition_by(&members, postfix)
                .into_iter()
                .map(|(_, m)| m)
                .collect()
        } else {
            vec![members]
        };

        for members in subgroups {
            if let Some((first, second)) = duplicate(&members) {
                report(ty, emitter, first, second);
                continue;
            }
            if let Some(save) = save_method(ty, &members) {
                debug!(
                    save = save.name(),
                    members = members.len(),
                    key = ?key,
                    "grouped save"
                );
                saves.push((key.is_empty(), save));
            }
        }
    }

    let default = saves
        .iter()
        .position(|(bare, save)| *bare && save.name() == naming::save_name(""))
        .or_else(|| saves.iter().position(|(bare, _)| *bare));
    if let Some(i) = default {
        saves[i].1.is_default = true;
    }

    saves.into_iter().map(|(_, save)| save).collect()
}
