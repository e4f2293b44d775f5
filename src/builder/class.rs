// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class factory strategy.
//!
//! # Pipeline
//!
//! ```text
//! members ──► reads + writes ──► resolve ──► saves ──► cans ──► resolve ──► relink
//!         └─► events ─────────────────────► resolve + delegate names
//!         └─► ordinal properties ─────────► layout
//! ```
//!
//! Names are resolved twice. The first pass gives saves and cans stable
//! names to point at; the second covers the whole public surface. Because
//! the second pass may rename a write or a guarded method, save slots and
//! `guards` are relinked afterwards.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::{
    can, diagnostics::DiagnosticEmitter, methods, naming, ordinal::ordinal_model, save, unique
};
use crate::{
    config::BuildOptions,
    describe::{OperationKind, TypeDescription},
    model::{
        ClassFactoryModel, EventMethod, GeneratedMethodModel, SaveMethod, WriteMethod
    }
};

pub fn build(
    ty: &TypeDescription,
    options: &BuildOptions,
    emitter: &mut DiagnosticEmitter
) -> ClassFactoryModel {
    let mut reads = Vec::new();
    let mut writes = Vec::new();
    let mut events = Vec::new();

    for (index, member) in ty.members.iter().enumerate() {
        match member.kind {
            OperationKind::Create | OperationKind::Fetch => {
                reads.push(GeneratedMethodModel::Read(methods::read_method(ty, member, index)));
            }
            OperationKind::Insert | OperationKind::Update | OperationKind::Delete => {
                writes.push(GeneratedMethodModel::Write(methods::write_method(ty, member, index)));
            }
            OperationKind::Event => {
                events.push(methods::event_method(member, index, &options.event_suffix));
            }
            OperationKind::Execute => emitter.execute_outside_static(ty, member),
            OperationKind::None => trace!(member = %member.name, "no operation, ignored")
        }
    }

    let mut list = unique::resolve(reads.into_iter().chain(writes).collect());

    let resolved_writes: Vec<WriteMethod> = list
        .iter()
        .filter_map(GeneratedMethodModel::as_write)
        .cloned()
        .collect();
    list.extend(
        save::group(ty, &resolved_writes, emitter)
            .into_iter()
            .map(GeneratedMethodModel::Save)
    );

    let mut guards = HashMap::new();
    if options.synthesize_can_methods {
        let reserved = ty.members.iter().map(|m| m.name.as_str());
        for synthesized in can::synthesize(&list, reserved, false) {
            guards.insert(list.len(), synthesized.source);
            list.push(GeneratedMethodModel::Can(synthesized.method));
        }
    }

    let list = can::relink(relink_saves(unique::resolve(list)), &guards);
    debug!(methods = list.len(), events = events.len(), "class factory built");

    ClassFactoryModel {
        type_name: ty.name.clone(),
        service_type_name: ty.service_type_name.clone(),
        implementation_type_name: ty.implementation_type_name.clone(),
        factory_name: naming::factory_name(&ty.name),
        factory_interface_name: naming::factory_interface_name(&ty.name),
        methods: list,
        events: resolve_events(events),
        ordinal: ordinal_model(ty, emitter)
    }
}

/// Point save slots at the final write methods.
fn relink_saves(list: Vec<GeneratedMethodModel>) -> Vec<GeneratedMethodModel> {
    let writes: HashMap<usize, WriteMethod> = list
        .iter()
        .filter_map(GeneratedMethodModel::as_write)
        .filter_map(|w| Some((w.signature.declaration_index?, w.clone())))
        .collect();

    list.into_iter()
        .map(|method| match method {
            GeneratedMethodModel::Save(save) => {
                GeneratedMethodModel::Save(relink_save(save, &writes))
            }
            other => other
        })
        .collect()
}

fn relink_save(save: SaveMethod, writes: &HashMap<usize, WriteMethod>) -> SaveMethod {
    let current = |slot: Option<WriteMethod>| {
        slot.map(|old| {
            old.signature
                .declaration_index
                .and_then(|i| writes.get(&i))
                .cloned()
                .unwrap_or(old)
        })
    };
    SaveMethod {
        insert: current(save.insert),
        update: current(save.update),
        delete: current(save.delete),
        ..save
    }
}

/// Unique method names, then unique delegate names.
fn resolve_events(events: Vec<EventMethod>) -> Vec<EventMethod> {
    let events = unique::resolve(events);
    let delegates = unique::resolve_names(events.iter().map(|e| e.delegate_name.as_str()));
    events
        .into_iter()
        .zip(delegates)
        .map(|(event, delegate_name)| EventMethod {
            delegate_name,
            ..event
        })
        .collect()
}
