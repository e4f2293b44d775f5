// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Interface factory strategy.
//!
//! Every member becomes a remote call. Queries are cancellable because the
//! check runs on the other side of the wire.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::{can, diagnostics::DiagnosticEmitter, methods, naming, unique};
use crate::{
    config::BuildOptions,
    describe::{OperationKind, TypeDescription},
    model::{GeneratedMethodModel, InterfaceFactoryModel}
};

pub fn build(
    ty: &TypeDescription,
    options: &BuildOptions,
    emitter: &mut DiagnosticEmitter
) -> InterfaceFactoryModel {
    let mut list: Vec<GeneratedMethodModel> = Vec::new();

    for (index, member) in ty.members.iter().enumerate() {
        match member.kind {
            OperationKind::Execute => emitter.execute_outside_static(ty, member),
            OperationKind::Event => trace!(member = %member.name, "event on interface, ignored"),
            _ => {
                let method = methods::interface_method(member, index);
                list.push(GeneratedMethodModel::Interface(method));
            }
        }
    }

    let mut guards = HashMap::new();
    if options.synthesize_can_methods {
        let reserved = ty.members.iter().map(|m| m.name.as_str());
        for synthesized in can::synthesize(&list, reserved, true) {
            guards.insert(list.len(), synthesized.source);
            list.push(GeneratedMethodModel::Can(synthesized.method));
        }
    }

    let list = can::relink(unique::resolve(list), &guards);
    debug!(methods = list.len(), "interface factory built");

    InterfaceFactoryModel {
        type_name:    ty.name.clone(),
        factory_name: naming::interface_factory_name(&ty.name),
        methods:      list
    }
}
