// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Can...` authorization queries.
//!
//! Every authorized method whose checks can run before an instance exists
//! (no check takes the target) gets a companion query:
//!
//! ```text
//! Fetch(id)  [OrderAuth::CanRead(customer)]  ──►  CanFetch(customer) -> Authorized
//! ```
//!
//! A member of the described type with the same name wins, and so does a
//! method already in the list. Overloads with identical query parameters
//! share one query.

use std::collections::HashMap;

use tracing::debug;

use super::naming;
use crate::model::{CanMethod, GeneratedMethodModel, MethodShape, MethodSignature, ParameterModel};

/// Return type of every synthesized query.
pub const AUTHORIZED: &str = "Authorized";

/// A synthesized query and the list position of the method it guards.
#[derive(Debug, Clone)]
pub struct Synthesized {
    pub method: CanMethod,
    pub source: usize
}

fn same_shape(a: &[ParameterModel], b: &[ParameterModel]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.type_key() == y.type_key())
}

/// Queries for `methods`, skipping names in `reserved`.
///
/// `cancellable` appends an optional cancellation token, which interface
/// factories need so remote checks can be cancelled.
pub fn synthesize<'r, R>(
    methods: &[GeneratedMethodModel],
    reserved: R,
    cancellable: bool
) -> Vec<Synthesized>
where
    R: IntoIterator<Item = &'r str> + Clone
{
    let mut out: Vec<Synthesized> = Vec::new();

    for (source, method) in methods.iter().enumerate() {
        let Some(authorization) = &method.signature().authorization else {
            continue;
        };
        if authorization.has_target_check() {
            continue;
        }

        let name = naming::can_name(method.name());
        let declared = reserved.clone().into_iter().any(|r| r == name)
            || methods.iter().any(|m| m.name() == name);
        if declared {
            debug!(can = %name, "declared explicitly, not synthesized");
            continue;
        }

        let mut parameters = authorization.query_parameters();
        let shared = out.iter().any(|s| {
            s.method.name() == name && same_shape(&s.method.signature.parameters, &parameters)
        });
        if shared {
            continue;
        }
        if cancellable {
            parameters.push(ParameterModel::optional_cancellation());
        }

        let mut signature = MethodSignature::new(name, AUTHORIZED);
        signature.is_remote = method.signature().is_remote || authorization.is_remote();
        signature.is_task = signature.is_remote || authorization.is_task();
        signature.is_async = authorization.is_task();
        signature.is_nullable = false;
        signature.parameters = parameters;
        signature.authorization = Some(authorization.clone());

        debug!(can = %signature.name, guards = method.unique_name(), "synthesized");
        out.push(Synthesized {
            method: CanMethod {
                signature,
                guards: method.unique_name().to_string()
            },
            source
        });
    }

    out
}

/// Point each query at the final name of the method it guards.
///
/// `guards` maps a query's list position to the position of its source.
pub fn relink(
    list: Vec<GeneratedMethodModel>,
    guards: &HashMap<usize, usize>
) -> Vec<GeneratedMethodModel> {
    let names: Vec<String> = list.iter().map(|m| m.unique_name().to_string()).collect();
    list.into_iter()
        .enumerate()
        .map(|(position, method)| match method {
            GeneratedMethodModel::Can(mut can) => {
                if let Some(name) = guards.get(&position).and_then(|&source| names.get(source)) {
                    can.guards = name.clone();
                }
                GeneratedMethodModel::Can(can)
            }
            other => other
        })
        .collect()
}
