// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Positional serialization layout.

use super::diagnostics::DiagnosticEmitter;
use crate::{
    describe::TypeDescription,
    model::{OrdinalModel, OrdinalPropertyModel}
};

/// Layout for a class with ordinal properties.
///
/// Records are rebuilt through their primary constructor, so every
/// constructor parameter must match a property (case-insensitively). A
/// parameter without one leaves the type without a layout.
pub fn ordinal_model(
    ty: &TypeDescription,
    emitter: &mut DiagnosticEmitter
) -> Option<OrdinalModel> {
    if ty.ordinal_properties.is_empty() {
        return None;
    }

    let properties: Vec<OrdinalPropertyModel> = ty
        .ordinal_properties
        .iter()
        .enumerate()
        .map(|(index, p)| OrdinalPropertyModel {
            index,
            name: p.name.clone(),
            ty: p.ty.clone()
        })
        .collect();

    let constructor_order = if ty.is_record {
        let mut order = Vec::with_capacity(ty.primary_constructor_parameters.len());
        for parameter in &ty.primary_constructor_parameters {
            match properties
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(parameter))
            {
                Some(p) => order.push(p.index),
                None => {
                    emitter.record_ordinal_mismatch(ty, parameter);
                    return None;
                }
            }
        }
        Some(order)
    } else {
        None
    };

    Some(OrdinalModel {
        properties,
        constructor_order
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DiagnosticId;

    fn point() -> TypeDescription {
        TypeDescription::class("Point", "Geo")
            .with_ordinal("X", "f64")
            .with_ordinal("Y", "f64")
    }

    #[test]
    fn no_properties_no_layout() {
        let mut emitter = DiagnosticEmitter::new();
        assert!(ordinal_model(&TypeDescription::class("Empty", "Geo"), &mut emitter).is_none());
    }

    #[test]
    fn class_layout_is_declaration_order() {
        let mut emitter = DiagnosticEmitter::new();
        let model = ordinal_model(&point(), &mut emitter).unwrap();
        assert_eq!(model.properties[1].name, "Y");
        assert_eq!(model.properties[1].index, 1);
        assert!(model.constructor_order.is_none());
    }

    #[test]
    fn record_parameters_map_case_insensitively() {
        let ty = point().record(["y", "x"]);
        let mut emitter = DiagnosticEmitter::new();
        let model = ordinal_model(&ty, &mut emitter).unwrap();
        assert_eq!(model.constructor_order, Some(vec![1, 0]));
        assert!(emitter.into_diagnostics().is_empty());
    }

    #[test]
    fn unmatched_record_parameter_warns() {
        let ty = point().record(["x", "z"]);
        let mut emitter = DiagnosticEmitter::new();
        assert!(ordinal_model(&ty, &mut emitter).is_none());
        let diagnostics = emitter.into_diagnostics();
        assert_eq!(diagnostics[0].id, DiagnosticId::RecordOrdinalMismatch);
        assert!(!diagnostics[0].is_error());
    }
}
