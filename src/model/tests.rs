// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for the generation model.

use super::*;
use crate::describe::{
    AuthorizationCheck, AuthorizationRequirements, FrameworkAuthorize, OperationKind,
    ParameterDescription, ParameterRole, SourceLocation
};

fn write(name: &str, operation: OperationKind) -> WriteMethod {
    WriteMethod {
        signature: MethodSignature::new(name, "Order"),
        operation
    }
}

fn save(insert: bool, update: bool, delete: bool) -> SaveMethod {
    SaveMethod {
        signature:  MethodSignature::new("Save", "Order"),
        insert:     insert.then(|| write("Insert", OperationKind::Insert)),
        update:     update.then(|| write("Update", OperationKind::Update)),
        delete:     delete.then(|| write("Delete", OperationKind::Delete)),
        is_default: true
    }
}

#[test]
fn empty_requirements_have_no_model() {
    assert!(AuthorizationModel::from_requirements(&AuthorizationRequirements::default()).is_none());
}

#[test]
fn requirements_convert_parameters() {
    let requirements = AuthorizationRequirements {
        checks:    vec![
            AuthorizationCheck::new("OrderAuth", "CanRead")
                .with_parameter(ParameterDescription::target("order", "Order"))
                .task()
        ],
        framework: Vec::new()
    };
    let model = AuthorizationModel::from_requirements(&requirements).unwrap();
    assert!(model.has_target_check());
    assert!(model.is_task());
    assert!(!model.is_remote());
    assert_eq!(model.checks[0].parameters[0].role, ParameterRole::Target);
}

#[test]
fn framework_annotation_forces_remote_and_task() {
    let requirements = AuthorizationRequirements {
        checks:    Vec::new(),
        framework: vec![FrameworkAuthorize::policy("Admin")]
    };
    let model = AuthorizationModel::from_requirements(&requirements).unwrap();
    assert!(model.is_remote());
    assert!(model.is_task());
}

#[test]
fn merge_is_a_union_in_first_seen_order() {
    let read = AuthorizationCheck::new("OrderAuth", "CanWrite");
    let delete = AuthorizationCheck::new("OrderAuth", "CanDelete");
    let first = AuthorizationModel::from_requirements(&AuthorizationRequirements {
        checks:    vec![read.clone()],
        framework: vec![FrameworkAuthorize::policy("Staff")]
    })
    .unwrap();
    let second = AuthorizationModel::from_requirements(&AuthorizationRequirements {
        checks:    vec![read, delete],
        framework: vec![FrameworkAuthorize::policy("Staff")]
    })
    .unwrap();

    let merged = AuthorizationModel::merge([&first, &second]).unwrap();
    let names: Vec<&str> = merged.checks.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["CanWrite", "CanDelete"]);
    assert_eq!(merged.framework.len(), 1);
}

#[test]
fn merge_of_nothing_is_none() {
    assert!(AuthorizationModel::merge(std::iter::empty()).is_none());
}

#[test]
fn query_parameters_skip_targets_and_duplicates() {
    let model = AuthorizationModel::from_requirements(&AuthorizationRequirements {
        checks:    vec![
            AuthorizationCheck::new("Auth", "A")
                .with_parameter(ParameterDescription::value("customer", "i32"))
                .with_parameter(ParameterDescription::target("order", "Order")),
            AuthorizationCheck::new("Auth", "B")
                .with_parameter(ParameterDescription::value("customer", "i32"))
                .with_parameter(ParameterDescription::service("clock", "Clock")),
        ],
        framework: Vec::new()
    })
    .unwrap();
    let names: Vec<String> = model
        .query_parameters()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["customer".to_string(), "clock".to_string()]);
}

#[test]
fn save_route_follows_state() {
    let full = save(true, true, true);
    assert!(matches!(full.route(false, true), SaveRoute::Delete(_)));
    assert!(matches!(full.route(true, false), SaveRoute::Insert(_)));
    assert!(matches!(full.route(false, false), SaveRoute::Update(_)));
    assert!(matches!(full.route(true, true), SaveRoute::Delete(_)));
}

#[test]
fn save_route_falls_through_to_update() {
    let upsert = save(true, true, false);
    assert!(matches!(upsert.route(false, true), SaveRoute::Update(_)));
    assert!(matches!(upsert.route(true, true), SaveRoute::Insert(_)));

    let update_only = save(false, true, false);
    assert!(matches!(update_only.route(true, false), SaveRoute::Update(_)));
    assert!(matches!(update_only.route(false, true), SaveRoute::Update(_)));
}

#[test]
fn save_route_without_update_is_not_implemented() {
    let insert_delete = save(true, false, true);
    assert_eq!(insert_delete.route(false, false), SaveRoute::NotImplemented);
    assert!(matches!(insert_delete.route(true, true), SaveRoute::Delete(_)));

    let delete_only = save(false, false, true);
    assert_eq!(delete_only.route(true, false), SaveRoute::NotImplemented);
}

#[test]
fn save_members_in_slot_order() {
    let full = save(true, false, true);
    let names: Vec<&str> = full.members().map(|m| m.name()).collect();
    assert_eq!(names, vec!["Insert", "Delete"]);
}

#[test]
fn rename_returns_new_model() {
    let original = GeneratedMethodModel::Write(write("Insert", OperationKind::Insert));
    let renamed = original.clone().with_unique_name("Insert1".to_string());
    assert_eq!(original.unique_name(), "Insert");
    assert_eq!(renamed.unique_name(), "Insert1");
    assert_eq!(renamed.name(), "Insert");
}

#[test]
fn method_ident_uses_unique_name() {
    let can = CanMethod {
        signature: MethodSignature::new("CanAccess", "Authorized"),
        guards:    "Access".to_string()
    };
    assert_eq!(can.ident().to_string(), "can_access");
}

#[test]
fn caller_parameter_count_skips_infrastructure() {
    let mut signature = MethodSignature::new("Insert", "Order");
    signature.parameters = vec![
        ParameterModel::target("Order"),
        ParameterModel::from(&ParameterDescription::value("note", "String")),
        ParameterModel::from(&ParameterDescription::service("repo", "Repo")),
        ParameterModel::optional_cancellation(),
    ];
    assert_eq!(signature.caller_parameter_count(), 2);
}

#[test]
fn diagnostic_display_and_compile_error() {
    let diagnostic = Diagnostic::new(
        DiagnosticId::ExecuteNotAwaitable,
        "Execute member `Run` must return an awaitable",
        SourceLocation::new("jobs.cs", 4, 9)
    );
    assert!(diagnostic.is_error());
    assert_eq!(
        diagnostic.to_string(),
        "FG0002: Execute member `Run` must return an awaitable (jobs.cs:4:9)"
    );
    let tokens = diagnostic.to_compile_error().to_string();
    assert!(tokens.contains("compile_error"));
    assert!(tokens.contains("FG0002"));
}

#[test]
fn diagnostic_ids_serialize_as_codes() {
    let json = serde_json::to_string(&DiagnosticId::AmbiguousSaveGroup).unwrap();
    assert_eq!(json, "\"FG0003\"");
    assert_eq!(DiagnosticId::RecordOrdinalMismatch.severity(), Severity::Warning);
}

#[test]
fn method_models_serialize_with_variant_tag() {
    let model = GeneratedMethodModel::Write(write("Insert", OperationKind::Insert));
    let json = serde_json::to_value(&model).unwrap();
    assert_eq!(json["variant"], "write");
    assert_eq!(json["operation"], "insert");
    let back: GeneratedMethodModel = serde_json::from_value(json).unwrap();
    assert_eq!(back, model);
}
