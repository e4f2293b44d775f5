// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for the builder pipeline.

use super::*;
use crate::{
    config::FactoryMode,
    describe::{AuthorizationCheck, MemberDescription, OperationKind, ParameterDescription},
    model::{DiagnosticId, GeneratedMethodModel, MethodShape}
};

fn build(ty: &TypeDescription) -> FactoryGenerationUnit {
    FactoryBuilder::default().build(ty)
}

fn order() -> TypeDescription {
    TypeDescription::class("Order", "Shop.Orders").serving("IOrder")
}

#[test]
fn unit_fields_come_from_type_and_options() {
    let mut ty = order().with_mode(FactoryMode::RemoteOnly);
    ty.usings = vec!["Shop.Common".to_string(), "Acme.Runtime".to_string()];
    let options = BuildOptions {
        usings: vec!["Acme.Runtime".to_string(), "Acme.Remote".to_string()],
        ..BuildOptions::default()
    };
    let unit = FactoryBuilder::new(options).build(&ty);

    assert_eq!(unit.namespace, "Shop.Orders");
    assert_eq!(unit.hint_name, "Shop.Orders.OrderFactory");
    assert_eq!(unit.mode, FactoryMode::RemoteOnly);
    assert_eq!(unit.usings, vec!["Shop.Common", "Acme.Runtime", "Acme.Remote"]);
}

#[test]
fn mode_defaults_to_options() {
    let options = BuildOptions {
        mode: FactoryMode::RemoteOnly,
        ..BuildOptions::default()
    };
    let builder = FactoryBuilder::new(options);
    assert_eq!(builder.options().mode, FactoryMode::RemoteOnly);
    assert_eq!(builder.build(&order()).mode, FactoryMode::RemoteOnly);
}

#[test]
fn class_methods_are_ordered_by_category() {
    let ty = order()
        .with_member(MemberDescription::new("Insert", OperationKind::Insert))
        .with_member(
            MemberDescription::new("Fetch", OperationKind::Fetch)
                .with_check(AuthorizationCheck::new("OrderAuth", "CanRead"))
        )
        .with_member(MemberDescription::new("Helper", OperationKind::None));
    let unit = build(&ty);
    let class = unit.as_class().unwrap();

    let names: Vec<&str> = class.methods.iter().map(MethodShape::unique_name).collect();
    assert_eq!(names, vec!["Fetch", "Insert", "Save", "CanFetch"]);
    assert_eq!(class.factory_interface_name, "IOrderFactory");
    assert_eq!(class.service_type_name, "IOrder");
    assert!(unit.diagnostics.is_empty());
}

#[test]
fn second_pass_rename_is_relinked_into_save_slots() {
    let ty = order()
        .with_member(
            MemberDescription::new("Save", OperationKind::Insert)
                .with_parameter(ParameterDescription::value("note", "String"))
        )
        .with_member(MemberDescription::new("Update", OperationKind::Update));
    let unit = build(&ty);
    let class = unit.as_class().unwrap();

    let write = class.writes().find(|w| w.operation == OperationKind::Insert).unwrap();
    assert_eq!(write.unique_name(), "Save1");

    let bulk = class.saves().find(|s| s.name() == "SaveSave").unwrap();
    assert_eq!(bulk.insert.as_ref().unwrap().unique_name(), "Save1");

    let default = class.default_save().unwrap();
    assert_eq!(default.unique_name(), "Save");
    assert!(default.update.is_some());
}

#[test]
fn can_guards_the_final_name() {
    let ty = order()
        .with_member(
            MemberDescription::new("Fetch", OperationKind::Fetch)
                .with_parameter(ParameterDescription::value("id", "i32"))
                .with_check(AuthorizationCheck::new("OrderAuth", "CanRead"))
        )
        .with_member(MemberDescription::new("Fetch", OperationKind::Fetch));
    let unit = build(&ty);
    let class = unit.as_class().unwrap();

    let can = class.cans().next().unwrap();
    assert_eq!(can.guards, "Fetch1");
    assert!(class.method("Fetch1").is_some());
}

#[test]
fn can_synthesis_can_be_turned_off() {
    let ty = order().with_member(
        MemberDescription::new("Fetch", OperationKind::Fetch)
            .with_check(AuthorizationCheck::new("OrderAuth", "CanRead"))
    );
    let options = BuildOptions {
        synthesize_can_methods: false,
        ..BuildOptions::default()
    };
    let unit = FactoryBuilder::new(options).build(&ty);
    assert_eq!(unit.as_class().unwrap().cans().count(), 0);
}

#[test]
fn class_events_use_the_configured_suffix() {
    let ty = order().with_member(
        MemberDescription::new("_OnShipped", OperationKind::Event)
            .with_parameter(ParameterDescription::value("id", "i32"))
    );
    let options = BuildOptions {
        event_suffix: "Handler".to_string(),
        ..BuildOptions::default()
    };
    let unit = FactoryBuilder::new(options).build(&ty);
    let class = unit.as_class().unwrap();
    assert_eq!(class.events[0].delegate_name, "ShippedHandler");
    assert!(class.methods.is_empty());
}

#[test]
fn execute_on_class_is_a_warning() {
    let ty = order().with_member(MemberDescription::new("_Run", OperationKind::Execute).task());
    let unit = build(&ty);
    assert!(!unit.has_errors());
    assert_eq!(unit.diagnostics[0].id, DiagnosticId::ExecuteOutsideStaticClass);
    assert!(unit.as_class().unwrap().methods.is_empty());
}

#[test]
fn record_layout_reaches_the_unit() {
    let ty = order()
        .with_ordinal("Id", "i32")
        .with_ordinal("Total", "Decimal")
        .record(["total", "id"]);
    let unit = build(&ty);
    let ordinal = unit.as_class().unwrap().ordinal.as_ref().unwrap();
    assert_eq!(ordinal.constructor_order, Some(vec![1, 0]));
}

#[test]
fn dispatch_follows_type_kind() {
    let interface = build(&TypeDescription::interface("IOrderService", "Shop"));
    assert!(interface.as_interface().is_some());

    let jobs = build(&TypeDescription::static_class("Jobs", "Shop").partial());
    assert!(jobs.as_static().is_some());
    assert!(jobs.as_class().is_none());
}

#[test]
fn read_models_keep_declaration_index() {
    let ty = order()
        .with_member(MemberDescription::new("Helper", OperationKind::None))
        .with_member(MemberDescription::new("Create", OperationKind::Create).constructor());
    let unit = build(&ty);
    let class = unit.as_class().unwrap();
    let read = class.reads().next().unwrap();
    assert_eq!(read.signature.declaration_index, Some(1));
    assert!(matches!(class.methods[0], GeneratedMethodModel::Read(_)));
}
