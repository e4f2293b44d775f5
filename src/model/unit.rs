// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation units and per-kind factory models.

use serde::{Deserialize, Serialize};

use super::{
    CanMethod, Diagnostic, EventMethod, ExecuteDelegate, GeneratedMethodModel, MethodShape,
    ReadMethod, SaveMethod, WriteMethod
};
use crate::{config::FactoryMode, error::Result};

/// One property in a positional layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrdinalPropertyModel {
    /// Position in the serialized array.
    pub index: usize,
    /// Property name.
    pub name:  String,
    /// Property type as written.
    pub ty:    String
}

/// Positional serialization layout of a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrdinalModel {
    /// Properties by position.
    pub properties: Vec<OrdinalPropertyModel>,

    /// For records: property index of each primary constructor parameter,
    /// in parameter order. `None` when the type is built through setters.
    pub constructor_order: Option<Vec<usize>>
}

/// Factory for a domain class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassFactoryModel {
    /// Described type name.
    pub type_name: String,

    /// Type the factory returns.
    pub service_type_name: String,

    /// Type the factory instantiates.
    pub implementation_type_name: String,

    /// Generated factory type.
    pub factory_name: String,

    /// Generated factory interface.
    pub factory_interface_name: String,

    /// Reads, writes, saves, then can-queries.
    pub methods: Vec<GeneratedMethodModel>,

    /// Event delegates declared on the class.
    pub events: Vec<EventMethod>,

    /// Positional serialization layout, when ordinal properties exist.
    pub ordinal: Option<OrdinalModel>
}

impl ClassFactoryModel {
    /// Read methods.
    pub fn reads(&self) -> impl Iterator<Item = &ReadMethod> {
        self.methods.iter().filter_map(GeneratedMethodModel::as_read)
    }

    /// Write methods.
    pub fn writes(&self) -> impl Iterator<Item = &WriteMethod> {
        self.methods.iter().filter_map(GeneratedMethodModel::as_write)
    }

    /// Save methods.
    pub fn saves(&self) -> impl Iterator<Item = &SaveMethod> {
        self.methods.iter().filter_map(GeneratedMethodModel::as_save)
    }

    /// Can-queries.
    pub fn cans(&self) -> impl Iterator<Item = &CanMethod> {
        self.methods.iter().filter_map(GeneratedMethodModel::as_can)
    }

    /// The `Save(target)` entry point.
    pub fn default_save(&self) -> Option<&SaveMethod> {
        self.saves().find(|s| s.is_default)
    }

    /// Method by unique name.
    pub fn method(&self, unique_name: &str) -> Option<&GeneratedMethodModel> {
        self.methods
            .iter()
            .find(|m| m.unique_name() == unique_name)
    }
}

/// Factory implementing an interface by remote calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceFactoryModel {
    /// Described interface name.
    pub type_name:    String,
    /// Generated factory type.
    pub factory_name: String,
    /// Interface members, then can-queries.
    pub methods:      Vec<GeneratedMethodModel>
}

impl InterfaceFactoryModel {
    /// Method by unique name.
    pub fn method(&self, unique_name: &str) -> Option<&GeneratedMethodModel> {
        self.methods
            .iter()
            .find(|m| m.unique_name() == unique_name)
    }
}

/// Delegates for a static class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticFactoryModel {
    /// Described static class name.
    pub type_name:         String,
    /// Execute delegates for valid Execute members.
    pub execute_delegates: Vec<ExecuteDelegate>,
    /// Event delegates.
    pub events:            Vec<EventMethod>
}

/// Exactly one factory model per unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FactoryModel {
    /// From a static class.
    Static(StaticFactoryModel),
    /// From an interface.
    Interface(InterfaceFactoryModel),
    /// From a class.
    Class(ClassFactoryModel)
}

/// Everything the renderer needs for one described type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactoryGenerationUnit {
    /// Namespace of the emitted code.
    pub namespace:   String,
    /// Usings of the emitted code.
    pub usings:      Vec<String>,
    /// Generation mode.
    pub mode:        FactoryMode,
    /// Stable identity of the emitted unit.
    pub hint_name:   String,
    /// Diagnostics in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
    /// The factory model.
    pub factory:     FactoryModel
}

impl FactoryGenerationUnit {
    /// Whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Class factory, if the type was a class.
    pub fn as_class(&self) -> Option<&ClassFactoryModel> {
        match &self.factory {
            FactoryModel::Class(model) => Some(model),
            _ => None
        }
    }

    /// Interface factory, if the type was an interface.
    pub fn as_interface(&self) -> Option<&InterfaceFactoryModel> {
        match &self.factory {
            FactoryModel::Interface(model) => Some(model),
            _ => None
        }
    }

    /// Static factory, if the type was a static class.
    pub fn as_static(&self) -> Option<&StaticFactoryModel> {
        match &self.factory {
            FactoryModel::Static(model) => Some(model),
            _ => None
        }
    }

    /// Serialize for an out-of-process renderer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
