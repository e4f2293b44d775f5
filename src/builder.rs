// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model building: one [`TypeDescription`] in, one
//! [`FactoryGenerationUnit`] out.
//!
//! # Architecture
//!
//! ```text
//! builder.rs (orchestrator)
//! ├── class.rs         → reads, writes, saves, cans, events, ordinal layout
//! ├── interface.rs     → remote members and cancellable cans
//! ├── static_class.rs  → Execute and Event delegates
//! │
//! ├── methods.rs       → per-member models and derived flags
//! ├── save.rs          → write grouping into composite saves
//! ├── can.rs           → authorization query synthesis
//! ├── unique.rs        → collision-free names
//! ├── diagnostics.rs   → structural rules
//! ├── ordinal.rs       → positional serialization layout
//! └── naming.rs        → name derivation
//! ```
//!
//! The builder holds no state between calls. Building the same description
//! twice gives equal units, and independent descriptions can be built on
//! as many threads as the host likes.

mod can;
mod class;
mod diagnostics;
mod interface;
mod methods;
mod naming;
mod ordinal;
mod save;
mod static_class;
mod unique;

use tracing::instrument;

use self::diagnostics::DiagnosticEmitter;
use crate::{
    config::BuildOptions,
    describe::{TypeDescription, TypeKind},
    model::{FactoryGenerationUnit, FactoryModel}
};

/// Builds generation units under a fixed set of options.
///
/// # Example
///
/// ```rust
/// use factory_gen::{
///     BuildOptions, FactoryBuilder,
///     describe::{MemberDescription, OperationKind, TypeDescription}
/// };
///
/// let order = TypeDescription::class("Order", "Shop")
///     .with_member(MemberDescription::new("Insert", OperationKind::Insert))
///     .with_member(MemberDescription::new("Update", OperationKind::Update));
///
/// let unit = FactoryBuilder::new(BuildOptions::default()).build(&order);
/// let class = unit.as_class().unwrap();
/// assert_eq!(class.factory_name, "OrderFactory");
/// assert!(class.default_save().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FactoryBuilder {
    options: BuildOptions
}

impl FactoryBuilder {
    /// Builder with the given options.
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options
        }
    }

    /// Options this builder applies.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build the unit for one described type.
    ///
    /// Never fails: structural problems are attached to the unit as
    /// diagnostics and the offending members are left out.
    #[instrument(skip_all, fields(ty = %ty.name, kind = ?ty.kind))]
    pub fn build(&self, ty: &TypeDescription) -> FactoryGenerationUnit {
        let mut emitter = DiagnosticEmitter::new();

        let factory = match ty.kind {
            TypeKind::Class => FactoryModel::Class(class::build(ty, &self.options, &mut emitter)),
            TypeKind::Interface => {
                FactoryModel::Interface(interface::build(ty, &self.options, &mut emitter))
            }
            TypeKind::StaticClass => {
                FactoryModel::Static(static_class::build(ty, &self.options, &mut emitter))
            }
        };

        FactoryGenerationUnit {
            namespace: ty.namespace.clone(),
            usings: self.usings(ty),
            mode: ty.mode.unwrap_or(self.options.mode),
            hint_name: naming::hint_name(&ty.namespace, &ty.name),
            diagnostics: emitter.into_diagnostics(),
            factory
        }
    }

    /// The type's usings, then configured ones, first occurrence wins.
    fn usings(&self, ty: &TypeDescription) -> Vec<String> {
        let mut usings: Vec<String> =
            Vec::with_capacity(ty.usings.len() + self.options.usings.len());
        for using in ty.usings.iter().chain(&self.options.usings) {
            if !usings.contains(using) {
                usings.push(using.clone());
            }
        }
        usings
    }
}

#[cfg(test)]
mod tests;
