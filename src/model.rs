// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output contract: generation models.
//!
//! The renderer (out of scope here) walks a [`FactoryGenerationUnit`] and
//! emits one public member per method model, using
//! [`MethodShape::unique_name`] (or [`MethodShape::ident`] for Rust output)
//! as the emitted name.
//!
//! # Structure
//!
//! ```text
//! FactoryGenerationUnit
//! ├── namespace, usings, mode, hint_name
//! ├── diagnostics: Vec<Diagnostic>
//! └── factory: FactoryModel
//!     ├── Class(ClassFactoryModel)
//!     │   ├── methods: Read | Write | Save | Can
//!     │   ├── events: Vec<EventMethod>
//!     │   └── ordinal: Option<OrdinalModel>
//!     ├── Interface(InterfaceFactoryModel)
//!     │   └── methods: Interface | Can
//!     └── Static(StaticFactoryModel)
//!         ├── execute_delegates: Vec<ExecuteDelegate>
//!         └── events: Vec<EventMethod>
//! ```

mod authorization;
mod diagnostic;
mod method;
mod parameter;
mod unit;

pub use authorization::{AuthorizationCheckModel, AuthorizationModel};
pub use diagnostic::{Diagnostic, DiagnosticId, Severity};
pub use method::{
    CanMethod, EventMethod, ExecuteDelegate, GeneratedMethodModel, InterfaceMethod, Invocation,
    MethodShape, MethodSignature, ReadMethod, SaveMethod, SaveRoute, WriteMethod
};
pub use parameter::{ParameterModel, TARGET_PARAMETER};
pub use unit::{
    ClassFactoryModel, FactoryGenerationUnit, FactoryModel, InterfaceFactoryModel, OrdinalModel,
    OrdinalPropertyModel, StaticFactoryModel
};

#[cfg(test)]
mod tests;
