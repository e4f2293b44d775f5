// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parameters of generated methods.

use serde::{Deserialize, Serialize};
use syn::Ident;

use crate::{
    describe::{ParameterDescription, ParameterRole},
    utils::{ident::snake_ident, types::type_key}
};

/// Name given to the implicit target parameter of write and save methods.
pub const TARGET_PARAMETER: &str = "target";

/// A parameter of a generated method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterModel {
    /// Parameter name as declared.
    pub name:        String,
    /// Type as written.
    pub ty:          String,
    /// Call-site role.
    pub role:        ParameterRole,
    /// May be omitted by the caller.
    pub is_optional: bool
}

impl ParameterModel {
    /// Implicit target parameter of the given type.
    pub fn target(ty: impl Into<String>) -> Self {
        Self {
            name:        TARGET_PARAMETER.to_string(),
            ty:          ty.into(),
            role:        ParameterRole::Target,
            is_optional: false
        }
    }

    /// Optional trailing cancellation token.
    pub fn optional_cancellation() -> Self {
        Self {
            name:        "cancellation_token".to_string(),
            ty:          "CancellationToken".to_string(),
            role:        ParameterRole::CancellationToken,
            is_optional: true
        }
    }

    /// Key used to compare parameter types across methods.
    pub fn type_key(&self) -> String {
        type_key(&self.ty)
    }

    /// Whether the caller passes this parameter.
    pub fn is_caller_supplied(&self) -> bool {
        self.role.is_caller_supplied()
    }

    /// Rust identifier for the parameter.
    pub fn ident(&self) -> Ident {
        snake_ident(&self.name)
    }
}

impl From<&ParameterDescription> for ParameterModel {
    fn from(description: &ParameterDescription) -> Self {
        Self {
            name:        description.name.clone(),
            ty:          description.ty.clone(),
            role:        description.role(),
            is_optional: false
        }
    }
}
