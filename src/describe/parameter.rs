// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parameter descriptions and roles.

use serde::{Deserialize, Serialize};

/// What a parameter is for at the call site.
///
/// | Role | Supplied by | In public signature |
/// |------|-------------|---------------------|
/// | `Value` | caller | yes |
/// | `Params` | caller (variadic) | yes |
/// | `Target` | caller (the instance being saved) | yes |
/// | `Service` | dependency container | no |
/// | `CancellationToken` | caller, threaded separately | no |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterRole {
    /// Plain caller-supplied value.
    #[default]
    Value,

    /// Resolved from the dependency container at invocation time.
    Service,

    /// The domain instance an operation acts on.
    Target,

    /// Cancellation signal.
    CancellationToken,

    /// Variadic trailing argument list.
    Params
}

impl ParameterRole {
    /// Whether the caller passes this parameter in the public signature.
    pub fn is_caller_supplied(self) -> bool {
        matches!(self, Self::Value | Self::Params | Self::Target)
    }

    /// Whether the parameter takes part in save grouping keys.
    ///
    /// Target, service, and cancellation parameters are infrastructure.
    pub fn is_grouping(self) -> bool {
        matches!(self, Self::Value | Self::Params)
    }
}

/// A parameter as extracted by the front end.
///
/// At most one role flag is set; [`TypeDescription::validate`] enforces it.
///
/// [`TypeDescription::validate`]: super::TypeDescription::validate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDescription {
    /// Declared parameter name.
    pub name: String,

    /// Semantic type name, opaque to the builder.
    pub ty: String,

    /// Resolved from the dependency container.
    pub is_service: bool,

    /// The instance an authorization check or operation acts on.
    pub is_target: bool,

    /// Cancellation token.
    pub is_cancellation_token: bool,

    /// Variadic argument list.
    pub is_params: bool
}

impl ParameterDescription {
    /// Plain value parameter.
    pub fn value(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Service parameter.
    pub fn service(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            is_service: true,
            ..Self::value(name, ty)
        }
    }

    /// Target parameter.
    pub fn target(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            is_target: true,
            ..Self::value(name, ty)
        }
    }

    /// Cancellation token parameter.
    pub fn cancellation(name: impl Into<String>) -> Self {
        Self {
            is_cancellation_token: true,
            ..Self::value(name, "CancellationToken")
        }
    }

    /// Variadic parameter.
    pub fn params(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            is_params: true,
            ..Self::value(name, ty)
        }
    }

    /// Number of role flags set.
    pub fn role_count(&self) -> usize {
        [
            self.is_service,
            self.is_target,
            self.is_cancellation_token,
            self.is_params
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }

    /// Role of this parameter.
    ///
    /// If several flags are set (an invalid description that skipped
    /// validation), target wins over service, service over cancellation,
    /// cancellation over params.
    pub fn role(&self) -> ParameterRole {
        if self.is_target {
            ParameterRole::Target
        } else if self.is_service {
            ParameterRole::Service
        } else if self.is_cancellation_token {
            ParameterRole::CancellationToken
        } else if self.is_params {
            ParameterRole::Params
        } else {
            ParameterRole::Value
        }
    }
}
