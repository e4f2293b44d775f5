// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Authorization requirements attached to a member.
//!
//! Two sources of authorization exist:
//!
//! - **Checks**: named methods on an authorization type that the factory
//!   calls before (or, with a target parameter, after) the operation.
//! - **Framework annotations**: host-level authorize attributes evaluated by
//!   middleware. They always force the call across the process boundary.

use serde::{Deserialize, Serialize};

use super::ParameterDescription;

/// A named authorization-check call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationCheck {
    /// Type declaring the check (e.g. `OrderAuth`).
    pub declaring_type: String,

    /// Check method name (e.g. `CanRead`).
    pub name: String,

    /// Parameters of the check method.
    pub parameters: Vec<ParameterDescription>,

    /// Check returns an awaitable.
    pub is_task: bool,

    /// Check itself must run remotely.
    pub is_remote: bool
}

impl AuthorizationCheck {
    /// Synchronous local check without parameters.
    pub fn new(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterDescription) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Mark as awaitable.
    #[must_use]
    pub fn task(mut self) -> Self {
        self.is_task = true;
        self
    }

    /// Mark as remote.
    #[must_use]
    pub fn remote(mut self) -> Self {
        self.is_remote = true;
        self
    }

    /// Whether the check needs the instance the operation acts on.
    pub fn has_target(&self) -> bool {
        self.parameters.iter().any(|p| p.is_target)
    }
}

/// `name = value` argument of a framework annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NamedArgument {
    /// Argument name (e.g. `Roles`).
    pub name:  String,
    /// Argument value as written.
    pub value: String
}

/// A framework-level authorize annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkAuthorize {
    /// Positional constructor arguments as written.
    pub constructor_arguments: Vec<String>,

    /// Named arguments in declaration order.
    pub named_arguments: Vec<NamedArgument>
}

impl FrameworkAuthorize {
    /// Annotation without arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotation with a policy name as its constructor argument.
    pub fn policy(policy: impl Into<String>) -> Self {
        Self {
            constructor_arguments: vec![policy.into()],
            named_arguments:       Vec::new()
        }
    }

    /// Add a named argument.
    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named_arguments.push(NamedArgument {
            name:  name.into(),
            value: value.into()
        });
        self
    }
}

/// All authorization attached to one member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationRequirements {
    /// Named checks in declaration order.
    pub checks: Vec<AuthorizationCheck>,

    /// Framework annotations in declaration order.
    pub framework: Vec<FrameworkAuthorize>
}

impl AuthorizationRequirements {
    /// Whether nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty() && self.framework.is_empty()
    }
}
