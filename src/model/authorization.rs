// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Authorization attached to generated methods.
//!
//! An [`AuthorizationModel`] only exists when at least one check or
//! framework annotation is present, so `Option<AuthorizationModel>` being
//! `Some` is exactly "has authorization".

use serde::{Deserialize, Serialize};

use super::ParameterModel;
use crate::describe::{
    AuthorizationCheck, AuthorizationRequirements, FrameworkAuthorize, ParameterRole
};

/// A named authorization-check call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorizationCheckModel {
    /// Type declaring the check.
    pub declaring_type: String,
    /// Check method name.
    pub name:           String,
    /// Parameters of the check.
    pub parameters:     Vec<ParameterModel>,
    /// Check returns an awaitable.
    pub is_task:        bool,
    /// Check must run remotely.
    pub is_remote:      bool
}

impl AuthorizationCheckModel {
    /// Whether the check needs the instance the operation acts on.
    pub fn has_target(&self) -> bool {
        self.parameters
            .iter()
            .any(|p| p.role == ParameterRole::Target)
    }
}

impl From<&AuthorizationCheck> for AuthorizationCheckModel {
    fn from(check: &AuthorizationCheck) -> Self {
        Self {
            declaring_type: check.declaring_type.clone(),
            name:           check.name.clone(),
            parameters:     check.parameters.iter().map(ParameterModel::from).collect(),
            is_task:        check.is_task,
            is_remote:      check.is_remote
        }
    }
}

/// Non-empty authorization of a generated method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorizationModel {
    /// Checks in order of first appearance.
    pub checks:    Vec<AuthorizationCheckModel>,
    /// Framework annotations in order of first appearance.
    pub framework: Vec<FrameworkAuthorize>
}

impl AuthorizationModel {
    /// Model for a member's requirements, `None` when nothing is attached.
    pub fn from_requirements(requirements: &AuthorizationRequirements) -> Option<Self> {
        if requirements.is_empty() {
            return None;
        }
        Some(Self {
            checks:    requirements
                .checks
                .iter()
                .map(AuthorizationCheckModel::from)
                .collect(),
            framework: requirements.framework.clone()
        })
    }

    /// Union of several models, keeping first occurrences in order.
    ///
    /// Returns `None` when no model contributes anything.
    pub fn merge<'a, I>(models: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a AuthorizationModel>
    {
        let mut checks: Vec<AuthorizationCheckModel> = Vec::new();
        let mut framework: Vec<FrameworkAuthorize> = Vec::new();

        for model in models {
            for check in &model.checks {
                if !checks.contains(check) {
                    checks.push(check.clone());
                }
            }
            for annotation in &model.framework {
                if !framework.contains(annotation) {
                    framework.push(annotation.clone());
                }
            }
        }

        if checks.is_empty() && framework.is_empty() {
            None
        } else {
            Some(Self {
                checks,
                framework
            })
        }
    }

    /// Any framework annotation present.
    pub fn has_framework(&self) -> bool {
        !self.framework.is_empty()
    }

    /// Any check needs the target instance.
    pub fn has_target_check(&self) -> bool {
        self.checks.iter().any(AuthorizationCheckModel::has_target)
    }

    /// Any check is remote, or a framework annotation forces remoting.
    pub fn is_remote(&self) -> bool {
        self.checks.iter().any(|c| c.is_remote) || self.has_framework()
    }

    /// Any check is awaitable, or a framework annotation forces awaiting.
    pub fn is_task(&self) -> bool {
        self.checks.iter().any(|c| c.is_task) || self.has_framework()
    }

    /// Parameters a standalone `Can...` query needs.
    ///
    /// Union of every check's parameters by name, first occurrence wins,
    /// without target parameters.
    pub fn query_parameters(&self) -> Vec<ParameterModel> {
        let mut parameters: Vec<ParameterModel> = Vec::new();
        for parameter in self.checks.iter().flat_map(|c| c.parameters.iter()) {
            if parameter.role == ParameterRole::Target {
                continue;
            }
            if parameters.iter().all(|p| p.name != parameter.name) {
                parameters.push(parameter.clone());
            }
        }
        parameters
    }
}
