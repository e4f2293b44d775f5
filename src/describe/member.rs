// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Member descriptions.

use serde::{Deserialize, Serialize};

use super::{
    AuthorizationCheck, AuthorizationRequirements, FrameworkAuthorize, ParameterDescription,
    SourceLocation
};

/// Lifecycle role of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Produces a new instance.
    Create,

    /// Loads an existing instance.
    Fetch,

    /// Persists a new instance.
    Insert,

    /// Persists changes to an existing instance.
    Update,

    /// Removes an instance.
    Delete,

    /// Standalone remote command on a static class.
    Execute,

    /// Fire-and-forget event handler.
    Event,

    /// Not a factory operation.
    #[default]
    None
}

impl OperationKind {
    /// Create or Fetch.
    pub fn is_read(self) -> bool {
        matches!(self, Self::Create | Self::Fetch)
    }

    /// Insert, Update, or Delete.
    pub fn is_write(self) -> bool {
        matches!(self, Self::Insert | Self::Update | Self::Delete)
    }

    /// Priority when picking the primary method of a save group.
    ///
    /// Delete routes first, then Update, then Insert. Non-write kinds
    /// have no priority.
    pub fn save_priority(self) -> u8 {
        match self {
            Self::Delete => 3,
            Self::Update => 2,
            Self::Insert => 1,
            _ => 0
        }
    }

    /// The operation word as it appears in member names.
    pub fn word(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Fetch => "Fetch",
            Self::Insert => "Insert",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::Execute => "Execute",
            Self::Event => "Event",
            Self::None => ""
        }
    }
}

/// A member as extracted by the front end.
///
/// # Example
///
/// ```rust
/// use factory_gen::describe::{MemberDescription, OperationKind, ParameterDescription};
///
/// let fetch = MemberDescription::new("Fetch", OperationKind::Fetch)
///     .with_parameter(ParameterDescription::value("id", "i32"))
///     .with_parameter(ParameterDescription::service("repo", "OrderRepository"))
///     .task();
/// assert_eq!(fetch.parameters.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberDescription {
    /// Declared member name.
    pub name: String,

    /// Declared operation.
    pub kind: OperationKind,

    /// Declared return type as written.
    #[serde(default = "void")]
    pub return_type: String,

    /// Marked as crossing the process boundary.
    pub is_remote: bool,

    /// Returns an awaitable.
    pub is_task: bool,

    /// Returns a boolean (a `false` Fetch means "not found").
    pub is_bool: bool,

    /// Declares a nullable return.
    pub is_nullable: bool,

    /// A constructor rather than a method.
    pub is_constructor: bool,

    /// A static method producing the instance.
    pub is_static_factory: bool,

    /// Parameters in declaration order.
    pub parameters: Vec<ParameterDescription>,

    /// Attached authorization.
    pub authorization: AuthorizationRequirements,

    /// Where the member is declared.
    pub location: SourceLocation
}

fn void() -> String {
    "void".to_string()
}

impl MemberDescription {
    /// Member returning `void` with no parameters.
    pub fn new(name: impl Into<String>, kind: OperationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            return_type: void(),
            ..Self::default()
        }
    }

    /// Add a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterDescription) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the declared return type.
    #[must_use]
    pub fn returning(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    /// Mark as remote.
    #[must_use]
    pub fn remote(mut self) -> Self {
        self.is_remote = true;
        self
    }

    /// Mark as returning an awaitable.
    #[must_use]
    pub fn task(mut self) -> Self {
        self.is_task = true;
        self
    }

    /// Mark as returning a boolean.
    #[must_use]
    pub fn boolean(mut self) -> Self {
        self.is_bool = true;
        self
    }

    /// Mark as returning a nullable value.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    /// Mark as a constructor.
    #[must_use]
    pub fn constructor(mut self) -> Self {
        self.is_constructor = true;
        self
    }

    /// Mark as a static factory method.
    #[must_use]
    pub fn static_factory(mut self) -> Self {
        self.is_static_factory = true;
        self
    }

    /// Attach an authorization check.
    #[must_use]
    pub fn with_check(mut self, check: AuthorizationCheck) -> Self {
        self.authorization.checks.push(check);
        self
    }

    /// Attach a framework authorize annotation.
    #[must_use]
    pub fn with_framework_authorize(mut self, annotation: FrameworkAuthorize) -> Self {
        self.authorization.framework.push(annotation);
        self
    }

    /// Set the declaration location.
    #[must_use]
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// Whether a cancellation token parameter is declared.
    pub fn has_cancellation(&self) -> bool {
        self.parameters.iter().any(|p| p.is_cancellation_token)
    }
}
