// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type descriptions.

use serde::{Deserialize, Serialize};

use super::{MemberDescription, OperationKind, SourceLocation};
use crate::{
    config::FactoryMode,
    error::{Error, Result}
};

/// Shape of a described type, selecting the builder strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Domain class with Create/Fetch/Insert/Update/Delete members.
    #[default]
    Class,

    /// Interface whose every member is a remote call.
    Interface,

    /// Static class hosting Execute and Event members.
    StaticClass
}

/// A property serialized by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OrdinalProperty {
    /// Property name.
    pub name: String,
    /// Property type as written.
    pub ty:   String
}

/// A factory candidate as extracted by the front end.
///
/// Immutable once constructed; the builder reads it exactly once.
///
/// # Example
///
/// ```rust
/// use factory_gen::describe::{MemberDescription, OperationKind, TypeDescription, TypeKind};
///
/// let order = TypeDescription::class("Order", "Shop.Orders")
///     .with_member(MemberDescription::new("Create", OperationKind::Create).constructor())
///     .with_member(MemberDescription::new("Insert", OperationKind::Insert));
/// assert_eq!(order.kind, TypeKind::Class);
/// assert_eq!(order.service_type_name, "Order");
/// assert!(order.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeDescription {
    /// Type name.
    pub name: String,

    /// Declaring namespace, empty for the global namespace.
    pub namespace: String,

    /// Class, interface, or static class.
    pub kind: TypeKind,

    /// Declared `partial`.
    pub is_partial: bool,

    /// Type the factory exposes to callers.
    pub service_type_name: String,

    /// Concrete type the factory instantiates.
    pub implementation_type_name: String,

    /// Members in declaration order.
    pub members: Vec<MemberDescription>,

    /// Declared as a record.
    pub is_record: bool,

    /// Primary constructor parameter names of a record.
    pub primary_constructor_parameters: Vec<String>,

    /// Properties for compact positional serialization.
    pub ordinal_properties: Vec<OrdinalProperty>,

    /// Usings of the declaring file.
    pub usings: Vec<String>,

    /// Per-type override of the generation mode.
    pub mode: Option<FactoryMode>,

    /// Where the type is declared.
    pub location: SourceLocation
}

impl TypeDescription {
    fn with_kind(name: impl Into<String>, namespace: impl Into<String>, kind: TypeKind) -> Self {
        let name = name.into();
        Self {
            service_type_name: name.clone(),
            implementation_type_name: name.clone(),
            name,
            namespace: namespace.into(),
            kind,
            ..Self::default()
        }
    }

    /// Describe a class.
    pub fn class(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::with_kind(name, namespace, TypeKind::Class)
    }

    /// Describe an interface.
    pub fn interface(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::with_kind(name, namespace, TypeKind::Interface)
    }

    /// Describe a static class.
    pub fn static_class(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::with_kind(name, namespace, TypeKind::StaticClass)
    }

    /// Read a description from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let description: Self = serde_json::from_str(json)?;
        description.validate()?;
        Ok(description)
    }

    /// Mark as partial.
    #[must_use]
    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    /// Set the service-facing type name.
    #[must_use]
    pub fn serving(mut self, service_type_name: impl Into<String>) -> Self {
        self.service_type_name = service_type_name.into();
        self
    }

    /// Add a member.
    #[must_use]
    pub fn with_member(mut self, member: MemberDescription) -> Self {
        self.members.push(member);
        self
    }

    /// Add an ordinal property.
    #[must_use]
    pub fn with_ordinal(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.ordinal_properties.push(OrdinalProperty {
            name: name.into(),
            ty:   ty.into()
        });
        self
    }

    /// Mark as a record with the given primary constructor parameters.
    #[must_use]
    pub fn record<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.is_record = true;
        self.primary_constructor_parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Override the generation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: FactoryMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the declaration location.
    #[must_use]
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// Check the description invariants.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyName`] when the type, a member, or a parameter is unnamed
    /// - [`Error::ConflictingRoles`] when a parameter carries two role flags
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyName {
                what: "type".to_string()
            });
        }

        for (index, member) in self.members.iter().enumerate() {
            if member.name.trim().is_empty() {
                return Err(Error::EmptyName {
                    what: format!("member {index} of `{}`", self.name)
                });
            }
            let checked = member.parameters.iter().chain(
                member
                    .authorization
                    .checks
                    .iter()
                    .flat_map(|check| check.parameters.iter())
            );
            for parameter in checked {
                if parameter.name.trim().is_empty() {
                    return Err(Error::EmptyName {
                        what: format!("a parameter of `{}`", member.name)
                    });
                }
                if parameter.role_count() > 1 {
                    return Err(Error::ConflictingRoles {
                        member:    member.name.clone(),
                        parameter: parameter.name.clone()
                    });
                }
            }
        }

        Ok(())
    }

    /// Whether any member is an Execute or Event operation.
    pub fn has_delegate_members(&self) -> bool {
        self.members
            .iter()
            .any(|m| matches!(m.kind, OperationKind::Execute | OperationKind::Event))
    }
}
