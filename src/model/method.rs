// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated method models.
//!
//! Every variant carries a [`MethodSignature`] with the fields all methods
//! share, plus whatever only that variant needs:
//!
//! | Variant | Extra fields |
//! |---------|--------------|
//! | [`ReadMethod`] | operation, invocation |
//! | [`WriteMethod`] | operation |
//! | [`SaveMethod`] | insert/update/delete slots, `is_default` |
//! | [`CanMethod`] | guarded method |
//! | [`InterfaceMethod`] | operation |
//! | [`EventMethod`] | service parameters, delegate name, cancellation |
//! | [`ExecuteDelegate`] | service parameters, delegate name, cancellation |
//!
//! Models are never mutated in place. Renaming goes through
//! [`MethodShape::with_unique_name`], which consumes the model and returns
//! the renamed one.

use serde::{Deserialize, Serialize};
use syn::Ident;

use super::{AuthorizationModel, ParameterModel};
use crate::{
    describe::OperationKind,
    utils::ident::{pascal_ident, snake_ident}
};

/// Fields shared by every generated method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Name as declared (or synthesized).
    pub name: String,

    /// Collision-free public name.
    pub unique_name: String,

    /// Return type before async/nullable wrapping.
    pub return_type: String,

    /// Crosses the process boundary.
    pub is_remote: bool,

    /// Exposed as awaitable.
    pub is_task: bool,

    /// Body awaits something.
    pub is_async: bool,

    /// Result may be absent.
    pub is_nullable: bool,

    /// Parameters in call order.
    pub parameters: Vec<ParameterModel>,

    /// Attached authorization.
    pub authorization: Option<AuthorizationModel>,

    /// Position of the source member in the type description.
    ///
    /// `None` for synthesized methods.
    pub declaration_index: Option<usize>
}

impl MethodSignature {
    /// Signature whose unique name equals its name and with all flags off.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            unique_name: name.clone(),
            name,
            return_type: return_type.into(),
            is_remote: false,
            is_task: false,
            is_async: false,
            is_nullable: false,
            parameters: Vec::new(),
            authorization: None,
            declaration_index: None
        }
    }

    /// Whether authorization is attached.
    pub fn has_auth(&self) -> bool {
        self.authorization.is_some()
    }

    /// Parameters the caller passes.
    pub fn caller_parameters(&self) -> impl Iterator<Item = &ParameterModel> {
        self.parameters.iter().filter(|p| p.is_caller_supplied())
    }

    /// Number of parameters the caller passes.
    pub fn caller_parameter_count(&self) -> usize {
        self.caller_parameters().count()
    }
}

/// Uniform access to generated methods.
pub trait MethodShape: Sized {
    /// Shared fields.
    fn signature(&self) -> &MethodSignature;

    /// The same method under a new unique name.
    #[must_use]
    fn with_unique_name(self, unique_name: String) -> Self;

    /// Name as declared.
    fn name(&self) -> &str {
        &self.signature().name
    }

    /// Collision-free public name.
    fn unique_name(&self) -> &str {
        &self.signature().unique_name
    }

    /// Whether authorization is attached.
    fn has_auth(&self) -> bool {
        self.signature().has_auth()
    }

    /// Rust identifier for the emitted method.
    fn ident(&self) -> Ident {
        snake_ident(self.unique_name())
    }
}

macro_rules! method_shape {
    ($($model:ident),* $(,)?) => {
        $(
            impl MethodShape for $model {
                fn signature(&self) -> &MethodSignature {
                    &self.signature
                }

                fn with_unique_name(mut self, unique_name: String) -> Self {
                    self.signature.unique_name = unique_name;
                    self
                }
            }
        )*
    };
}

method_shape!(
    ReadMethod,
    WriteMethod,
    SaveMethod,
    CanMethod,
    InterfaceMethod,
    EventMethod,
    ExecuteDelegate
);

/// How a read method obtains its instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Invocation {
    /// Calls a constructor.
    Constructor,
    /// Calls a static factory method.
    StaticFactory,
    /// Resolves an instance, then calls the member on it.
    Instance
}

/// Create or Fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadMethod {
    /// Shared fields.
    pub signature:  MethodSignature,
    /// Create or Fetch.
    pub operation:  OperationKind,
    /// How the instance is obtained.
    pub invocation: Invocation
}

/// Insert, Update, or Delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WriteMethod {
    /// Shared fields. The first parameter is the target.
    pub signature: MethodSignature,
    /// Insert, Update, or Delete.
    pub operation: OperationKind
}

/// Where a save call goes for a given instance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveRoute<'a> {
    /// Deleted instance.
    Delete(&'a WriteMethod),
    /// New instance.
    Insert(&'a WriteMethod),
    /// Existing, changed instance.
    Update(&'a WriteMethod),
    /// No method handles this state.
    NotImplemented
}

/// Composite save over write methods sharing a parameter shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaveMethod {
    /// Shared fields. The first parameter is the target.
    pub signature:  MethodSignature,
    /// Insert member of the group.
    pub insert:     Option<WriteMethod>,
    /// Update member of the group.
    pub update:     Option<WriteMethod>,
    /// Delete member of the group.
    pub delete:     Option<WriteMethod>,
    /// The `Save(target)` entry point.
    pub is_default: bool
}

impl SaveMethod {
    /// Route for an instance state.
    ///
    /// Delete wins for a deleted instance and Insert for a new one, when
    /// the slot exists. Every other state falls through to Update. With no
    /// Update slot left to take it, the state routes to
    /// [`SaveRoute::NotImplemented`], which the renderer emits as an
    /// unconditional failure.
    ///
    /// ```rust
    /// # use factory_gen::model::{MethodSignature, SaveMethod, SaveRoute, WriteMethod};
    /// # use factory_gen::describe::OperationKind;
    /// let insert = WriteMethod {
    ///     signature: MethodSignature::new("Insert", "Order"),
    ///     operation: OperationKind::Insert
    /// };
    /// let save = SaveMethod {
    ///     signature:  MethodSignature::new("Save", "Order"),
    ///     insert:     Some(insert),
    ///     update:     None,
    ///     delete:     None,
    ///     is_default: true
    /// };
    /// assert!(matches!(save.route(true, false), SaveRoute::Insert(_)));
    /// assert!(matches!(save.route(true, true), SaveRoute::Insert(_)));
    /// assert_eq!(save.route(false, false), SaveRoute::NotImplemented);
    /// ```
    pub fn route(&self, is_new: bool, is_deleted: bool) -> SaveRoute<'_> {
        let deleted = self
            .delete
            .as_ref()
            .filter(|_| is_deleted)
            .map(SaveRoute::Delete);
        let inserted = self
            .insert
            .as_ref()
            .filter(|_| is_new)
            .map(SaveRoute::Insert);
        deleted
            .or(inserted)
            .or_else(|| self.update.as_ref().map(SaveRoute::Update))
            .unwrap_or(SaveRoute::NotImplemented)
    }

    /// Composed write methods, Insert, Update, Delete order.
    pub fn members(&self) -> impl Iterator<Item = &WriteMethod> {
        [&self.insert, &self.update, &self.delete]
            .into_iter()
            .flatten()
    }
}

/// Synthesized authorization query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanMethod {
    /// Shared fields.
    pub signature: MethodSignature,
    /// Unique name of the guarded method.
    pub guards:    String
}

/// Member of an interface factory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceMethod {
    /// Shared fields.
    pub signature: MethodSignature,
    /// Declared operation, `None` for plain interface members.
    pub operation: OperationKind
}

/// Event handler exposed as a delegate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventMethod {
    /// Shared fields; parameters hold the caller-visible values only.
    pub signature:          MethodSignature,
    /// Parameters resolved from the container at invocation time.
    pub service_parameters: Vec<ParameterModel>,
    /// Delegate type name.
    pub delegate_name:      String,
    /// The handler takes a cancellation token.
    pub has_cancellation:   bool
}

impl EventMethod {
    /// Rust identifier for the delegate type.
    pub fn delegate_ident(&self) -> Ident {
        pascal_ident(&self.delegate_name)
    }
}

/// Execute operation exposed as a delegate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecuteDelegate {
    /// Shared fields; parameters hold the caller-visible values only.
    pub signature:          MethodSignature,
    /// Parameters resolved from the container at invocation time.
    pub service_parameters: Vec<ParameterModel>,
    /// Delegate type name.
    pub delegate_name:      String,
    /// The member takes a cancellation token.
    pub has_cancellation:   bool
}

impl ExecuteDelegate {
    /// Rust identifier for the delegate type.
    pub fn delegate_ident(&self) -> Ident {
        pascal_ident(&self.delegate_name)
    }
}

/// Any generated method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum GeneratedMethodModel {
    /// Create or Fetch.
    Read(ReadMethod),
    /// Insert, Update, or Delete.
    Write(WriteMethod),
    /// Composite save.
    Save(SaveMethod),
    /// Authorization query.
    Can(CanMethod),
    /// Interface member.
    Interface(InterfaceMethod),
    /// Event delegate.
    Event(EventMethod),
    /// Execute delegate.
    Execute(ExecuteDelegate)
}

impl GeneratedMethodModel {
    /// The save model, if this is one.
    pub fn as_save(&self) -> Option<&SaveMethod> {
        match self {
            Self::Save(save) => Some(save),
            _ => None
        }
    }

    /// The write model, if this is one.
    pub fn as_write(&self) -> Option<&WriteMethod> {
        match self {
            Self::Write(write) => Some(write),
            _ => None
        }
    }

    /// The read model, if this is one.
    pub fn as_read(&self) -> Option<&ReadMethod> {
        match self {
            Self::Read(read) => Some(read),
            _ => None
        }
    }

    /// The can model, if this is one.
    pub fn as_can(&self) -> Option<&CanMethod> {
        match self {
            Self::Can(can) => Some(can),
            _ => None
        }
    }
}

impl MethodShape for GeneratedMethodModel {
    fn signature(&self) -> &MethodSignature {
        match self {
            Self::Read(m) => m.signature(),
            Self::Write(m) => m.signature(),
            Self::Save(m) => m.signature(),
            Self::Can(m) => m.signature(),
            Self::Interface(m) => m.signature(),
            Self::Event(m) => m.signature(),
            Self::Execute(m) => m.signature()
        }
    }

    fn with_unique_name(self, unique_name: String) -> Self {
        match self {
            Self::Read(m) => Self::Read(m.with_unique_name(unique_name)),
            Self::Write(m) => Self::Write(m.with_unique_name(unique_name)),
            Self::Save(m) => Self::Save(m.with_unique_name(unique_name)),
            Self::Can(m) => Self::Can(m.with_unique_name(unique_name)),
            Self::Interface(m) => Self::Interface(m.with_unique_name(unique_name)),
            Self::Event(m) => Self::Event(m.with_unique_name(unique_name)),
            Self::Execute(m) => Self::Execute(m.with_unique_name(unique_name))
        }
    }
}
