// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Input contract: described types.
//!
//! The front end (syntax extraction, out of scope here) hands the builder a
//! clean structural model of each factory candidate. The builder performs no
//! syntax inspection of its own.
//!
//! # Structure
//!
//! ```text
//! TypeDescription
//! ├── name, namespace, kind (Class | Interface | StaticClass)
//! ├── is_partial, service_type_name, implementation_type_name
//! ├── is_record, primary_constructor_parameters, ordinal_properties
//! ├── usings, mode, location
//! └── members: Vec<MemberDescription>
//!     ├── name, kind (Create | Fetch | Insert | Update | Delete | Execute | Event | None)
//!     ├── return_type, is_remote, is_task, is_bool, is_nullable
//!     ├── is_constructor, is_static_factory, location
//!     ├── parameters: Vec<ParameterDescription>
//!     │   └── name, ty, is_service | is_target | is_cancellation_token | is_params
//!     └── authorization: AuthorizationRequirements
//!         ├── checks: Vec<AuthorizationCheck>
//!         └── framework: Vec<FrameworkAuthorize>
//! ```
//!
//! An upsert shorthand (one body carrying both Insert and Update) is
//! expected to arrive as two members with identical parameters and
//! different kinds.

mod authorization;
mod location;
mod member;
mod parameter;
mod type_desc;

pub use authorization::{
    AuthorizationCheck, AuthorizationRequirements, FrameworkAuthorize, NamedArgument
};
pub use location::SourceLocation;
pub use member::{MemberDescription, OperationKind};
pub use parameter::{ParameterDescription, ParameterRole};
pub use type_desc::{OrdinalProperty, TypeDescription, TypeKind};
