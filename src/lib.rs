// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - **Input**: [`describe`], what the front end extracted from a type
//! - **Output**: [`model`], what the renderer consumes
//! - **Entry points**: [`build`], [`build_json`], [`FactoryBuilder`]
//! - **Options**: [`BuildOptions`]
//!
//! # Pipeline Overview
//!
//! ```text
//! TypeDescription ──► FactoryBuilder::build ──► FactoryGenerationUnit
//!                          │
//!                          ├── Class       → reads, writes, saves, cans, events
//!                          ├── Interface   → remote members, cans
//!                          └── StaticClass → Execute and Event delegates
//! ```
//!
//! # Diagnostics
//!
//! | Code | Severity | Raised when |
//! |------|----------|-------------|
//! | `FG0001` | error | a static class with Execute/Event members is not partial |
//! | `FG0002` | error | an Execute member does not return an awaitable |
//! | `FG0003` | error | a save group stays ambiguous after postfix splitting |
//! | `FG0004` | warning | a record constructor parameter has no ordinal property |
//! | `FG0005` | warning | an Execute member is declared outside a static class |
//!
//! Diagnostics never abort a build. The offending member is left out and
//! everything else is generated.

mod builder;
pub mod config;
pub mod describe;
pub mod error;
pub mod model;
mod utils;

pub use builder::FactoryBuilder;
pub use config::{BuildOptions, FactoryMode};
pub use error::{Error, Result};

use describe::TypeDescription;
use model::FactoryGenerationUnit;

/// Build a generation unit with default options.
///
/// ```rust
/// use factory_gen::describe::{MemberDescription, OperationKind, TypeDescription};
///
/// let ty = TypeDescription::class("Order", "Shop")
///     .with_member(MemberDescription::new("Fetch", OperationKind::Fetch));
/// let unit = factory_gen::build(&ty);
/// assert_eq!(unit.hint_name, "Shop.OrderFactory");
/// ```
pub fn build(ty: &TypeDescription) -> FactoryGenerationUnit {
    FactoryBuilder::default().build(ty)
}

/// Build from a JSON description and return the unit as JSON.
///
/// For pipelines where extraction and rendering run out of process. The
/// description is validated before building.
///
/// # Errors
///
/// Returns an error if the input is not a valid description.
pub fn build_json(json: &str, options: &BuildOptions) -> Result<String> {
    let ty = TypeDescription::from_json(json)?;
    FactoryBuilder::new(options.clone()).build(&ty).to_json()
}
