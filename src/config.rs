// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Builder configuration.
//!
//! Options apply to every type passed through one [`FactoryBuilder`]
//! (the assembly-wide settings of a generator run). Every field has a
//! default, so partial configuration fragments deserialize:
//!
//! ```rust
//! use factory_gen::{BuildOptions, FactoryMode};
//!
//! let options: BuildOptions = serde_json::from_str(r#"{ "mode": "remote_only" }"#).unwrap();
//! assert_eq!(options.mode, FactoryMode::RemoteOnly);
//! assert!(options.synthesize_can_methods);
//! ```
//!
//! [`FactoryBuilder`]: crate::FactoryBuilder

use serde::{Deserialize, Serialize};

/// How much of a factory the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactoryMode {
    /// Local and remote paths; the build that hosts the server side.
    #[default]
    Full,

    /// Remote stubs only; the build that ships to clients.
    RemoteOnly
}

/// Options for a builder run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Mode used when a type carries no override.
    pub mode: FactoryMode,

    /// Usings appended to every unit after the type's own usings.
    pub usings: Vec<String>,

    /// Whether `Can...` query methods are synthesized for authorized methods.
    pub synthesize_can_methods: bool,

    /// Suffix appended to event delegate names.
    pub event_suffix: String
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            mode:                   FactoryMode::default(),
            usings:                 Vec::new(),
            synthesize_can_methods: true,
            event_suffix:           "Event".to_string()
        }
    }
}
