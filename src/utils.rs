// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for model building.
//!
//! This module contains helpers used across multiple builder stages.
//!
//! # Submodules
//!
//! - [`ident`]: Rust identifiers for generated members and delegates
//! - [`types`]: Type text normalization for signature comparison

pub mod ident;
pub mod types;
