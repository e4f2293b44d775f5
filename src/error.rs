// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Boundary errors.
//!
//! Building a factory model never fails: structural problems in a described
//! type are reported as [`Diagnostic`](crate::model::Diagnostic)s on the
//! generation unit. The errors here cover the contract boundary only, i.e.
//! descriptions that cannot be read or that break the description
//! invariants before any building starts.

use thiserror::Error;

/// Errors raised while reading or validating a type description.
#[derive(Debug, Error)]
pub enum Error {
    /// The description is not valid JSON for the contract.
    #[error("malformed type description: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter has more than one role flag set.
    #[error("parameter `{parameter}` of `{member}` declares more than one role")]
    ConflictingRoles {
        /// Member declaring the parameter.
        member:    String,
        /// Offending parameter.
        parameter: String
    },

    /// A type, member, or parameter has an empty name.
    #[error("{what} has an empty name")]
    EmptyName {
        /// What was unnamed (e.g. "member 2 of `Order`").
        what: String
    }
}

/// Result alias for boundary operations.
pub type Result<T> = std::result::Result<T, Error>;
