// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Diagnostics attached to generation units.
//!
//! # Catalogue
//!
//! | Code | Severity | Raised when |
//! |------|----------|-------------|
//! | `FG0001` | error | a static class with Execute/Event members is not partial |
//! | `FG0002` | error | an Execute member does not return an awaitable |
//! | `FG0003` | error | a save group stays ambiguous after postfix splitting |
//! | `FG0004` | warning | a record constructor parameter has no ordinal property |
//! | `FG0005` | warning | an Execute member is declared outside a static class |

use std::fmt;

use proc_macro2::{Span, TokenStream};
use serde::{Deserialize, Serialize};

use crate::describe::SourceLocation;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The emitted code will not compile or is missing a member.
    Error,
    /// Generation degraded but consistent.
    Warning
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning")
        }
    }
}

/// Stable diagnostic identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticId {
    /// Static class with delegate members is not partial.
    #[serde(rename = "FG0001")]
    NonPartialStaticClass,

    /// Execute member without an awaitable return.
    #[serde(rename = "FG0002")]
    ExecuteNotAwaitable,

    /// Save group with two members of one kind after postfix splitting.
    #[serde(rename = "FG0003")]
    AmbiguousSaveGroup,

    /// Record constructor parameter without an ordinal property.
    #[serde(rename = "FG0004")]
    RecordOrdinalMismatch,

    /// Execute member outside a static class.
    #[serde(rename = "FG0005")]
    ExecuteOutsideStaticClass
}

impl DiagnosticId {
    /// Stable code, e.g. `FG0002`.
    pub fn code(self) -> &'static str {
        match self {
            Self::NonPartialStaticClass => "FG0001",
            Self::ExecuteNotAwaitable => "FG0002",
            Self::AmbiguousSaveGroup => "FG0003",
            Self::RecordOrdinalMismatch => "FG0004",
            Self::ExecuteOutsideStaticClass => "FG0005"
        }
    }

    /// Default severity.
    pub fn severity(self) -> Severity {
        match self {
            Self::RecordOrdinalMismatch | Self::ExecuteOutsideStaticClass => Severity::Warning,
            _ => Severity::Error
        }
    }
}

impl fmt::Display for DiagnosticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A diagnostic pointing at a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable identifier.
    pub id:       DiagnosticId,
    /// Severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message:  String,
    /// Offending declaration.
    pub location: SourceLocation
}

impl Diagnostic {
    /// Diagnostic with the identifier's default severity.
    pub fn new(id: DiagnosticId, message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            id,
            severity: id.severity(),
            message: message.into(),
            location
        }
    }

    /// Whether this is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `compile_error!` invocation carrying this diagnostic.
    ///
    /// The host compiler reports it like any other macro error.
    pub fn to_compile_error(&self) -> TokenStream {
        syn::Error::new(Span::call_site(), self.to_string()).to_compile_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.id, self.message, self.location)
    }
}
