// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source locations for diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Span of a declaration in a source file.
///
/// Lines and columns are 1-based, as build logs and IDEs print them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLocation {
    /// Path of the declaring file.
    pub file_path:  String,
    /// First line of the declaration.
    pub line:       u32,
    /// First column of the declaration.
    pub column:     u32,
    /// Last line of the declaration.
    pub end_line:   u32,
    /// Column after the declaration ends.
    pub end_column: u32
}

impl SourceLocation {
    /// Location covering a single line range starting at `line:column`.
    pub fn new(file_path: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            column,
            end_line: line,
            end_column: column
        }
    }

    /// Set the end of the span.
    #[must_use]
    pub fn to(mut self, end_line: u32, end_column: u32) -> Self {
        self.end_line = end_line;
        self.end_column = end_column;
        self
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path, self.line, self.column)
    }
}
