// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type text normalization.
//!
//! Parameter types arrive as opaque strings from the front end. Two
//! spellings of the same type (`Vec<i32>` and `Vec< i32 >`) must produce
//! the same grouping key, so types that parse as Rust types are keyed by
//! their token stream. Anything else (foreign syntax such as `int?`) is
//! keyed by its whitespace-collapsed text.

use quote::ToTokens;
use syn::Type;

/// Canonical text for comparing two type spellings.
pub fn type_key(raw: &str) -> String {
    let trimmed = raw.trim();
    match syn::parse_str::<Type>(trimmed) {
        Ok(ty) => ty.to_token_stream().to_string(),
        Err(_) => trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
