// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier helpers.
//!
//! Generated members keep their declared PascalCase names in the model;
//! the renderer emits Rust items, so each name also has a Rust spelling:
//!
//! | Model name | `snake_ident` | `pascal_ident` |
//! |------------|---------------|----------------|
//! | `CanAccess` | `can_access` | `CanAccess` |
//! | `Type` | `r#type` | `Type` |
//! | `order_placed` | `order_placed` | `OrderPlaced` |

use convert_case::{Case, Casing};
use proc_macro2::Span;
use syn::Ident;

/// Identifiers that cannot be written even as raw identifiers.
const NON_RAW: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Replace characters that are not valid in an identifier.
///
/// Leading digits get an underscore prefix; an empty name becomes `_unnamed`.
pub fn sanitize(name: &str) -> String {
    let mut s: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if s.is_empty() {
        return "_unnamed".to_string();
    }
    if s.starts_with(|c: char| c.is_ascii_digit()) {
        s.insert(0, '_');
    }
    s
}

/// Snake-case identifier for a method name.
///
/// Rust keywords come back as raw identifiers (`r#type`).
pub fn snake_ident(name: &str) -> Ident {
    to_ident(&sanitize(&name.to_case(Case::Snake)))
}

/// PascalCase identifier for a type or delegate name.
pub fn pascal_ident(name: &str) -> Ident {
    to_ident(&sanitize(&name.to_case(Case::Pascal)))
}

fn to_ident(text: &str) -> Ident {
    if NON_RAW.contains(&text) {
        return Ident::new(&format!("{text}_"), Span::call_site());
    }
    match syn::parse_str::<Ident>(text) {
        Ok(ident) => ident,
        Err(_) => Ident::new_raw(text, Span::call_site())
    }
}
