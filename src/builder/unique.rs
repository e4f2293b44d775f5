// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Collision-free public names.
//!
//! Overloads are only distinguishable by signature, but every emitted
//! member needs its own name. Methods are visited by ascending caller
//! parameter count (declaration order breaks ties); the first to claim a
//! name keeps it, later ones get the smallest free numeric suffix.
//!
//! ```text
//! Fetch(i32, String)  ─┐             Fetch(i32, String) → Fetch2
//! Fetch()              ├─ visit ──►  Fetch()            → Fetch
//! Fetch(i32)          ─┘             Fetch(i32)         → Fetch1
//! ```
//!
//! The output keeps the input order. Names are always derived from the
//! declared name, so resolving an already-resolved list is a no-op.

use std::collections::HashSet;

use tracing::debug;

use crate::model::MethodShape;

/// Smallest name not in `used`: `base`, else `base1`, `base2`, ...
fn claim(base: &str, used: &mut HashSet<String>) -> String {
    let name = if used.contains(base) {
        (1..)
            .map(|n| format!("{base}{n}"))
            .find(|candidate| !used.contains(candidate))
            .unwrap_or_else(|| base.to_string())
    } else {
        base.to_string()
    };
    used.insert(name.clone());
    name
}

/// Assign unique names to a list of method models.
pub fn resolve<M: MethodShape>(methods: Vec<M>) -> Vec<M> {
    let mut order: Vec<usize> = (0..methods.len()).collect();
    order.sort_by_key(|&i| methods[i].signature().caller_parameter_count());

    let mut used = HashSet::with_capacity(methods.len());
    let mut names = vec![String::new(); methods.len()];
    for i in order {
        names[i] = claim(methods[i].name(), &mut used);
    }

    methods
        .into_iter()
        .zip(names)
        .map(|(method, unique)| {
            if unique != method.unique_name() {
                debug!(name = method.name(), unique = %unique, "renamed");
            }
            method.with_unique_name(unique)
        })
        .collect()
}

/// Unique names for plain strings, first come first served.
pub fn resolve_names<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>
{
    let mut used = HashSet::new();
    names
        .into_iter()
        .map(|name| claim(name, &mut used))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        describe::ParameterDescription,
        model::{CanMethod, MethodSignature, ParameterModel}
    };

    fn method(name: &str, arity: usize) -> CanMethod {
        let mut signature = MethodSignature::new(name, "Authorized");
        signature.parameters = (0..arity)
            .map(|i| ParameterModel::from(&ParameterDescription::value(format!("p{i}"), "i32")))
            .collect();
        CanMethod {
            signature,
            guards: String::new()
        }
    }

    fn unique(methods: &[CanMethod]) -> Vec<&str> {
        methods.iter().map(MethodShape::unique_name).collect()
    }

    #[test]
    fn distinct_names_are_untouched() {
        let resolved = resolve(vec![method("Fetch", 1), method("Create", 0)]);
        assert_eq!(unique(&resolved), vec!["Fetch", "Create"]);
    }

    #[test]
    fn fewer_parameters_win_the_bare_name() {
        let resolved = resolve(vec![method("Fetch", 2), method("Fetch", 0), method("Fetch", 1)]);
        assert_eq!(unique(&resolved), vec!["Fetch2", "Fetch", "Fetch1"]);
    }

    #[test]
    fn ties_keep_declaration_order() {
        let resolved = resolve(vec![method("Fetch", 1), method("Fetch", 1)]);
        assert_eq!(unique(&resolved), vec!["Fetch", "Fetch1"]);
    }

    #[test]
    fn suffix_skips_declared_names() {
        let resolved = resolve(vec![method("Fetch1", 0), method("Fetch", 0), method("Fetch", 1)]);
        assert_eq!(unique(&resolved), vec!["Fetch1", "Fetch", "Fetch2"]);
    }

    #[test]
    fn resolving_twice_changes_nothing() {
        let once = resolve(vec![method("Fetch", 1), method("Fetch", 0)]);
        let twice = resolve(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn plain_names_resolve_in_order() {
        let names = resolve_names(["DoneEvent", "DoneEvent", "Other"]);
        assert_eq!(names, vec!["DoneEvent", "DoneEvent1", "Other"]);
    }
}
