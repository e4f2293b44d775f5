// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Name derivation for generated members and units.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `InsertViaBulkLoader` (Insert) | [`name_postfix`] | `ViaBulkLoader` |
//! | `ViaBulkLoader` | [`save_name`] | `SaveViaBulkLoader` |
//! | `Access` | [`can_name`] | `CanAccess` |
//! | `_OnOrderPlaced` | [`event_delegate_name`] | `OrderPlacedEvent` |
//! | `_ExecuteRebuild` | [`execute_delegate_name`] | `Rebuild` |
//! | `Shop` / `Order` | [`hint_name`] | `Shop.OrderFactory` |

use crate::{describe::OperationKind, utils::ident::sanitize};

/// Strip `word` from the front of `name` at a word boundary.
///
/// A boundary is the end of the name, an uppercase letter, a digit, or an
/// underscore (which is dropped). `Online` keeps its `On`; `OnPlaced` and
/// `On_Placed` lose it. A name equal to `word` is kept whole.
pub fn strip_word<'a>(name: &'a str, word: &str) -> &'a str {
    match name.strip_prefix(word) {
        Some(rest)
            if rest.starts_with(|c: char| c.is_uppercase() || c.is_ascii_digit() || c == '_') =>
        {
            rest.trim_start_matches('_')
        }
        _ => name
    }
}

/// Declared name without its operation word.
///
/// `Insert` gives an empty postfix; a name not starting with the operation
/// word is its own postfix.
pub fn name_postfix(name: &str, kind: OperationKind) -> &str {
    let base = name.trim_start_matches('_');
    if base == kind.word() {
        return "";
    }
    strip_word(base, kind.word())
}

/// Composite save name for a postfix.
pub fn save_name(postfix: &str) -> String {
    format!("Save{postfix}")
}

/// Authorization query name for a method.
pub fn can_name(method: &str) -> String {
    format!("Can{method}")
}

/// Delegate name of an event handler.
pub fn event_delegate_name(name: &str, suffix: &str) -> String {
    let base = strip_word(name.trim_start_matches('_'), "On");
    format!("{base}{suffix}")
}

/// Delegate name of an Execute member.
pub fn execute_delegate_name(name: &str) -> String {
    strip_word(name.trim_start_matches('_'), "Execute").to_string()
}

/// Factory type generated for a class.
pub fn factory_name(type_name: &str) -> String {
    format!("{type_name}Factory")
}

/// Factory interface generated for a class.
pub fn factory_interface_name(type_name: &str) -> String {
    format!("I{type_name}Factory")
}

/// Factory type implementing an interface.
///
/// The conventional `I` prefix is dropped: `IOrderService` gives
/// `OrderServiceFactory`.
pub fn interface_factory_name(interface_name: &str) -> String {
    let base = match interface_name.strip_prefix('I') {
        Some(rest) if rest.starts_with(char::is_uppercase) => rest,
        _ => interface_name
    };
    factory_name(base)
}

/// Stable identity of the emitted unit.
pub fn hint_name(namespace: &str, type_name: &str) -> String {
    let unit = sanitize(&factory_name(type_name));
    if namespace.is_empty() {
        return unit;
    }
    let namespace: Vec<String> = namespace.split('.').map(sanitize).collect();
    format!("{}.{unit}", namespace.join("."))
}
