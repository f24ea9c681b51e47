//! Translate capability.
//!
//! The core never implements translation: the host injects a
//! `translate(key) -> string` function and the bindings use it for any
//! user-facing default text. Without an injected capability, built-in
//! English fallbacks apply.

use std::rc::Rc;

/// Externally supplied translation function.
///
/// `Rc<dyn Fn>` so bindings can hold clones without ownership issues,
/// same pattern as event callbacks.
pub type Translate = Rc<dyn Fn(&str) -> String>;

/// Built-in English fallback for a text key.
pub fn default_text(key: &str) -> &'static str {
    match key {
        "input.error" => "Invalid value",
        "alert.error" => "Something went wrong",
        _ => "",
    }
}

/// Resolve a text key through the injected capability, falling back to the
/// built-in English string.
pub fn resolve_text(translate: Option<&Translate>, key: &str) -> String {
    match translate {
        Some(t) => t(key),
        None => default_text(key).to_string(),
    }
}
