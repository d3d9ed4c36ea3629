/*
 * any.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Type erasure for heterogeneous document storage.

use std::fmt;

use crate::document::TextDocument;
use crate::environment::Environment;
use crate::modifier::Modifier;

/// A document of erased concrete type.
///
/// Owns its wrapped document and forwards rendering (and the incoming
/// modifier list) unchanged, so erasure is observationally transparent.
pub struct AnyTextDocument {
    document: Box<dyn TextDocument>,
}

impl AnyTextDocument {
    pub fn new(document: impl TextDocument + 'static) -> Self {
        Self {
            document: Box::new(document),
        }
    }
}

impl TextDocument for AnyTextDocument {
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        self.document.render_with(env, modifiers)
    }
}

impl From<&str> for AnyTextDocument {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}

impl From<String> for AnyTextDocument {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for AnyTextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for AnyTextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyTextDocument").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erasure_is_transparent_to_modifiers() {
        let erased = AnyTextDocument::new("core".prefix("<"));
        assert_eq!(erased.suffix(">").render(), "<core>");
    }

    #[test]
    fn test_erased_empty_foreach_still_bypasses_modifiers() {
        let erased = AnyTextDocument::new(crate::ForEach::new(Vec::<String>::new(), |item| {
            item.clone()
        }));
        assert_eq!(erased.indent(4).render(), "");
    }

    #[test]
    fn test_from_str_and_display() {
        let doc = AnyTextDocument::from("plain");
        assert_eq!(format!("{doc}"), "plain");

        let doc = AnyTextDocument::from(String::from("owned"));
        assert_eq!(format!("{doc}"), "owned");
    }
}
