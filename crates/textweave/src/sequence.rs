/*
 * sequence.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Ordered concatenation of heterogeneous documents.
//!
//! [`Sequence`] holds any number of erased children and renders their
//! concatenation, in order, with no injected separator. The [`doc!`] macro is
//! the usual way to build one; tuples of documents (up to arity 12) render
//! the same way without erasure, which keeps borrowed content usable in
//! composition bodies.
//!
//! A sequence whose concatenated result is empty returns `""` without
//! applying its attached modifiers, matching the empty-input bypass of
//! `ForEach` and `Joined`.

use crate::any::AnyTextDocument;
use crate::document::TextDocument;
use crate::environment::Environment;
use crate::modifier::Modifier;

/// Build a [`Sequence`] document from any number of heterogeneous documents.
///
/// `doc!()` with no arguments is the [`Empty`](crate::Empty) document.
///
/// ```
/// use textweave::{TextDocument, doc};
///
/// let greeting = doc!("Hello", ", ", "world".suffix("!"));
/// assert_eq!(greeting.render(), "Hello, world!");
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::Empty
    };
    ($($child:expr),+ $(,)?) => {
        $crate::Sequence::new($crate::docs![$($child),+])
    };
}

/// Build a `Vec<AnyTextDocument>` from any number of heterogeneous documents,
/// for [`Sequence::new`] and [`Joined::new`](crate::Joined::new).
#[macro_export]
macro_rules! docs {
    ($($child:expr),* $(,)?) => {
        ::std::vec![$($crate::AnyTextDocument::new($child)),*]
    };
}

/// An ordered list of erased documents, rendered as their concatenation.
#[derive(Debug, Default)]
pub struct Sequence {
    children: Vec<AnyTextDocument>,
}

impl Sequence {
    pub fn new(children: Vec<AnyTextDocument>) -> Self {
        Self { children }
    }

    /// Append a document to the sequence.
    pub fn push(&mut self, child: impl TextDocument + 'static) {
        self.children.push(AnyTextDocument::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl FromIterator<AnyTextDocument> for Sequence {
    fn from_iter<I: IntoIterator<Item = AnyTextDocument>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl TextDocument for Sequence {
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        let mut content = String::new();
        for child in &self.children {
            content.push_str(&child.render_with(env, &[]));
        }
        if content.is_empty() {
            tracing::trace!("sequence rendered empty; skipping modifiers");
            return content;
        }
        for modifier in modifiers {
            modifier.modify(&mut content);
        }
        content
    }
}

/// The unit document renders nothing, like [`Empty`](crate::Empty).
impl TextDocument for () {
    fn render_with(&self, _env: &Environment, _modifiers: &[&dyn Modifier]) -> String {
        String::new()
    }
}

macro_rules! impl_tuple_document {
    ($($field:ident),+) => {
        impl<$($field,)+> TextDocument for ($($field,)+)
        where
            $($field: TextDocument,)+
        {
            fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
                #[allow(non_snake_case)]
                let ($($field,)+) = self;
                let mut content = String::new();
                $(content.push_str(&$field.render_with(env, &[]));)+
                if content.is_empty() {
                    return content;
                }
                for modifier in modifiers {
                    modifier.modify(&mut content);
                }
                content
            }
        }
    };
}

impl_tuple_document!(A);
impl_tuple_document!(A, B);
impl_tuple_document!(A, B, C);
impl_tuple_document!(A, B, C, D);
impl_tuple_document!(A, B, C, D, E);
impl_tuple_document!(A, B, C, D, E, F);
impl_tuple_document!(A, B, C, D, E, F, G);
impl_tuple_document!(A, B, C, D, E, F, G, H);
impl_tuple_document!(A, B, C, D, E, F, G, H, I);
impl_tuple_document!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_document!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_document!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Empty;

    #[test]
    fn test_sequence_concatenates_in_order() {
        let document = doc!("s1", "s2", "s3");
        assert_eq!(document.render(), "s1s2s3");
    }

    #[test]
    fn test_sequence_injects_no_separator() {
        let document = doc!("a", "b");
        assert_eq!(document.render(), "ab");
    }

    #[test]
    fn test_empty_sequence_macro_is_empty_document() {
        assert_eq!(doc!().render(), "");
    }

    #[test]
    fn test_heterogeneous_children() {
        let document = doc!("# ".repeating(2), String::from("title"), Empty);
        assert_eq!(document.render(), "# # title");
    }

    #[test]
    fn test_empty_concatenation_skips_modifiers() {
        let document = doc!(Empty, "", Empty).suffix("!");
        assert_eq!(document.render(), "");
    }

    #[test]
    fn test_non_empty_concatenation_applies_modifiers() {
        let document = doc!("a", "b").suffix("!");
        assert_eq!(document.render(), "ab!");
    }

    #[test]
    fn test_tuple_renders_like_sequence() {
        let document = ("a", "b".suffix("-"), "c");
        assert_eq!(document.render(), "ab-c");
    }

    #[test]
    fn test_empty_tuple_result_skips_modifiers() {
        let document = ("", Empty).suffix("!");
        assert_eq!(document.render(), "");
    }

    #[test]
    fn test_unit_renders_nothing() {
        assert_eq!(().render(), "");
        assert_eq!(().suffix("!").render(), "");
    }

    #[test]
    fn test_push_and_from_iter() {
        let mut sequence: Sequence = [AnyTextDocument::from("a"), AnyTextDocument::from("b")]
            .into_iter()
            .collect();
        sequence.push("c");
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.render(), "abc");
    }

    #[test]
    fn test_modifiers_on_tuple_apply_to_whole() {
        let document = ("line1\n", "line2").indent(2);
        assert_eq!(document.render(), "  line1\n  line2");
    }
}
