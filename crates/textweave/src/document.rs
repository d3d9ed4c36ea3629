/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The document contract and the built-in leaf documents.
//!
//! A [`TextDocument`] describes how to produce a piece of text. Rendering is a
//! single recursive pass: each node computes its content (usually by rendering
//! its children), then applies the modifiers that were attached to it, in
//! attachment order. Wrapper nodes like [`Modified`] never apply modifiers
//! themselves; they prepend to the list and delegate, so the node that owns
//! the content decides when (and whether) the list runs. That is what lets
//! `ForEach`, `Joined`, and `Sequence` skip modifiers entirely for empty
//! input.
//!
//! Plain strings are documents. So are `Option`s of documents (`None` renders
//! nothing), references, and boxes. Custom documents are usually functions
//! returning `impl TextDocument`, or types that implement [`TextDocument`] by
//! delegating to a composition body:
//!
//! ```
//! use textweave::{Environment, Modifier, TextDocument};
//!
//! struct Shout {
//!     text: String,
//! }
//!
//! impl TextDocument for Shout {
//!     fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
//!         (self.text.as_str(), "!").render_with(env, modifiers)
//!     }
//! }
//!
//! let doc = Shout { text: "hey".into() };
//! assert_eq!(doc.render(), "hey!");
//! ```

use std::convert::Infallible;
use std::fmt;

use percent_encoding::AsciiSet;

use crate::environment::{Environment, EnvironmentKey, WithEnvironment};
use crate::modifier::{
    ConditionalModifier, ConditionallyModified, Indenting, Modified, Modifier, PercentEncoding,
    Prefix, Repeating, Suffix,
};

/// A composable description of textual content.
///
/// Implementors provide [`render_with`](TextDocument::render_with); everything
/// else is derived. The trait is dyn-compatible, so heterogeneous documents
/// can be stored behind [`AnyTextDocument`](crate::AnyTextDocument).
pub trait TextDocument {
    /// Render this document given the ambient environment and the modifiers
    /// externally attached to this node, in attachment order.
    ///
    /// Nodes that delegate to a child forward or extend `modifiers` rather
    /// than applying them; nodes that own content apply them after the
    /// content is computed (or skip them, for the empty-input containers).
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String;

    /// Render this document to a string in a fresh root environment.
    fn render(&self) -> String {
        self.render_with(&Environment::new(), &[])
    }

    /// Render this document under an existing environment.
    fn render_in(&self, env: &Environment) -> String {
        self.render_with(env, &[])
    }

    /// An adapter implementing [`std::fmt::Display`] by rendering, so a
    /// document can be embedded directly in `format!`/`write!`.
    fn display(&self) -> Rendered<'_, Self>
    where
        Self: Sized,
    {
        Rendered(self)
    }

    /// Attach a modifier to this document.
    ///
    /// Modifiers apply in attachment order after the document's own content
    /// is computed: `doc.modifier(a).modifier(b)` runs `a` first, then `b`.
    fn modifier<M>(self, modifier: M) -> Modified<Self, M>
    where
        Self: Sized,
        M: Modifier,
    {
        Modified::new(self, modifier)
    }

    /// Replace the rendered content with itself repeated `count` times.
    fn repeating(self, count: usize) -> Modified<Self, Repeating>
    where
        Self: Sized,
    {
        self.modifier(Repeating::new(count))
    }

    /// Prefix every line of the rendered content with `count` spaces.
    fn indent(self, count: usize) -> Modified<Self, Indenting>
    where
        Self: Sized,
    {
        self.modifier(Indenting::new(count))
    }

    /// Prepend the rendered text of `value`.
    fn prefix<D>(self, value: D) -> Modified<Self, Prefix<D>>
    where
        Self: Sized,
        D: TextDocument,
    {
        self.modifier(Prefix::new(value))
    }

    /// Append the rendered text of `value`.
    fn suffix<D>(self, value: D) -> Modified<Self, Suffix<D>>
    where
        Self: Sized,
        D: TextDocument,
    {
        self.modifier(Suffix::new(value))
    }

    /// Percent-encode the rendered content, escaping the bytes in `escapes`.
    fn percent_encoding(self, escapes: &'static AsciiSet) -> Modified<Self, PercentEncoding>
    where
        Self: Sized,
    {
        self.modifier(PercentEncoding::new(escapes))
    }

    /// Attach `modifier`, to be applied only when `condition` holds for the
    /// content it would transform.
    fn modifier_when<M, F>(
        self,
        modifier: M,
        condition: F,
    ) -> Modified<Self, ConditionalModifier<M, F>>
    where
        Self: Sized,
        M: Modifier,
        F: Fn(&str) -> bool,
    {
        self.modifier(ConditionalModifier::new(modifier, condition))
    }

    /// Gate every modifier attached from the outside on `condition`.
    ///
    /// Each incoming modifier is wrapped in a [`ConditionalModifier`] before
    /// it reaches this document's content.
    fn modifiable_when<F>(self, condition: F) -> ConditionallyModified<Self, F>
    where
        Self: Sized,
        F: Fn(&str) -> bool,
    {
        ConditionallyModified::new(self, condition)
    }

    /// Scope an environment value to the render of this document's subtree.
    fn environment<K>(self, value: K::Value) -> WithEnvironment<K, Self>
    where
        Self: Sized,
        K: EnvironmentKey,
    {
        WithEnvironment::new(value, self)
    }
}

/// The empty document. Renders nothing and swallows attached modifiers.
///
/// This is distinct from the empty *string*, which is a leaf and still has
/// its modifiers applied (`"".suffix("!")` renders `"!"`; `Empty.suffix("!")`
/// renders `""`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl TextDocument for Empty {
    fn render_with(&self, _env: &Environment, _modifiers: &[&dyn Modifier]) -> String {
        String::new()
    }
}

impl TextDocument for str {
    fn render_with(&self, _env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        let mut content = self.to_owned();
        for modifier in modifiers {
            modifier.modify(&mut content);
        }
        content
    }
}

impl TextDocument for String {
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        self.as_str().render_with(env, modifiers)
    }
}

impl<D> TextDocument for &D
where
    D: TextDocument + ?Sized,
{
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        (**self).render_with(env, modifiers)
    }
}

impl<D> TextDocument for Box<D>
where
    D: TextDocument + ?Sized,
{
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        (**self).render_with(env, modifiers)
    }
}

/// `None` behaves like [`Empty`]; `Some` is transparent, so modifiers
/// attached to the option reach the wrapped document's own policy.
impl<D> TextDocument for Option<D>
where
    D: TextDocument,
{
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        match self {
            Some(document) => document.render_with(env, modifiers),
            None => String::new(),
        }
    }
}

/// The non-renderable document. `Infallible` has no values, so this impl can
/// never actually run; it exists so generic code can name "a document that
/// never occurs" without a runtime panic behind it.
impl TextDocument for Infallible {
    fn render_with(&self, _env: &Environment, _modifiers: &[&dyn Modifier]) -> String {
        match *self {}
    }
}

/// Display adapter returned by [`TextDocument::display`].
#[derive(Clone, Copy)]
pub struct Rendered<'a, D>(&'a D);

impl<D> fmt::Display for Rendered<'_, D>
where
    D: TextDocument,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_renders_itself() {
        assert_eq!("hello".render(), "hello");
        assert_eq!(String::from("hello").render(), "hello");
    }

    #[test]
    fn test_leaf_applies_modifiers_in_attachment_order() {
        let doc = "core".prefix("<").suffix(">");
        assert_eq!(doc.render(), "<core>");
    }

    #[test]
    fn test_empty_leaf_still_applies_modifiers() {
        assert_eq!("".suffix("!").render(), "!");
        assert_eq!("".indent(4).render(), "    ");
    }

    #[test]
    fn test_empty_document_swallows_modifiers() {
        assert_eq!(Empty.render(), "");
        assert_eq!(Empty.suffix("!").render(), "");
    }

    #[test]
    fn test_option_none_renders_nothing() {
        let doc: Option<&str> = None;
        assert_eq!(doc.render(), "");
        assert_eq!(doc.suffix("!").render(), "");
    }

    #[test]
    fn test_option_some_is_transparent() {
        let doc = Some("value");
        assert_eq!(doc.suffix("!").render(), "value!");
    }

    #[test]
    fn test_display_adapter() {
        let doc = "item".prefix("- ");
        assert_eq!(format!("{}", doc.display()), "- item");
    }

    #[test]
    fn test_reference_and_box_forward() {
        let doc = "x".suffix("y");
        assert_eq!((&doc).render(), "xy");

        let boxed: Box<dyn TextDocument> = Box::new("z".repeating(2));
        assert_eq!(boxed.render(), "zz");
    }
}
