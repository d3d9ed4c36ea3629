/*
 * modifier.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Pure string modifiers and the wrapper nodes that carry them.
//!
//! A [`Modifier`] transforms already-rendered content in place. Modifiers are
//! attached to documents with the combinators on
//! [`TextDocument`](crate::TextDocument) and run in attachment order, exactly
//! once, after the node that owns the content has computed it.
//!
//! [`Modified`] is the node produced by attachment. It does not apply its
//! modifier itself: it prepends it to the incoming list and delegates, so the
//! innermost content-owning node controls application (and may skip it for
//! empty input).

use std::fmt;

use percent_encoding::{AsciiSet, utf8_percent_encode};

use crate::document::TextDocument;
use crate::environment::Environment;

/// A named, pure transformation of rendered content.
pub trait Modifier {
    /// Transform `content` in place.
    fn modify(&self, content: &mut String);
}

impl<M> Modifier for &M
where
    M: Modifier + ?Sized,
{
    fn modify(&self, content: &mut String) {
        (**self).modify(content)
    }
}

/// Replaces content with itself repeated a fixed number of times.
///
/// `Repeating::new(0)` erases the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeating {
    count: usize,
}

impl Repeating {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Modifier for Repeating {
    fn modify(&self, content: &mut String) {
        *content = content.repeat(self.count);
    }
}

/// Prefixes every line of the content with a fixed number of spaces.
///
/// Lines are split on `'\n'` preserving empty segments and rejoined with
/// `'\n'`, so the empty string indents to a single run of spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indenting {
    count: usize,
}

impl Indenting {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Modifier for Indenting {
    fn modify(&self, content: &mut String) {
        let pad = " ".repeat(self.count);
        *content = content
            .split('\n')
            .map(|line| format!("{pad}{line}"))
            .collect::<Vec<_>>()
            .join("\n");
    }
}

/// Prepends the rendered text of another document.
///
/// The prefix document renders independently, in a fresh root environment.
#[derive(Debug, Clone)]
pub struct Prefix<D> {
    value: D,
}

impl<D> Prefix<D>
where
    D: TextDocument,
{
    pub fn new(value: D) -> Self {
        Self { value }
    }
}

impl<D> Modifier for Prefix<D>
where
    D: TextDocument,
{
    fn modify(&self, content: &mut String) {
        content.insert_str(0, &self.value.render());
    }
}

/// Appends the rendered text of another document.
///
/// The suffix document renders independently, in a fresh root environment.
#[derive(Debug, Clone)]
pub struct Suffix<D> {
    value: D,
}

impl<D> Suffix<D>
where
    D: TextDocument,
{
    pub fn new(value: D) -> Self {
        Self { value }
    }
}

impl<D> Modifier for Suffix<D>
where
    D: TextDocument,
{
    fn modify(&self, content: &mut String) {
        content.push_str(&self.value.render());
    }
}

/// Percent-encodes content, escaping the bytes named by an
/// [`AsciiSet`]. Encoding over an `AsciiSet` is total; there is no failure
/// path.
#[derive(Clone, Copy)]
pub struct PercentEncoding {
    escapes: &'static AsciiSet,
}

impl PercentEncoding {
    pub fn new(escapes: &'static AsciiSet) -> Self {
        Self { escapes }
    }
}

impl Modifier for PercentEncoding {
    fn modify(&self, content: &mut String) {
        *content = utf8_percent_encode(content, self.escapes).to_string();
    }
}

impl fmt::Debug for PercentEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PercentEncoding").finish_non_exhaustive()
    }
}

/// Applies a base modifier only when a predicate over the current content
/// holds; otherwise leaves the content untouched.
#[derive(Clone)]
pub struct ConditionalModifier<M, F> {
    base: M,
    condition: F,
}

impl<M, F> ConditionalModifier<M, F>
where
    M: Modifier,
    F: Fn(&str) -> bool,
{
    pub fn new(base: M, condition: F) -> Self {
        Self { base, condition }
    }
}

impl<M, F> Modifier for ConditionalModifier<M, F>
where
    M: Modifier,
    F: Fn(&str) -> bool,
{
    fn modify(&self, content: &mut String) {
        if (self.condition)(content) {
            self.base.modify(content);
        }
    }
}

/// A document with a modifier attached.
///
/// Prepends its modifier to the incoming list and delegates, so modifiers
/// attached earlier end up closer to the content and run first.
#[derive(Debug, Clone)]
pub struct Modified<D, M> {
    content: D,
    modifier: M,
}

impl<D, M> Modified<D, M>
where
    D: TextDocument,
    M: Modifier,
{
    pub fn new(content: D, modifier: M) -> Self {
        Self { content, modifier }
    }
}

impl<D, M> TextDocument for Modified<D, M>
where
    D: TextDocument,
    M: Modifier,
{
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        let mut all: Vec<&dyn Modifier> = Vec::with_capacity(modifiers.len() + 1);
        all.push(&self.modifier);
        all.extend_from_slice(modifiers);
        self.content.render_with(env, &all)
    }
}

/// A document whose externally attached modifiers only fire when a predicate
/// over its rendered content holds.
///
/// Every incoming modifier is wrapped in a [`ConditionalModifier`] before it
/// reaches the content, so the content node's own application policy (and
/// empty-input bypass) still applies.
#[derive(Clone)]
pub struct ConditionallyModified<D, F> {
    content: D,
    condition: F,
}

impl<D, F> ConditionallyModified<D, F>
where
    D: TextDocument,
    F: Fn(&str) -> bool,
{
    pub fn new(content: D, condition: F) -> Self {
        Self { content, condition }
    }
}

impl<D, F> TextDocument for ConditionallyModified<D, F>
where
    D: TextDocument,
    F: Fn(&str) -> bool,
{
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        let wrapped: Vec<ConditionalModifier<&dyn Modifier, &F>> = modifiers
            .iter()
            .map(|modifier| ConditionalModifier::new(*modifier, &self.condition))
            .collect();
        let refs: Vec<&dyn Modifier> = wrapped
            .iter()
            .map(|modifier| modifier as &dyn Modifier)
            .collect();
        self.content.render_with(env, &refs)
    }
}

#[cfg(test)]
mod tests {
    use percent_encoding::{CONTROLS, NON_ALPHANUMERIC};

    use super::*;

    #[test]
    fn test_repeating() {
        assert_eq!("ab".repeating(3).render(), "ababab");
        assert_eq!("ab".repeating(0).render(), "");
        assert_eq!("ab".repeating(1).render(), "ab");
    }

    #[test]
    fn test_indenting_multiline() {
        assert_eq!(
            "line1\nline2".indent(4).render(),
            "    line1\n    line2"
        );
    }

    #[test]
    fn test_indenting_preserves_empty_lines() {
        assert_eq!("a\n\nb".indent(2).render(), "  a\n  \n  b");
    }

    #[test]
    fn test_indenting_empty_content() {
        assert_eq!("".indent(4).render(), "    ");
    }

    #[test]
    fn test_prefix_then_suffix_is_fifo() {
        // Prefix runs first on "core", then Suffix on its output.
        let doc = "core".prefix("X").suffix("Y");
        assert_eq!(doc.render(), "XcoreY");
    }

    #[test]
    fn test_suffix_then_prefix_is_fifo() {
        let doc = "core".suffix("Y").prefix("X");
        assert_eq!(doc.render(), "XcoreY");
    }

    #[test]
    fn test_prefix_value_is_a_document() {
        let doc = "b".prefix("a".repeating(2));
        assert_eq!(doc.render(), "aab");
    }

    #[test]
    fn test_percent_encoding() {
        let doc = "a b/c".percent_encoding(NON_ALPHANUMERIC);
        assert_eq!(doc.render(), "a%20b%2Fc");
    }

    #[test]
    fn test_percent_encoding_passthrough() {
        let doc = "plain".percent_encoding(NON_ALPHANUMERIC);
        assert_eq!(doc.render(), "plain");
    }

    #[test]
    fn test_percent_encoding_respects_escape_set() {
        // CONTROLS escapes control bytes only; the space passes through.
        let doc = "a b\n".percent_encoding(CONTROLS);
        assert_eq!(doc.render(), "a b%0A");
    }

    #[test]
    fn test_modifier_attaches_any_modifier() {
        assert_eq!("x".modifier(Repeating::new(3)).render(), "xxx");
    }

    #[test]
    fn test_conditional_modifier_fires() {
        let doc = "content".modifier_when(Suffix::new("!"), |content| !content.is_empty());
        assert_eq!(doc.render(), "content!");
    }

    #[test]
    fn test_conditional_modifier_skips() {
        let doc = "".modifier_when(Suffix::new("!"), |content| !content.is_empty());
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn test_modifiable_when_gates_external_modifiers() {
        // The suffix is attached outside the gate, so it is wrapped and
        // suppressed when the content is empty.
        let gated = "".modifiable_when(|content| !content.is_empty());
        assert_eq!(gated.suffix("!").render(), "");

        let gated = "text".modifiable_when(|content| !content.is_empty());
        assert_eq!(gated.suffix("!").render(), "text!");
    }

    #[test]
    fn test_modifiable_when_wraps_every_incoming_modifier() {
        let gated = "".modifiable_when(|content| !content.is_empty());
        assert_eq!(gated.prefix("<").suffix(">").render(), "");
    }
}
