/*
 * joined.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Separator-joining with empty-element omission.

use crate::any::AnyTextDocument;
use crate::document::TextDocument;
use crate::environment::Environment;
use crate::modifier::Modifier;

/// Documents joined by a separator document.
///
/// The separator is itself a document and renders once, through its own full
/// pipeline (including its own modifiers), before the elements. With
/// omit-empty set (the default), elements that render empty contribute
/// nothing, not even a separator slot; the separator appears only between
/// two emitted elements, never leading or trailing. A fully empty result
/// short-circuits to `""` with the `Joined`'s own modifiers skipped.
pub struct Joined<S> {
    separator: S,
    omit_empty: bool,
    elements: Vec<AnyTextDocument>,
}

impl<S> Joined<S>
where
    S: TextDocument,
{
    /// Join erased elements; use the [`docs!`](crate::docs) macro for a
    /// heterogeneous list.
    pub fn new(separator: S, elements: Vec<AnyTextDocument>) -> Self {
        Self {
            separator,
            omit_empty: true,
            elements,
        }
    }

    /// Join a homogeneous sequence of documents.
    pub fn elements<I, D>(separator: S, elements: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: TextDocument + 'static,
    {
        Self {
            separator,
            omit_empty: true,
            elements: elements.into_iter().map(AnyTextDocument::new).collect(),
        }
    }

    /// Control whether empty-rendering elements are omitted (default true).
    /// When kept, an empty element still claims its separator slot.
    pub fn omitting_empty_elements(mut self, omit: bool) -> Self {
        self.omit_empty = omit;
        self
    }
}

impl<S> TextDocument for Joined<S>
where
    S: TextDocument,
{
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        let separator = self.separator.render_with(env, &[]);
        let mut content = String::new();
        let mut emitted = false;
        for element in &self.elements {
            let part = element.render_with(env, &[]);
            if self.omit_empty && part.is_empty() {
                continue;
            }
            if emitted {
                content.push_str(&separator);
            }
            content.push_str(&part);
            emitted = true;
        }
        if content.is_empty() {
            tracing::trace!("joined rendered empty; skipping modifiers");
            return content;
        }
        for modifier in modifiers {
            modifier.modify(&mut content);
        }
        content
    }
}
