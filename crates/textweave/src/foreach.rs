/*
 * foreach.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Repetition over a collection.
//!
//! [`ForEach`] produces one document per element and renders their
//! concatenation in iteration order. Modifiers attached to the `ForEach`
//! itself are skipped when the collection is empty: indenting a block that
//! produced no items must not emit stray indentation. A non-empty collection
//! whose elements all render empty still applies them.
//!
//! The separator variants attach the separator as a [`Prefix`] modifier on
//! every element after the first, so it participates in the element
//! document's own modifier pipeline.

use crate::document::TextDocument;
use crate::environment::Environment;
use crate::modifier::Modifier;

/// One document per collection element, concatenated in order.
pub struct ForEach<T, F> {
    data: Vec<T>,
    separator: Option<String>,
    content: F,
}

impl<T, F> ForEach<T, F> {
    /// A document per element, no separator.
    pub fn new<I, D>(data: I, content: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> D,
        D: TextDocument,
    {
        Self {
            data: data.into_iter().collect(),
            separator: None,
            content,
        }
    }

    /// A document per element, with `separator` prefixed onto every element
    /// after the first.
    pub fn separated<I, D>(data: I, separator: impl Into<String>, content: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> D,
        D: TextDocument,
    {
        Self {
            data: data.into_iter().collect(),
            separator: Some(separator.into()),
            content,
        }
    }
}

impl<T, F> ForEach<(usize, T), F> {
    /// Like [`ForEach::separated`], pairing each element with its 0-based
    /// position.
    pub fn enumerated<I, D>(data: I, separator: impl Into<String>, content: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&(usize, T)) -> D,
        D: TextDocument,
    {
        Self {
            data: data.into_iter().enumerate().collect(),
            separator: Some(separator.into()),
            content,
        }
    }
}

impl<T, F, D> TextDocument for ForEach<T, F>
where
    F: Fn(&T) -> D,
    D: TextDocument,
{
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        if self.data.is_empty() {
            tracing::trace!("for-each over an empty collection; skipping modifiers");
            return String::new();
        }
        let mut content = String::new();
        for (index, element) in self.data.iter().enumerate() {
            let document = (self.content)(element);
            let part = match &self.separator {
                Some(separator) if index > 0 => {
                    document.prefix(separator.as_str()).render_with(env, &[])
                }
                _ => document.render_with(env, &[]),
            };
            content.push_str(&part);
        }
        for modifier in modifiers {
            modifier.modify(&mut content);
        }
        content
    }
}
