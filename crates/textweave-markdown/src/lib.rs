/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Markdown document components built on `textweave`.
//!
//! Small building blocks for generating flat markdown text: headers, ordered
//! and unordered lists, and fenced code blocks. Each component is a plain
//! value implementing [`TextDocument`] by delegating to a composition body,
//! so textweave modifiers (`indent`, `prefix`, ...) apply to the whole
//! rendered component.
//!
//! ```
//! use textweave::TextDocument;
//! use textweave_markdown::Header;
//!
//! assert_eq!(Header::new(2, "Usage").render(), "## Usage");
//! ```

use textweave::{Environment, ForEach, Modifier, TextDocument};

/// An ATX heading: `level` hash marks, a space, then the title text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub level: usize,
    pub text: String,
}

impl Header {
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

impl TextDocument for Header {
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        ("#".repeating(self.level).suffix(" "), self.text.as_str()).render_with(env, modifiers)
    }
}

/// A decimal-numbered list, one item per line, numbered from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedList {
    pub items: Vec<String>,
}

impl OrderedList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl TextDocument for OrderedList {
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        ForEach::enumerated(&self.items, "\n", |(index, item)| {
            format!("{}. {item}", index + 1)
        })
        .render_with(env, modifiers)
    }
}

/// A bulleted list, one item per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnorderedList {
    pub items: Vec<String>,
    pub bullet: String,
}

impl UnorderedList {
    pub fn new<I, S>(items: I, bullet: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            bullet: bullet.into(),
        }
    }
}

impl TextDocument for UnorderedList {
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        ForEach::separated(&self.items, "\n", |item| format!("{} {item}", self.bullet))
            .render_with(env, modifiers)
    }
}

/// A fenced code block with a language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
}

impl CodeBlock {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
        }
    }
}

impl TextDocument for CodeBlock {
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        (
            format!("```{}", self.language).suffix("\n"),
            self.code.as_str(),
            "```".prefix("\n"),
        )
            .render_with(env, modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_levels() {
        assert_eq!(Header::new(1, "Title").render(), "# Title");
        assert_eq!(Header::new(3, "Deep").render(), "### Deep");
    }

    #[test]
    fn test_ordered_list_numbers_from_one() {
        let list = OrderedList::new(["first", "second", "third"]);
        assert_eq!(list.render(), "1. first\n2. second\n3. third");
    }

    #[test]
    fn test_empty_ordered_list_renders_nothing() {
        let list = OrderedList::default();
        assert_eq!(list.indent(4).render(), "");
    }

    #[test]
    fn test_unordered_list_uses_bullet() {
        let list = UnorderedList::new(["Blueberries", "Apples"], "-");
        assert_eq!(list.render(), "- Blueberries\n- Apples");

        let list = UnorderedList::new(["one"], "*");
        assert_eq!(list.render(), "* one");
    }

    #[test]
    fn test_code_block_fences() {
        let code = CodeBlock::new("rust", "fn main() {}");
        assert_eq!(code.render(), "```rust\nfn main() {}\n```");
    }

    #[test]
    fn test_modifiers_apply_to_whole_component() {
        let header = Header::new(2, "Usage").indent(2);
        assert_eq!(header.render(), "  ## Usage");

        let list = UnorderedList::new(["a", "b"], "-").indent(2);
        assert_eq!(list.render(), "  - a\n  - b");
    }
}
