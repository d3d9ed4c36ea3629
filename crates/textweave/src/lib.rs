/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Declarative text-document composition DSL.
//!
//! This crate builds strings from trees of composable "documents". A document
//! describes content; rendering flattens the tree into one string. It
//! supports:
//!
//! - Plain string leaves and the [`Empty`] document
//! - Sequencing: the [`doc!`] macro, [`Sequence`], and document tuples
//! - Repetition over collections: [`ForEach`] (with separators and
//!   enumeration)
//! - Separator-joining with empty-element omission: [`Joined`]
//! - Conditional branching: [`Either`] and `Option`
//! - Modifiers: indent, repeat, prefix/suffix, percent-encoding, and
//!   predicate-gated transforms, applied in attachment order
//! - Dynamically scoped, typed environment values: [`Environment`],
//!   [`EnvironmentKey`]
//!
//! # Architecture
//!
//! Rendering is a single recursive pass with no parse phase and no runtime
//! failure mode. Every node implements [`TextDocument::render_with`], which
//! receives the ambient [`Environment`] and the FIFO list of modifiers
//! attached outside the node. Wrapper nodes extend or forward that list;
//! content-owning nodes apply it, except that `ForEach`, `Joined`, and
//! `Sequence` skip modifiers entirely for empty input (indenting a block
//! that produced nothing must not emit stray indentation).
//!
//! # Example
//!
//! ```
//! use textweave::{ForEach, TextDocument, doc};
//!
//! let grains = ["oat", "rye", "spelt"];
//! let document = doc!(
//!     "Grains:\n",
//!     ForEach::separated(grains, "\n", |grain| format!("- {grain}")).indent(2),
//! );
//! assert_eq!(document.render(), "Grains:\n  - oat\n  - rye\n  - spelt");
//! ```

pub mod any;
pub mod document;
pub mod either;
pub mod environment;
pub mod foreach;
pub mod joined;
pub mod modifier;
pub mod sequence;

// Re-export main types at crate root
pub use any::AnyTextDocument;
pub use document::{Empty, Rendered, TextDocument};
pub use either::Either;
pub use environment::{Environment, EnvironmentKey, FromEnvironment, WithEnvironment};
pub use foreach::ForEach;
pub use joined::Joined;
pub use modifier::{
    ConditionalModifier, ConditionallyModified, Indenting, Modified, Modifier, PercentEncoding,
    Prefix, Repeating, Suffix,
};
pub use sequence::Sequence;

// The percent-encoding vocabulary used by `TextDocument::percent_encoding`
pub use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC};
