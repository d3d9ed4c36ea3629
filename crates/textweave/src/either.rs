/*
 * either.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Conditional branching between two document types.

use crate::document::TextDocument;
use crate::environment::Environment;
use crate::modifier::Modifier;

/// Exactly one of two documents.
///
/// Rendering delegates to the active branch, and the incoming modifier list
/// is forwarded into that branch unchanged, so a modifier attached to the
/// `Either` is indistinguishable from one attached directly to the branch.
/// Both branch types must render text; that is the whole compatibility
/// constraint, checked where the value is constructed.
///
/// For a conditional with no alternative, use `Option<D>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Either<A, B> {
    First(A),
    Second(B),
}

impl<A, B> TextDocument for Either<A, B>
where
    A: TextDocument,
    B: TextDocument,
{
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        match self {
            Either::First(first) => first.render_with(env, modifiers),
            Either::Second(second) => second.render_with(env, modifiers),
        }
    }
}
