/*
 * environment.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Typed, dynamically scoped environment values.
//!
//! An [`Environment`] is an immutable map from key *types* to values. Scoping
//! a value with [`TextDocument::environment`](crate::TextDocument::environment)
//! extends a copy of the map for the subtree render only; the parent map is
//! never touched, so sibling subtrees cannot observe the value and there is
//! nothing to restore on exit, even if rendering panics mid-subtree.
//!
//! Keys declare their value type and a default:
//!
//! ```
//! use textweave::{EnvironmentKey, FromEnvironment, TextDocument};
//!
//! struct Bullet;
//!
//! impl EnvironmentKey for Bullet {
//!     type Value = &'static str;
//!
//!     fn default_value() -> Self::Value {
//!         "-"
//!     }
//! }
//!
//! let item = FromEnvironment::<Bullet, _>::new(|bullet| format!("{bullet} milk"));
//! assert_eq!(item.render(), "- milk");
//! assert_eq!(item.environment::<Bullet>("*").render(), "* milk");
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::document::TextDocument;
use crate::modifier::Modifier;

/// A typed environment key with a declared default.
///
/// The implementing type itself is the key; it never needs a value.
pub trait EnvironmentKey: 'static {
    /// The type of the value stored under this key.
    type Value: Clone + 'static;

    /// The value reads observe when no enclosing scope set one.
    fn default_value() -> Self::Value;
}

/// An immutable store of environment values, threaded by reference down the
/// render recursion.
#[derive(Clone, Default)]
pub struct Environment {
    values: HashMap<TypeId, Arc<dyn Any>>,
}

impl Environment {
    /// An environment with no scoped values; every read yields its key's
    /// default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the value for `K` from the nearest enclosing scope, or the key's
    /// declared default.
    pub fn get<K>(&self) -> K::Value
    where
        K: EnvironmentKey,
    {
        self.values
            .get(&TypeId::of::<K>())
            .and_then(|value| value.downcast_ref::<K::Value>())
            .cloned()
            .unwrap_or_else(K::default_value)
    }

    /// A copy of this environment with `value` stored under `K`. `self` is
    /// unchanged.
    pub fn with<K>(&self, value: K::Value) -> Self
    where
        K: EnvironmentKey,
    {
        let mut values = self.values.clone();
        values.insert(TypeId::of::<K>(), Arc::new(value));
        Self { values }
    }

    /// Whether some enclosing scope set a value for `K`.
    pub fn contains<K>(&self) -> bool
    where
        K: EnvironmentKey,
    {
        self.values.contains_key(&TypeId::of::<K>())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("scoped_keys", &self.values.len())
            .finish()
    }
}

/// A document that scopes an environment value to its subtree's render.
pub struct WithEnvironment<K, D>
where
    K: EnvironmentKey,
{
    value: K::Value,
    content: D,
    key: PhantomData<fn() -> K>,
}

impl<K, D> WithEnvironment<K, D>
where
    K: EnvironmentKey,
    D: TextDocument,
{
    pub fn new(value: K::Value, content: D) -> Self {
        Self {
            value,
            content,
            key: PhantomData,
        }
    }
}

impl<K, D> TextDocument for WithEnvironment<K, D>
where
    K: EnvironmentKey,
    D: TextDocument,
{
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        let scoped = env.with::<K>(self.value.clone());
        self.content.render_with(&scoped, modifiers)
    }
}

/// A document built from the ambient value for `K` at render time.
pub struct FromEnvironment<K, F> {
    content: F,
    key: PhantomData<fn() -> K>,
}

impl<K, F> FromEnvironment<K, F> {
    pub fn new(content: F) -> Self {
        Self {
            content,
            key: PhantomData,
        }
    }
}

impl<K, F, D> TextDocument for FromEnvironment<K, F>
where
    K: EnvironmentKey,
    F: Fn(K::Value) -> D,
    D: TextDocument,
{
    fn render_with(&self, env: &Environment, modifiers: &[&dyn Modifier]) -> String {
        (self.content)(env.get::<K>()).render_with(env, modifiers)
    }
}
