//! Registry of configuration types keyed by `(kind, version)`.
//!
//! The decoder only depends on the factory contract here: look a pair up,
//! then deserialize a YAML subtree into a boxed [`Manifest`]. Concrete types
//! are registered by the caller (or via [`Registry::default`] for the
//! built-in legacy type).

use crate::error::{MfError, Result};
use crate::manifests::v1alpha1;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::Debug;


/// Kind used for the legacy (untagged) manifest form.
pub const LEGACY_KIND: &str = "v1alpha1";

/// Version used for the legacy (untagged) manifest form.
pub const LEGACY_VERSION: &str = "";

/// A decoded configuration object of some registered type.
///
/// Implemented for every serde type; use [`downcast_ref`](#method.downcast_ref)
/// to recover the concrete type.
pub trait Manifest: Debug + Any {
    /// Re-serialize this object into a generic YAML tree.
    fn to_value(&self, omit_empty: bool) -> Result<Value>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> Manifest for T
where
    T: Serialize + DeserializeOwned + Debug + Any,
{
    fn to_value(&self, omit_empty: bool) -> Result<Value> {
        crate::encoder::to_value(self, omit_empty)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn Manifest {
    /// Returns true if the boxed object is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the object as `T`, if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Take ownership of the object as `T`, handing it back on mismatch.
    pub fn downcast<T: Any>(self: Box<Self>) -> std::result::Result<Box<T>, Box<dyn Any>> {
        self.into_any().downcast::<T>()
    }
}

type DecodeFn = fn(Value) -> std::result::Result<Box<dyn Manifest>, serde_yaml::Error>;

/// Constructor for one registered `(kind, version)` pair.
#[derive(Debug, Clone)]
pub struct ManifestFactory {
    pub kind: String,
    pub version: String,
    /// Rust type name of the produced object, for diagnostics.
    pub type_name: &'static str,
    decode: DecodeFn,
}

impl ManifestFactory {
    /// Deserialize `tree` into a fresh instance of the registered type.
    pub fn decode(&self, tree: Value) -> std::result::Result<Box<dyn Manifest>, serde_yaml::Error> {
        (self.decode)(tree)
    }
}

fn decode_as<T>(tree: Value) -> std::result::Result<Box<dyn Manifest>, serde_yaml::Error>
where
    T: Manifest + DeserializeOwned,
{
    let target: T = serde_yaml::from_value(tree)?;
    Ok(Box::new(target))
}

/// Maps `(kind, version)` pairs to manifest factories.
#[derive(Debug, Clone)]
pub struct Registry {
    factories: BTreeMap<(String, String), ManifestFactory>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register `T` under `(kind, version)`, replacing any earlier entry.
    pub fn register<T>(&mut self, kind: &str, version: &str) -> &mut Self
    where
        T: Manifest + DeserializeOwned,
    {
        let factory = ManifestFactory {
            kind: kind.to_string(),
            version: version.to_string(),
            type_name: std::any::type_name::<T>(),
            decode: decode_as::<T>,
        };

        if let Some(previous) = self
            .factories
            .insert((kind.to_string(), version.to_string()), factory)
        {
            tracing::debug!(
                kind,
                version,
                replaced = previous.type_name,
                "manifest factory replaced"
            );
        }
        self
    }

    /// Look up the factory for `(kind, version)`.
    ///
    /// Fails with [`MfError::Construction`] when the pair is unknown.
    pub fn lookup(&self, kind: &str, version: &str) -> Result<&ManifestFactory> {
        self.factories
            .get(&(kind.to_string(), version.to_string()))
            .ok_or_else(|| MfError::Construction {
                kind: kind.to_string(),
                version: version.to_string(),
            })
    }

    pub fn contains(&self, kind: &str, version: &str) -> bool {
        self.lookup(kind, version).is_ok()
    }

    /// Registered factories sorted by kind, then version.
    pub fn kinds(&self) -> impl Iterator<Item = &ManifestFactory> {
        self.factories.values()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for Registry {
    /// A registry holding the built-in legacy configuration type.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register::<v1alpha1::Config>(LEGACY_KIND, LEGACY_VERSION);
        registry
    }
}
