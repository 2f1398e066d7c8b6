//! Manifest types and helpers shared by unit tests.

use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Minimal modern-form manifest declaring a single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Foo {
    pub a: i64,
}

/// Manifest with nested, embedded and collection fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Server {
    pub name: String,
    #[serde(flatten)]
    pub meta: Meta,
    pub ports: Vec<Port>,
    pub tags: BTreeSet<String>,
    pub labels: BTreeMap<String, String>,
    pub tls: Option<Tls>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Meta {
    pub owner: String,
    pub tier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Port {
    pub port: u16,
    pub protocol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Tls {
    pub cert: String,
    pub key: String,
}

/// Default registry plus `Foo/v1` and `Server/v1`.
pub(crate) fn test_registry() -> Registry {
    let mut registry = Registry::default();
    registry
        .register::<Foo>("Foo", "v1")
        .register::<Server>("Server", "v1");
    registry
}

pub(crate) fn yaml(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}
