//! Routing a document to its registered configuration type.

use super::stream::Document;
use crate::config::{DecoderConfig, KIND_KEY, SPEC_KEY, VERSION_KEY};
use crate::error::{MfError, Result};
use crate::registry::{Manifest, Registry};
use crate::validate::validate;
use serde_yaml::Value;

/// Resolves documents to decoded, strictly validated manifests.
#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    registry: &'a Registry,
    config: &'a DecoderConfig,
}

impl<'a> Router<'a> {
    pub fn new(registry: &'a Registry, config: &'a DecoderConfig) -> Self {
        Self { registry, config }
    }

    /// Decode one document into its target type.
    ///
    /// Scans the top-level fields once, in order. The legacy marker wins as
    /// soon as it is seen, regardless of what follows it. Otherwise `kind`,
    /// `version` and `spec` select the type and the `spec` subtree is decoded
    /// into it.
    pub fn route(&self, document: &Document) -> Result<Box<dyn Manifest>> {
        let mut kind = String::new();
        let mut version = String::new();
        let mut spec: Option<&Value> = None;

        for (key, value) in document.fields() {
            let Some(key) = key.as_str() else {
                continue;
            };

            match key {
                KIND_KEY => kind = scalar_text("kind decode", value)?,
                VERSION_KEY => version = scalar_text("version decode", value)?,
                SPEC_KEY => spec = Some(value),
                marker if marker == self.config.legacy_marker => {
                    return self.route_legacy(document);
                }
                _ => {}
            }
        }

        if kind.is_empty() {
            return Err(MfError::MissingKind);
        }

        if version.is_empty() {
            return Err(MfError::MissingVersion);
        }

        let spec = spec.ok_or(MfError::MissingSpec)?;

        if !has_content(spec) {
            return Err(MfError::MissingSpecContent);
        }

        let factory = self.registry.lookup(&kind, &version)?;
        let target = factory
            .decode(spec.clone())
            .map_err(|e| MfError::decode("spec decode", e))?;

        validate(&*target, spec)?;

        tracing::debug!(
            index = document.index,
            kind = %kind,
            version = %version,
            type_name = factory.type_name,
            "manifest decoded"
        );

        Ok(target)
    }

    fn route_legacy(&self, document: &Document) -> Result<Box<dyn Manifest>> {
        let factory = self
            .registry
            .lookup(&self.config.legacy_kind, &self.config.legacy_version)?;

        let whole = document.to_value();
        let target = factory
            .decode(whole.clone())
            .map_err(|e| MfError::decode("deprecated decode", e))?;

        validate(&*target, &whole)?;

        tracing::debug!(
            index = document.index,
            marker = %self.config.legacy_marker,
            type_name = factory.type_name,
            "legacy manifest decoded"
        );

        Ok(target)
    }
}

/// Text of a `kind`/`version` value. Null reads as empty (missing).
fn scalar_text(context: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Tagged(tagged) => scalar_text(context, &tagged.value),
        Value::Sequence(_) => Err(MfError::decode(context, "expected a scalar, found a sequence")),
        Value::Mapping(_) => Err(MfError::decode(context, "expected a scalar, found a mapping")),
    }
}

/// Whether a spec value has nested content to decode.
fn has_content(spec: &Value) -> bool {
    match spec {
        Value::Mapping(map) => !map.is_empty(),
        Value::Sequence(items) => !items.is_empty(),
        Value::Tagged(tagged) => has_content(&tagged.value),
        _ => false,
    }
}
