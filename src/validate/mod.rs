//! Strict validation of decoded manifests.
//!
//! A target type's own deserialization silently drops fields it does not
//! declare. This module re-serializes the decoded object (never omitting
//! empty fields) and diffs it against the input subtree to find every input
//! key the target never consumed:
//! - `diff`: the pure recursive unknown-key diff over YAML trees
//! - `validate`: the decode-independent check run after every decode

pub mod diff;


pub use diff::{LENGTH_MISMATCH, TYPE_MISMATCH, unknown_keys};

use crate::error::{MfError, Result};
use crate::registry::Manifest;
use serde_yaml::Value;

/// Check that every field in `input` is accounted for by `target`.
///
/// # Returns
///
/// * `Ok(())` - The re-serialized target covers every input key
/// * `Err(MfError::Validation)` - Carries the unknown-key diff and its YAML rendering
pub fn validate(target: &dyn Manifest, input: &Value) -> Result<()> {
    let encoded = target.to_value(false)?;

    let Some(diff) = unknown_keys(input, &encoded) else {
        return Ok(());
    };

    tracing::trace!(?diff, "unknown keys found");

    let summary = serde_yaml::to_string(&diff)
        .map_err(|e| MfError::decode("failed to marshal error summary", e))?;

    Err(MfError::Validation { diff, summary })
}
