//! DecoderConfig struct definition and default implementation.

use crate::registry::{LEGACY_KIND, LEGACY_VERSION};
use serde::{Deserialize, Serialize};

/// Top-level key naming a manifest's kind.
pub const KIND_KEY: &str = "kind";

/// Top-level key naming a manifest's version.
pub const VERSION_KEY: &str = "version";

/// Top-level key holding a manifest's spec subtree.
pub const SPEC_KEY: &str = "spec";

/// Top-level key marking the legacy (untagged) manifest form.
pub const LEGACY_MARKER_KEY: &str = "machine";

/// Settings for manifest routing.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Top-level key that marks a legacy document (default: "machine").
    pub legacy_marker: String,

    /// Registry kind used for legacy documents (default: "v1alpha1").
    pub legacy_kind: String,

    /// Registry version used for legacy documents (default: "").
    pub legacy_version: String,

    /// Whether empty documents (e.g. a trailing `---`) are skipped rather
    /// than rejected.
    pub skip_empty_documents: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            legacy_marker: LEGACY_MARKER_KEY.to_string(),
            legacy_kind: LEGACY_KIND.to_string(),
            legacy_version: LEGACY_VERSION.to_string(),
            skip_empty_documents: true,
        }
    }
}
