//! Configuration model for mfdecode.
//!
//! This module defines the DecoderConfig struct that controls how manifests
//! are recognized. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), sensible defaults for every field, and validation
//! of config values.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{DecoderConfig, KIND_KEY, LEGACY_MARKER_KEY, SPEC_KEY, VERSION_KEY};
