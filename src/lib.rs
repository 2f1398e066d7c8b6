//! mfdecode: strict multi-document YAML manifest decoder.
//!
//! Each document in a YAML stream is resolved to a registered configuration
//! type by its `kind`/`version` (or the legacy `machine` form), decoded, and
//! then checked so that every input field was actually consumed by the
//! target type. Unknown fields fail the whole decode with a diff tree that
//! mirrors the input.
//!
//! ```no_run
//! use mfdecode::{Registry, decode_all};
//!
//! let registry = Registry::default();
//! let objects = decode_all(b"machine:\n  type: worker\n", &registry)?;
//! assert_eq!(objects.len(), 1);
//! # Ok::<(), mfdecode::MfError>(())
//! ```

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod exit_codes;
pub mod manifests;
pub mod registry;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use config::DecoderConfig;
pub use decoder::{Decoder, decode_all};
pub use error::{MfError, Result};
pub use registry::{Manifest, ManifestFactory, Registry};
