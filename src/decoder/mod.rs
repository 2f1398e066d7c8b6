//! Multi-document manifest decoding.
//!
//! The pipeline has three stages, each run to completion per document:
//! - `stream`: splits the input into top-level mapping documents
//! - `router`: picks the target type from `kind`/`version` (or the legacy
//!   marker) and decodes the spec subtree into it
//! - `crate::validate`: rejects any input field the target did not consume
//!
//! The first error aborts the whole decode; no partial list is returned.

pub mod router;
pub mod stream;


pub use router::Router;
pub use stream::{Document, DocumentStream};

use crate::config::DecoderConfig;
use crate::error::Result;
use crate::registry::{Manifest, Registry};

/// Decode every manifest in `source` with the default config.
///
/// Returns one object per non-empty document, in input order.
pub fn decode_all(source: &[u8], registry: &Registry) -> Result<Vec<Box<dyn Manifest>>> {
    Decoder::new(registry).decode(source)
}

/// Multi-document decoder bound to a registry and config.
#[derive(Debug, Clone)]
pub struct Decoder<'r> {
    registry: &'r Registry,
    config: DecoderConfig,
}

impl<'r> Decoder<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            config: DecoderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Decode all documents in `source`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<_>)` - One object per document, in input order (empty for empty input)
    /// * `Err(MfError::Document)` - The first failing document, by index
    pub fn decode(&self, source: &[u8]) -> Result<Vec<Box<dyn Manifest>>> {
        let router = Router::new(self.registry, &self.config);
        let mut decoded = Vec::new();

        for document in DocumentStream::new(source, self.config.skip_empty_documents) {
            let document = document?;
            let target = router
                .route(&document)
                .map_err(|e| e.in_document(document.index))?;
            decoded.push(target);
        }

        tracing::debug!(count = decoded.len(), "decode finished");
        Ok(decoded)
    }
}
