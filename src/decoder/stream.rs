//! Splitting a byte buffer into top-level manifest documents.

use crate::error::{MfError, Result};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// One document of the input stream, kept as a generic YAML mapping.
///
/// The mapping preserves source order, so [`Document::fields`] is the
/// document's top-level field list.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Zero-based position among the documents in the stream.
    pub index: usize,
    root: Mapping,
}

impl Document {
    /// Top-level `(key, value)` pairs in source order.
    pub fn fields(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.root.iter()
    }

    /// The whole document as a generic tree.
    pub fn to_value(&self) -> Value {
        Value::Mapping(self.root.clone())
    }
}

/// Lazy iterator over the documents of a YAML stream.
///
/// Yields at most one error, after which the stream is exhausted.
pub struct DocumentStream<'de> {
    inner: serde_yaml::Deserializer<'de>,
    next_index: usize,
    skip_empty: bool,
    done: bool,
}

impl<'de> DocumentStream<'de> {
    pub fn new(source: &'de [u8], skip_empty: bool) -> Self {
        Self {
            inner: serde_yaml::Deserializer::from_slice(source),
            next_index: 0,
            skip_empty,
            // A blank or comment-only buffer holds no documents at all.
            done: is_blank(source),
        }
    }

    fn fail(&mut self, err: MfError) -> Option<Result<Document>> {
        self.done = true;
        Some(Err(err))
    }
}

impl Iterator for DocumentStream<'_> {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let document = self.inner.next()?;
            let index = self.next_index;
            self.next_index += 1;

            let mut value = match Value::deserialize(document) {
                Ok(value) => value,
                Err(e) => {
                    return self.fail(MfError::decode("decode error", e).in_document(index));
                }
            };

            // Resolve `<<` merge keys so merged fields reach the target.
            if let Err(e) = value.apply_merge() {
                return self.fail(MfError::decode("decode error", e).in_document(index));
            }

            match value {
                Value::Mapping(root) => return Some(Ok(Document { index, root })),
                Value::Null if self.skip_empty => {
                    tracing::warn!(index, "skipping empty document");
                }
                _ => return self.fail(MfError::UnexpectedDocumentShape.in_document(index)),
            }
        }
    }
}

/// Whether `source` has nothing but whitespace and `#` comments.
fn is_blank(source: &[u8]) -> bool {
    match std::str::from_utf8(source) {
        Ok(text) => text.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#')
        }),
        Err(_) => false,
    }
}
