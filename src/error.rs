//! Error types for mfdecode.
//!
//! Uses thiserror for derive macros. Every variant is terminal for the
//! `decode_all` call that produced it.

use crate::exit_codes;
use std::fmt::Display;
use thiserror::Error;

/// Main error type for decoding operations.
#[derive(Error, Debug)]
pub enum MfError {
    /// A modern-form manifest has no (or an empty) `kind` field.
    #[error("missing kind")]
    MissingKind,

    /// A modern-form manifest has no (or an empty) `version` field.
    #[error("missing version")]
    MissingVersion,

    /// A modern-form manifest has no `spec` field.
    #[error("missing spec")]
    MissingSpec,

    /// The `spec` field is present but carries no nested content.
    #[error("missing spec content")]
    MissingSpecContent,

    /// Malformed input at any level: stream, scalar field, or spec-into-target.
    #[error("{context}: {message}")]
    Decode { context: String, message: String },

    /// The registry has no factory for this `(kind, version)` pair.
    #[error("new config: no manifest registered for kind '{kind}' version '{version}'")]
    Construction { kind: String, version: String },

    /// A document parsed but its top level is not a mapping.
    #[error("expected a document")]
    UnexpectedDocumentShape,

    /// The input carried fields the decoded target does not declare.
    ///
    /// `diff` mirrors the shape of the input, pruned to the unknown parts.
    #[error("unknown keys found during decoding:\n{summary}")]
    Validation {
        diff: serde_yaml::Value,
        summary: String,
    },

    /// Wraps a per-document error with the zero-based document index.
    #[error("document {index}: {source}")]
    Document {
        index: usize,
        #[source]
        source: Box<MfError>,
    },

    /// Wraps an error with the input it was read from.
    #[error("{path}: {source}")]
    Input {
        path: String,
        #[source]
        source: Box<MfError>,
    },

    /// Bad arguments, unreadable input, or an invalid decoder config.
    #[error("{0}")]
    UserError(String),
}

impl MfError {
    /// Build a `Decode` error from a context label and an underlying failure.
    pub fn decode(context: impl Into<String>, err: impl Display) -> Self {
        MfError::Decode {
            context: context.into(),
            message: err.to_string(),
        }
    }

    /// Attach a document index to this error.
    pub fn in_document(self, index: usize) -> Self {
        MfError::Document {
            index,
            source: Box::new(self),
        }
    }

    /// Attach the input path (or `-` for stdin) to this error.
    pub fn in_input(self, path: impl Into<String>) -> Self {
        MfError::Input {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The error with any document or input wrapper removed.
    pub fn root(&self) -> &MfError {
        match self {
            MfError::Document { source, .. } | MfError::Input { source, .. } => source.root(),
            other => other,
        }
    }

    /// The unknown-key diff, when this is a validation failure.
    pub fn unknown_keys(&self) -> Option<&serde_yaml::Value> {
        match self.root() {
            MfError::Validation { diff, .. } => Some(diff),
            _ => None,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self.root() {
            MfError::UserError(_) => exit_codes::USER_ERROR,
            MfError::Validation { .. } => exit_codes::VALIDATION_FAILURE,
            _ => exit_codes::DECODE_FAILURE,
        }
    }
}

/// Result type alias for mfdecode operations.
pub type Result<T> = std::result::Result<T, MfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_errors_have_decode_exit_code() {
        for err in [
            MfError::MissingKind,
            MfError::MissingVersion,
            MfError::MissingSpec,
            MfError::MissingSpecContent,
        ] {
            assert_eq!(err.exit_code(), exit_codes::DECODE_FAILURE);
        }
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = MfError::Validation {
            diff: serde_yaml::Value::Null,
            summary: "z: 99\n".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = MfError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn document_wrapper_keeps_inner_exit_code() {
        let err = MfError::Validation {
            diff: serde_yaml::Value::Null,
            summary: String::new(),
        }
        .in_document(3);
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(matches!(err.root(), MfError::Validation { .. }));
    }

    #[test]
    fn input_wrapper_names_the_file() {
        let err = MfError::MissingSpec.in_document(0).in_input("nodes.yaml");
        assert_eq!(err.to_string(), "nodes.yaml: document 0: missing spec");
        assert!(matches!(err.root(), MfError::MissingSpec));
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(MfError::MissingSpecContent.to_string(), "missing spec content");

        let err = MfError::decode("kind decode", "invalid type: sequence");
        assert_eq!(err.to_string(), "kind decode: invalid type: sequence");

        let err = MfError::Construction {
            kind: "Foo".to_string(),
            version: "v9".to_string(),
        };
        assert!(err.to_string().contains("kind 'Foo' version 'v9'"));

        let err = MfError::MissingKind.in_document(1);
        assert_eq!(err.to_string(), "document 1: missing kind");
    }

    #[test]
    fn validation_message_embeds_summary() {
        let err = MfError::Validation {
            diff: serde_yaml::Value::Null,
            summary: "z: 99\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown keys found during decoding:\nz: 99\n"
        );
    }
}
