//! Built-in configuration types.
//!
//! Only the legacy machine configuration ships with the crate; modern kinds
//! are registered by the embedding application.

pub mod v1alpha1;
