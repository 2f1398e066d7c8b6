//! Exit code constants for the mfdecode CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable file, invalid config)
//! - 2: Validation failure (unknown keys in a manifest)
//! - 3: Decode failure (malformed input, missing fields, unknown kind)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid decoder config.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a manifest carried fields its target type does not declare.
pub const VALIDATION_FAILURE: i32 = 2;

/// Decode failure: malformed YAML, missing kind/version/spec, or unregistered kind.
pub const DECODE_FAILURE: i32 = 3;
