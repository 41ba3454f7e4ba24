//! Content-addressed objects
//!
//! Workspace files are fingerprinted the way git stores them: the raw bytes are
//! wrapped in a `<type> <size>\0<content>` envelope and hashed with SHA-1.
//! Two files share an object ID exactly when their contents are the same.

pub mod blob;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
