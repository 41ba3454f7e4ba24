//! Core repository components
//!
//! - `repository`: entry point that owns the workspace and the output writer
//! - `workspace`: working directory file system access

pub mod repository;
pub(crate) mod workspace;
