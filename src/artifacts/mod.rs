//! Data types shared by the commands
//!
//! - `command`: command names, requests, and errors
//! - `objects`: content-addressed blobs used to compare files

pub mod command;
pub mod objects;
