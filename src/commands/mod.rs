//! Command implementations
//!
//! - `dispatch`: routes a request to the matching porcelain command
//! - `porcelain`: the user-facing commands themselves (status, commit, log, diff)

pub mod dispatch;
pub mod porcelain;
