//! Porcelain commands (user-facing Git operations)
//!
//! Each command maps its arguments to a single line of output.
//!
//! ## Commands
//!
//! - `status`: Report the path specs asked about
//! - `commit`: Check the named files exist and report them as committed
//! - `log`: Report the paths asked about
//! - `diff`: Tell whether two files have the same content

pub mod commit;
pub mod diff;
pub mod log;
pub mod status;

/// Separator placed between paths in command output
pub const PATH_SEPARATOR: &str = ", ";
