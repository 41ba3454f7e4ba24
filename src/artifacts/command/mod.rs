//! Command requests and their vocabulary
//!
//! - `error`: hard failures surfaced to the caller
//! - `request`: typed request plus the JSON form that is validated into it

pub mod error;
pub mod request;

pub const COMMANDS: phf::Map<&'static str, Command> = phf::phf_map! {
    "status" => Command::Status,
    "commit" => Command::Commit,
    "log" => Command::Log,
    "diff" => Command::Diff,
};

/// Number of versions `diff` compares
pub const DIFF_VERSION_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Status,
    Commit,
    Log,
    Diff,
}

impl Command {
    /// Look up a supported command. Names are matched exactly.
    pub fn parse(name: &str) -> Option<Self> {
        COMMANDS.get(name).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Status => "status",
            Command::Commit => "commit",
            Command::Log => "log",
            Command::Diff => "diff",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
