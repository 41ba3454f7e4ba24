//! Command requests
//!
//! [`CommandRequest`] is the typed form every entry point hands to the
//! dispatcher: the four argument groups are `Vec<String>`, so a well-typed
//! request can never carry a non-sequence.
//!
//! [`RawCommandRequest`] is the JSON document accepted by `tinygit exec`. Its
//! argument groups are arbitrary JSON values and are checked, in a fixed order,
//! when the raw request is converted into a [`CommandRequest`].

use crate::artifacts::command::error::{CommandError, Result};
use derive_new::new;
use serde::Deserialize;
use serde_json::Value;

pub const PATH_SPECS: &str = "pathSpecs";
pub const FILE_PATHS: &str = "filePaths";
pub const PATHS_TO_SHOW_LOG_FOR: &str = "pathsToShowLogFor";
pub const VERSIONS: &str = "versions";

#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct CommandRequest {
    pub command: String,
    pub path_specs: Vec<String>,
    pub file_paths: Vec<String>,
    pub paths_to_show_log_for: Vec<String>,
    pub versions: Vec<String>,
    pub message: String,
}

impl CommandRequest {
    /// A request for `command` with every argument group empty
    pub fn named(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Default::default()
        }
    }

    pub fn with_path_specs(mut self, path_specs: Vec<String>) -> Self {
        self.path_specs = path_specs;
        self
    }

    pub fn with_file_paths(mut self, file_paths: Vec<String>) -> Self {
        self.file_paths = file_paths;
        self
    }

    pub fn with_paths_to_show_log_for(mut self, paths: Vec<String>) -> Self {
        self.paths_to_show_log_for = paths;
        self
    }

    pub fn with_versions(mut self, versions: Vec<String>) -> Self {
        self.versions = versions;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Untyped request as read from a JSON document
///
/// Missing argument groups deserialize to `null` and are rejected during
/// conversion. A missing or `null` message is the empty message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCommandRequest {
    pub command: String,
    #[serde(default)]
    pub path_specs: Value,
    #[serde(default)]
    pub file_paths: Value,
    #[serde(default)]
    pub paths_to_show_log_for: Value,
    #[serde(default)]
    pub versions: Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl RawCommandRequest {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<RawCommandRequest> for CommandRequest {
    type Error = CommandError;

    fn try_from(raw: RawCommandRequest) -> Result<Self> {
        let path_specs = expect_sequence(PATH_SPECS, raw.path_specs)?;
        let file_paths = expect_sequence(FILE_PATHS, raw.file_paths)?;
        let paths_to_show_log_for =
            expect_sequence(PATHS_TO_SHOW_LOG_FOR, raw.paths_to_show_log_for)?;
        let versions = expect_sequence(VERSIONS, raw.versions)?;

        Ok(CommandRequest::new(
            raw.command,
            path_specs,
            file_paths,
            paths_to_show_log_for,
            versions,
            raw.message.unwrap_or_default(),
        ))
    }
}

fn expect_sequence(parameter: &'static str, value: Value) -> Result<Vec<String>> {
    let Value::Array(items) = value else {
        return Err(CommandError::TypeArgument { parameter });
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            _ => Err(CommandError::TypeArgument { parameter }),
        })
        .collect()
}
