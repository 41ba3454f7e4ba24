use crate::areas::repository::Repository;
use crate::artifacts::command::error::{CommandError, Result};
use crate::commands::porcelain::PATH_SEPARATOR;
use std::path::Path;

impl Repository {
    /// Report `file_paths` as committed once every one of them exists.
    ///
    /// An empty message is answered before the filesystem is consulted. The
    /// first missing path aborts the commit with [`CommandError::PathNotFound`].
    pub fn commit(&self, file_paths: &[String], message: &str) -> Result<String> {
        if message.is_empty() {
            log::debug!("commit rejected: empty message");
            return Ok("Please enter a commit message".to_string());
        }

        if let Some(missing) = file_paths
            .iter()
            .find(|path| !self.workspace().exists(Path::new(path)))
        {
            return Err(CommandError::PathNotFound(missing.clone()));
        }

        log::debug!("committing {} file(s)", file_paths.len());

        Ok(format!("Committed: {}", file_paths.join(PATH_SEPARATOR)))
    }
}
