use crate::areas::repository::Repository;
use crate::artifacts::command::error::{CommandError, Result};
use crate::artifacts::command::request::CommandRequest;
use crate::artifacts::command::{Command, DIFF_VERSION_COUNT};

impl Repository {
    /// Run the command named in `request` and return its output line.
    ///
    /// Unknown command names are not an error: they produce a line saying so.
    pub fn do_command(&self, request: &CommandRequest) -> Result<String> {
        let Some(command) = Command::parse(&request.command) else {
            log::debug!("unsupported command {:?}", request.command);
            return Ok(format!("{} is not supported by git", request.command));
        };

        log::debug!("dispatching {command}");

        match command {
            Command::Status => Ok(self.status(&request.path_specs)),
            Command::Commit => self.commit(&request.file_paths, &request.message),
            Command::Log => Ok(self.log(&request.paths_to_show_log_for)),
            Command::Diff => match request.versions.as_slice() {
                [file1, file2] => self.diff(file1, file2),
                versions => Err(CommandError::InvalidArgumentCount {
                    expected: DIFF_VERSION_COUNT,
                    actual: versions.len(),
                }),
            },
        }
    }
}
