use crate::areas::repository::Repository;
use crate::commands::porcelain::PATH_SEPARATOR;

impl Repository {
    pub fn log(&self, paths_to_show_log_for: &[String]) -> String {
        log::debug!("log for {} path(s)", paths_to_show_log_for.len());

        format!("Log for: {}", paths_to_show_log_for.join(PATH_SEPARATOR))
    }
}
