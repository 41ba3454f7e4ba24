use crate::areas::repository::Repository;
use crate::commands::porcelain::PATH_SEPARATOR;

impl Repository {
    pub fn status(&self, path_specs: &[String]) -> String {
        log::debug!("status for {} path spec(s)", path_specs.len());

        format!("Status for: {}", path_specs.join(PATH_SEPARATOR))
    }
}
