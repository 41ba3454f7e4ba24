use crate::areas::repository::Repository;
use crate::artifacts::command::error::Result;
use crate::artifacts::objects::object::Object;
use std::path::Path;

const INVALID_FILE_PATH: &str = "file is not a valid file path";
const FILES_IDENTICAL: &str = "Files are identical";
const FILES_DIFFERENT: &str = "Files are different";

impl Repository {
    /// Compare the contents of two files.
    ///
    /// A missing file is reported in the output rather than as an error. Read
    /// failures on files that do exist propagate as [`std::io::Error`].
    pub fn diff(&self, file1: &str, file2: &str) -> Result<String> {
        let (file1, file2) = (Path::new(file1), Path::new(file2));

        if !self.workspace().exists(file1) || !self.workspace().exists(file2) {
            return Ok(INVALID_FILE_PATH.to_string());
        }

        let verdict = if self.is_content_identical(file1, file2)? {
            FILES_IDENTICAL
        } else {
            FILES_DIFFERENT
        };

        Ok(verdict.to_string())
    }

    fn is_content_identical(&self, file1: &Path, file2: &Path) -> Result<bool> {
        let blob1 = self.workspace().parse_blob(file1)?;
        let blob2 = self.workspace().parse_blob(file2)?;
        if blob1.len() != blob2.len() {
            log::debug!(
                "{:?} and {:?} differ in size ({} vs {})",
                file1,
                file2,
                blob1.len(),
                blob2.len()
            );
            return Ok(false);
        }

        let oid1 = blob1.object_id();
        let oid2 = blob2.object_id();
        log::debug!(
            "{:?} -> {}, {:?} -> {}",
            file1,
            oid1.to_short_oid(),
            file2,
            oid2.to_short_oid()
        );

        Ok(oid1 == oid2)
    }
}
