use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve `file_path` against the workspace root. Absolute paths are kept.
    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    /// Whether anything (file, directory, or symlink target) exists at `file_path`.
    /// The empty path names nothing, even though it would resolve to the root.
    pub fn exists(&self, file_path: &Path) -> bool {
        !file_path.as_os_str().is_empty() && self.resolve(file_path).exists()
    }

    pub fn read_file(&self, file_path: &Path) -> std::io::Result<Bytes> {
        std::fs::read(self.resolve(file_path)).map(Bytes::from)
    }

    pub fn parse_blob(&self, file_path: &Path) -> std::io::Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?))
    }
}

impl TryFrom<&Path> for Workspace {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to open workspace: {:?}", path))?;

        if !path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", path);
        }

        Ok(Workspace::new(path.into_boxed_path()))
    }
}
