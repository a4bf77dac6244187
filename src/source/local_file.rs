use std::fs;
use std::path::{Path, PathBuf};
use crate::core::error::{Error, ErrorKind, Result};
use crate::source::provider::DataProvider;

/// Reads keyword files relative to a base directory on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalFileProvider {
    pub base_dir: PathBuf,
}

impl LocalFileProvider {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        if !base_dir.exists() {
            return Err(Error::new(
                ErrorKind::NotFound,
                format!("base directory {} does not exist", base_dir.display()),
            ));
        }
        if !base_dir.is_dir() {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("{} is not a directory", base_dir.display()),
            ));
        }

        Ok(LocalFileProvider { base_dir })
    }

    pub fn path_of(&self, location: &str) -> PathBuf {
        self.base_dir.join(location)
    }
}

impl DataProvider for LocalFileProvider {
    fn read(&self, location: &str) -> Result<Vec<u8>> {
        let path = self.path_of(location);
        fs::read(&path).map_err(|e| {
            let kind = if e.kind() == std::io::ErrorKind::NotFound {
                ErrorKind::NotFound
            } else {
                ErrorKind::Io
            };
            Error::new(kind, format!("reading {}: {}", path.display(), e))
        })
    }

    fn name(&self) -> &str {
        "local_file"
    }
}
