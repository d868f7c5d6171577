use crate::error::StoreError;
use crate::results::Course;
use crate::utils::sanitize_filename;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes each course to its own JSON file in a directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Opens the output directory, creating it if needed
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(io_error(&dir))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<name>by<provider>.json`, with both parts sanitized
    pub fn file_name(course: &Course) -> String {
        format!(
            "{}by{}.json",
            sanitize_filename(course.name()),
            sanitize_filename(course.provider())
        )
    }

    /// Writes the course, replacing any earlier file with the same name.
    ///
    /// The document goes to a hidden temporary file in the same directory
    /// that is renamed over the target once fully written, so the target is
    /// never left truncated.
    pub fn save(&self, course: &Course) -> Result<PathBuf, StoreError> {
        let path = self.dir.join(Self::file_name(course));
        let json = serde_json::to_vec(course)?;

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(io_error(&self.dir))?;
        temp.write_all(&json).map_err(io_error(temp.path()))?;
        temp.as_file().sync_all().map_err(io_error(temp.path()))?;
        temp.persist(&path).map_err(|e| io_error(&path)(e.error))?;

        Ok(path)
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}
