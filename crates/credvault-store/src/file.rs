//! File-per-user implementation of the Sidecar trait.
//!
//! Each key owns one text file, `<dir>/<key>.<extension>`. Every line is one
//! record. There is no header, no metadata and no escaping. Files are opened
//! in create+append mode for writes and read sequentially for reads; the
//! handle is dropped before each call returns.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SidecarError};
use crate::traits::{check_key, check_record, Sidecar};

/// Configuration for a [`FileSidecar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSidecarConfig {
    /// Directory holding the per-user files.
    pub dir: PathBuf,
    /// File extension, without the dot.
    pub extension: String,
}

impl Default for FileSidecarConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            extension: "txt".to_string(),
        }
    }
}

/// Sidecar backed by one append-only text file per key.
#[derive(Debug, Clone)]
pub struct FileSidecar {
    config: FileSidecarConfig,
}

impl FileSidecar {
    /// Use the directory and extension in `config` as given.
    ///
    /// The directory is not created; writes fail with
    /// [`SidecarError::ResourceUnavailable`] if it is missing.
    pub fn new(config: FileSidecarConfig) -> Self {
        Self { config }
    }

    /// Like [`new`](Self::new), but creates the directory if needed.
    pub fn create(config: FileSidecarConfig) -> Result<Self> {
        fs::create_dir_all(&config.dir)
            .map_err(|e| SidecarError::unavailable(&config.dir.display().to_string(), e))?;
        Ok(Self::new(config))
    }

    /// Open a sidecar rooted at `dir` with the default extension, creating
    /// the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Self::create(FileSidecarConfig {
            dir: dir.as_ref().to_path_buf(),
            ..FileSidecarConfig::default()
        })
    }

    /// The sidecar's configuration.
    pub fn config(&self) -> &FileSidecarConfig {
        &self.config
    }

    /// Path of the file holding `key`'s records.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        let name = if self.config.extension.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", key, self.config.extension)
        };
        Ok(self.config.dir.join(name))
    }
}

impl Sidecar for FileSidecar {
    fn append(&mut self, key: &str, record: &str) -> Result<()> {
        check_record(key, record)?;
        let path = self.path_for(key)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| SidecarError::unavailable(key, e))?;
        writeln!(file, "{}", record).map_err(|e| SidecarError::unavailable(key, e))?;

        debug!(key, path = %path.display(), "appended sidecar record");
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Vec<String>> {
        let path = self.path_for(key)?;

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SidecarError::unavailable(key, e)),
        };

        BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .map_err(|e| SidecarError::unavailable(key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sidecar() -> (TempDir, FileSidecar) {
        let dir = TempDir::new().unwrap();
        let sidecar = FileSidecar::open(dir.path()).unwrap();
        (dir, sidecar)
    }

    #[test]
    fn test_file_layout() {
        let (dir, mut sidecar) = sidecar();
        sidecar.append("alice", "Dbu123!").unwrap();
        sidecar.append("alice", "ifmmp").unwrap();

        let contents = fs::read_to_string(dir.path().join("alice.txt")).unwrap();
        assert_eq!(contents, "Dbu123!\nifmmp\n");
    }

    #[test]
    fn test_read_back_in_order() {
        let (_dir, mut sidecar) = sidecar();
        sidecar.append("bob", "one").unwrap();
        sidecar.append("bob", "two").unwrap();
        sidecar.append("carol", "three").unwrap();

        assert_eq!(sidecar.read("bob").unwrap(), vec!["one", "two"]);
        assert_eq!(sidecar.read("carol").unwrap(), vec!["three"]);
    }

    #[test]
    fn test_absent_key_reads_empty() {
        let (_dir, sidecar) = sidecar();
        assert!(sidecar.read("nobody").unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let mut sidecar = FileSidecar::new(FileSidecarConfig {
            dir: dir.path().join("does-not-exist"),
            ..FileSidecarConfig::default()
        });

        let err = sidecar.append("alice", "x").unwrap_err();
        assert!(matches!(err, SidecarError::ResourceUnavailable { ref key, .. } if key == "alice"));
    }

    #[test]
    fn test_unreadable_record_is_unavailable() {
        let (dir, sidecar) = sidecar();
        // A directory where the file should be cannot be read as lines
        fs::create_dir(dir.path().join("alice.txt")).unwrap();

        let err = sidecar.read("alice").unwrap_err();
        assert!(matches!(err, SidecarError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        let mut sidecar = FileSidecar::new(FileSidecarConfig {
            dir: dir.path().to_path_buf(),
            extension: "log".to_string(),
        });
        sidecar.append("dave", "x").unwrap();

        assert!(dir.path().join("dave.log").exists());
        assert_eq!(sidecar.read("dave").unwrap(), vec!["x"]);
    }

    #[test]
    fn test_rejects_path_keys() {
        let (_dir, mut sidecar) = sidecar();
        assert!(matches!(
            sidecar.append("../escape", "x"),
            Err(SidecarError::InvalidKey(_))
        ));
        assert!(matches!(sidecar.read(""), Err(SidecarError::InvalidKey(_))));
    }

    #[test]
    fn test_rejects_multiline_record() {
        let (_dir, mut sidecar) = sidecar();
        assert!(matches!(
            sidecar.append("alice", "a\nb"),
            Err(SidecarError::InvalidRecord(_))
        ));
        assert!(sidecar.read("alice").unwrap().is_empty());
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut sidecar = FileSidecar::open(dir.path()).unwrap();
            sidecar.append("erin", "first").unwrap();
        }
        let sidecar = FileSidecar::open(dir.path()).unwrap();
        assert_eq!(sidecar.read("erin").unwrap(), vec!["first"]);
    }
}
