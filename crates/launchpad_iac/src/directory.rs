//! Output directory placement.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{IacError, IacResult};

/// Where a component's files go, and how an existing directory is treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDescriptor {
    /// Directory name relative to `parent`; may span several segments.
    pub name: PathBuf,
    pub parent: PathBuf,
    /// Move an existing directory aside before creating a fresh one.
    pub backup: bool,
}

/// Outcome of realizing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedDirectory {
    pub path: PathBuf,
    /// Where the previous directory was moved, if a backup was taken.
    pub backup: Option<PathBuf>,
}

impl DirectoryDescriptor {
    pub fn new(name: impl Into<PathBuf>, parent: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            backup: false,
        }
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    /// The directory's full path, `parent/name`.
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }

    /// Make sure the directory exists, backing up an existing one if requested.
    pub fn ensure(&self) -> IacResult<PlacedDirectory> {
        let path = self.path();

        let backup = if self.backup && path.exists() {
            let target = backup_path(&path);
            info!("Backing up {:?} to {:?}", path, target);
            fs::rename(&path, &target).map_err(|source| IacError::DirectoryBackup {
                path: path.clone(),
                source,
            })?;
            Some(target)
        } else {
            None
        };

        fs::create_dir_all(&path).map_err(|source| IacError::DirectoryCreation {
            path: path.clone(),
            source,
        })?;
        debug!("Directory ready: {:?}", path);

        Ok(PlacedDirectory { path, backup })
    }
}

/// First free `<path>.backup-<timestamp>[-N]` sibling of `path`.
fn backup_path(path: &Path) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%d%H%M%S");
    let base = format!("{}.backup-{}", path.display(), stamp);

    let mut candidate = PathBuf::from(&base);
    let mut n = 1;
    while candidate.exists() {
        candidate = PathBuf::from(format!("{}-{}", base, n));
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_path_joins_parent_and_name() {
        let desc = DirectoryDescriptor::new("projects/templates/web", "/out");
        assert_eq!(desc.path(), PathBuf::from("/out/projects/templates/web"));
    }

    #[test]
    fn test_root_descriptor_with_empty_parent() {
        let desc = DirectoryDescriptor::new("/out", PathBuf::new());
        assert_eq!(desc.path(), PathBuf::from("/out"));
    }

    #[test]
    fn test_ensure_creates_nested_directory() {
        let dir = tempdir().unwrap();
        let desc = DirectoryDescriptor::new("projects/templates/web", dir.path());

        let placed = desc.ensure().unwrap();
        assert!(placed.path.is_dir());
        assert_eq!(placed.backup, None);
    }

    #[test]
    fn test_ensure_reuses_existing_without_backup() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("folders");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join("keep.txt"), "old").unwrap();

        let placed = DirectoryDescriptor::new("folders", dir.path()).ensure().unwrap();

        assert_eq!(placed.backup, None);
        assert!(placed.path.join("keep.txt").exists());
    }

    #[test]
    fn test_ensure_backs_up_existing() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("folders");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join("main.tf"), "old").unwrap();

        let placed = DirectoryDescriptor::new("folders", dir.path())
            .with_backup(true)
            .ensure()
            .unwrap();

        let backup = placed.backup.expect("backup taken");
        assert_eq!(fs::read_to_string(backup.join("main.tf")).unwrap(), "old");
        assert!(placed.path.is_dir());
        assert!(!placed.path.join("main.tf").exists());
    }

    #[test]
    fn test_backup_path_avoids_collisions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folders");
        let first = backup_path(&path);
        fs::create_dir_all(&first).unwrap();

        let second = backup_path(&path);
        assert_ne!(first, second);
    }

    #[test]
    fn test_ensure_fails_when_parent_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = DirectoryDescriptor::new("folders", &blocker).ensure().unwrap_err();
        assert!(matches!(err, IacError::DirectoryCreation { .. }));
    }
}
