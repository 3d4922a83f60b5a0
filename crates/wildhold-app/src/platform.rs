//! Platform directory resolution.
//!
//! Follows OS conventions via the `dirs` crate (XDG on Linux, Known Folders on
//! Windows, Library on macOS).

use std::path::{Path, PathBuf};

use crate::error::AppError;

const APP_NAME: &str = "wildhold";

/// OS-specific directory paths for the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformDirs {
    /// User configuration: `config.ron`.
    pub config_dir: PathBuf,
    /// Game data: biome manifests and other authored assets.
    pub data_dir: PathBuf,
    /// Log files.
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve platform-specific directories without creating them on disk.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, AppError> {
        let app_config = dirs::config_dir().ok_or(AppError::NoConfigDir)?.join(APP_NAME);

        let data_dir = dirs::data_dir()
            .map(|d| d.join(APP_NAME))
            .unwrap_or_else(|| app_config.join("data"));

        Ok(Self {
            config_dir: app_config.clone(),
            data_dir,
            log_dir: app_config.join("logs"),
        })
    }

    /// Resolve directories rooted under a custom base path.
    ///
    /// Used for `--config` and for tests that must not touch real OS
    /// directories.
    pub fn resolve_with_root(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            data_dir: root.join("data"),
            log_dir: root.join("logs"),
        }
    }

    /// Replace the data directory when `data_dir` is set.
    pub fn with_data_dir(mut self, data_dir: Option<&Path>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir.to_path_buf();
        }
        self
    }

    /// Create all directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if any directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_root_layout() {
        let dirs = PlatformDirs::resolve_with_root(Path::new("/tmp/wh"));
        assert_eq!(dirs.config_dir, PathBuf::from("/tmp/wh"));
        assert_eq!(dirs.data_dir, PathBuf::from("/tmp/wh/data"));
        assert_eq!(dirs.log_dir, PathBuf::from("/tmp/wh/logs"));
    }

    #[test]
    fn test_data_dir_override() {
        let dirs = PlatformDirs::resolve_with_root(Path::new("/tmp/wh"))
            .with_data_dir(Some(Path::new("/srv/assets")));
        assert_eq!(dirs.data_dir, PathBuf::from("/srv/assets"));

        let unchanged = PlatformDirs::resolve_with_root(Path::new("/tmp/wh")).with_data_dir(None);
        assert_eq!(unchanged.data_dir, PathBuf::from("/tmp/wh/data"));
    }

    #[test]
    fn test_create_dirs() {
        let root = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve_with_root(root.path());
        dirs.create_dirs().unwrap();
        assert!(dirs.config_dir.is_dir());
        assert!(dirs.data_dir.is_dir());
        assert!(dirs.log_dir.is_dir());
    }

    #[test]
    fn test_resolved_paths_end_with_app_name() {
        // Headless CI may not expose a config dir.
        let Ok(dirs) = PlatformDirs::resolve() else {
            return;
        };
        assert!(dirs.config_dir.ends_with(APP_NAME));
        assert!(dirs.log_dir.starts_with(&dirs.config_dir));
    }
}
