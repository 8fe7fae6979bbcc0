//! Snapshot store persisting one JSON file per store name.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use staffly_application::SnapshotStore;
use staffly_core::{AppError, AppResult};
use tokio::fs;
use tracing::debug;

/// Snapshot store writing `<root>/<store-name>.json` files.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    root: PathBuf,
}

impl JsonFileSnapshotStore {
    /// Creates a store rooted at a data directory. The directory is created
    /// lazily on the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the data directory this store writes under.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    fn path_for(&self, store_name: &str) -> AppResult<PathBuf> {
        if store_name.is_empty()
            || store_name
                .chars()
                .any(|character| !character.is_ascii_alphanumeric() && character != '-')
        {
            return Err(AppError::Validation(format!(
                "invalid store name '{store_name}'"
            )));
        }

        Ok(self.root.join(format!("{store_name}.json")))
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self, store_name: &str) -> AppResult<Option<String>> {
        let path = self.path_for(store_name)?;

        match fs::read_to_string(&path).await {
            Ok(payload) => Ok(Some(payload)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(AppError::Storage(format!(
                "failed to read {}: {error}",
                path.display()
            ))),
        }
    }

    async fn save(&self, store_name: &str, payload: String) -> AppResult<()> {
        let path = self.path_for(store_name)?;

        fs::create_dir_all(&self.root).await.map_err(|error| {
            AppError::Storage(format!(
                "failed to create {}: {error}",
                self.root.display()
            ))
        })?;

        fs::write(&path, payload).await.map_err(|error| {
            AppError::Storage(format!("failed to write {}: {error}", path.display()))
        })?;

        debug!(store = store_name, path = %path.display(), "snapshot written");
        Ok(())
    }

    async fn clear(&self, store_name: &str) -> AppResult<()> {
        let path = self.path_for(store_name)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(AppError::Storage(format!(
                "failed to remove {}: {error}",
                path.display()
            ))),
        }
    }
}
