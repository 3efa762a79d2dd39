//! File-backed store for the profile image reference.
//!
//! The picker flow saves the chosen image's local URI under a well-known
//! key; the screen falls back to a stock photo when nothing is stored.
//! Only the reference string is persisted, never image bytes.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::StorageError;

/// Storage key (filename) for the saved image reference.
pub const AVATAR_KEY: &str = "profile_image";

/// Stock photo shown when no image has been picked.
pub const DEFAULT_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400";

/// Stores the avatar reference as a single file under a base directory.
pub struct AvatarStore {
    base_path: PathBuf,
}

impl AvatarStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn file_path(&self) -> PathBuf {
        self.base_path.join(AVATAR_KEY)
    }

    /// The stored reference, or `None` if nothing was ever saved.
    pub async fn load(&self) -> Result<Option<String>, StorageError> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(None);
        }
        let reference = fs::read_to_string(&path).await?;
        Ok(Some(reference.trim().to_string()))
    }

    /// The stored reference, or the stock photo URL.
    pub async fn load_or_default(&self) -> Result<String, StorageError> {
        Ok(self
            .load()
            .await?
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()))
    }

    /// Save (overwrite) the image reference.
    pub async fn save(&self, reference: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.file_path().parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(self.file_path(), reference).await?;
        debug!(path = %self.file_path().display(), "Avatar reference saved");
        Ok(())
    }

    /// Remove the stored reference, reverting to the stock photo.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let path = self.file_path();
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    /// The directory this store writes under.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
