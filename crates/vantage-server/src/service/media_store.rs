//! Local-disk storage for uploaded property media.
//!
//! The upload path is deliberately simple: validate the file name against an
//! extension allowlist and a size cap, generate a collision-free name, and
//! stream-copy the bytes to a directory on local disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;
use vantage_postgres::types::MediaKind;

/// Tracing target for media storage operations.
const TRACING_TARGET: &str = "vantage_server::service::media_store";

/// Errors raised by media validation and storage.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The file name carries no extension or one outside the allowlist.
    #[error("file type is not allowed; allowed extensions: {}", MediaStore::ALLOWED_EXTENSIONS.join(", "))]
    UnsupportedType,

    /// The upload exceeds the configured size cap.
    #[error("file of {size} bytes exceeds the {limit} byte limit")]
    TooLarge {
        /// Size of the rejected upload in bytes.
        size: u64,
        /// Configured cap in bytes.
        limit: u64,
    },

    /// Reading or writing the media directory failed.
    #[error("media storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Stores uploaded media files on local disk.
///
/// Cloning is cheap; all clones share the same root directory and size cap.
#[derive(Debug, Clone)]
pub struct MediaStore {
    inner: Arc<MediaStoreInner>,
}

#[derive(Debug)]
struct MediaStoreInner {
    root: PathBuf,
    max_bytes: u64,
}

impl MediaStore {
    /// File extensions accepted for upload.
    pub const ALLOWED_EXTENSIONS: &[&str] =
        &["jpg", "jpeg", "png", "gif", "webp", "mp4", "avi", "mov"];
    /// Default upload size cap: 10 MiB.
    pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

    /// Creates a media store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            inner: Arc::new(MediaStoreInner {
                root: root.into(),
                max_bytes,
            }),
        }
    }

    /// Returns the configured upload size cap in bytes.
    #[inline]
    pub fn max_bytes(&self) -> u64 {
        self.inner.max_bytes
    }

    /// Returns the root directory files are written to.
    #[inline]
    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// Validates an upload against the extension allowlist and size cap.
    ///
    /// # Errors
    ///
    /// - [`MediaError::UnsupportedType`] for a missing or disallowed extension
    /// - [`MediaError::TooLarge`] when `size` exceeds the cap
    pub fn validate(&self, original_name: &str, size: u64) -> Result<(), MediaError> {
        let Some(extension) = Self::extension(original_name) else {
            return Err(MediaError::UnsupportedType);
        };
        if !Self::ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(MediaError::UnsupportedType);
        }

        if size > self.inner.max_bytes {
            return Err(MediaError::TooLarge {
                size,
                limit: self.inner.max_bytes,
            });
        }

        Ok(())
    }

    /// Classifies the media kind from the original file name.
    pub fn classify(original_name: &str) -> MediaKind {
        Self::extension(original_name)
            .map(|extension| MediaKind::from_extension(&extension))
            .unwrap_or_default()
    }

    /// Generates a collision-free on-disk name preserving the extension.
    pub fn unique_file_name(original_name: &str) -> String {
        let unique_id = Uuid::new_v4();
        match Self::extension(original_name) {
            Some(extension) => format!("{}.{}", unique_id, extension),
            None => unique_id.to_string(),
        }
    }

    /// Returns the public URL path a stored file is served under.
    pub fn public_url(&self, file_name: &str) -> String {
        format!("/uploads/properties/{}", file_name)
    }

    /// Writes the file bytes under the store root.
    ///
    /// Creates the root directory if it does not exist yet. Returns the full
    /// path of the written file.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Io`] on any filesystem failure.
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, MediaError> {
        tokio::fs::create_dir_all(&self.inner.root).await?;

        let path = self.inner.root.join(file_name);
        tokio::fs::write(&path, bytes).await?;

        tracing::debug!(
            target: TRACING_TARGET,
            file_name = %file_name,
            bytes = bytes.len(),
            "stored media file"
        );

        Ok(path)
    }

    /// Removes a stored file from disk.
    ///
    /// Removing a file that is already gone is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Io`] on any other filesystem failure.
    pub async fn remove(&self, file_name: &str) -> Result<(), MediaError> {
        let path = self.inner.root.join(file_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    file_name = %file_name,
                    error = %e,
                    "failed to remove media file"
                );
                Err(MediaError::Io(e))
            }
        }
    }

    fn extension(file_name: &str) -> Option<String> {
        Path::new(file_name)
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> MediaStore {
        MediaStore::new(dir, MediaStore::DEFAULT_MAX_BYTES)
    }

    #[test]
    fn allowlist_validation() {
        let store = MediaStore::new("/tmp/unused", 100);

        assert!(store.validate("kitchen.jpg", 50).is_ok());
        assert!(store.validate("tour.MOV", 50).is_ok());
        assert!(matches!(
            store.validate("malware.exe", 50),
            Err(MediaError::UnsupportedType)
        ));
        assert!(matches!(
            store.validate("no_extension", 50),
            Err(MediaError::UnsupportedType)
        ));
    }

    #[test]
    fn size_cap_validation() {
        let store = MediaStore::new("/tmp/unused", 100);

        assert!(store.validate("ok.png", 100).is_ok());
        assert!(matches!(
            store.validate("big.png", 101),
            Err(MediaError::TooLarge { size: 101, limit: 100 })
        ));
    }

    #[test]
    fn classification_follows_extension() {
        assert_eq!(MediaStore::classify("a.jpeg"), MediaKind::Image);
        assert_eq!(MediaStore::classify("b.mp4"), MediaKind::Video);
        assert_eq!(MediaStore::classify("weird"), MediaKind::Other);
    }

    #[test]
    fn unique_names_preserve_extension() {
        let name1 = MediaStore::unique_file_name("photo.JPG");
        let name2 = MediaStore::unique_file_name("photo.JPG");

        assert_ne!(name1, name2);
        assert!(name1.ends_with(".jpg"));
    }

    #[tokio::test]
    async fn save_and_remove_round_trip() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = store_in(dir.path());

        let path = store.save("test.png", b"not really a png").await?;
        assert!(path.exists());
        assert_eq!(std::fs::read(&path)?, b"not really a png");

        store.remove("test.png").await?;
        assert!(!path.exists());

        // Removing again is fine
        store.remove("test.png").await?;
        Ok(())
    }

    #[test]
    fn public_url_is_stable() {
        let store = MediaStore::new("/srv/uploads", 10);
        assert_eq!(
            store.public_url("abc.webp"),
            "/uploads/properties/abc.webp"
        );
    }
}
