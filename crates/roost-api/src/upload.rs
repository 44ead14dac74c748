//! Upload gateway: turns uploaded image bytes into publicly addressable
//! URLs backed by local disk.
//!
//! File types are checked by magic bytes before anything touches disk,
//! and a batch is stored all-or-nothing: if any write fails, files
//! already written for the batch are removed and the whole upload fails.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use roost_core::{Error, Result};

/// Accepted image formats, mapped from detected MIME type to the stored
/// file extension.
fn extension_for(mime: &str) -> Option<&'static str> {
    match mime {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        _ => None,
    }
}

pub struct UploadGateway {
    dir: PathBuf,
    public_base: String,
}

impl UploadGateway {
    /// `public_base` is the URL prefix (no trailing slash) under which
    /// `/uploads/<file>` is served.
    pub fn new(dir: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_base: public_base.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the storage directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::Upload(format!("create {}: {}", self.dir.display(), e)))?;
        Ok(())
    }

    /// Store a batch of image files, returning their public URLs in
    /// input order.
    pub async fn store_batch(&self, files: Vec<Vec<u8>>) -> Result<Vec<String>> {
        // Type-check everything up front so a bad file never leaves a
        // partial batch on disk.
        let mut extensions = Vec::with_capacity(files.len());
        for data in &files {
            let ext = infer::get(data)
                .and_then(|kind| extension_for(kind.mime_type()))
                .ok_or_else(|| {
                    Error::Validation("Only JPEG and PNG images are accepted".to_string())
                })?;
            extensions.push(ext);
        }

        let mut written: Vec<PathBuf> = Vec::new();
        let mut urls = Vec::with_capacity(files.len());
        for (data, ext) in files.iter().zip(extensions) {
            let name = format!("{}.{}", Uuid::new_v4(), ext);
            let path = self.dir.join(&name);
            if let Err(e) = fs::write(&path, data).await {
                warn!(path = %path.display(), error = %e, "Upload write failed, rolling back batch");
                for stale in &written {
                    let _ = fs::remove_file(stale).await;
                }
                return Err(Error::Upload(format!("write {}: {}", path.display(), e)));
            }
            debug!(path = %path.display(), size = data.len(), "Stored image");
            written.push(path);
            urls.push(format!("{}/uploads/{}", self.public_base, name));
        }

        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Enough of each format for magic-byte detection.
    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

    fn gateway(dir: &Path) -> UploadGateway {
        UploadGateway::new(dir, "http://localhost:8000")
    }

    #[tokio::test]
    async fn test_store_batch_returns_urls_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let gw = gateway(dir.path());
        gw.ensure_dir().await.unwrap();

        let urls = gw
            .store_batch(vec![PNG.to_vec(), JPEG.to_vec()])
            .await
            .unwrap();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].starts_with("http://localhost:8000/uploads/"));
        assert!(urls[0].ends_with(".png"));
        assert!(urls[1].ends_with(".jpg"));

        // Both files landed on disk.
        let count = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_non_image_rejected_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let gw = gateway(dir.path());
        gw.ensure_dir().await.unwrap();

        let err = gw
            .store_batch(vec![PNG.to_vec(), b"plain text".to_vec()])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        // All-or-nothing: the valid PNG was not kept either.
        let count = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_write_failure_surfaces_upload_error() {
        let dir = tempfile::tempdir().unwrap();
        // Point at a directory that was never created.
        let gw = UploadGateway::new(dir.path().join("missing"), "http://localhost:8000");

        let err = gw.store_batch(vec![PNG.to_vec()]).await.unwrap_err();
        assert!(matches!(err, Error::Upload(_)));
    }
}
