use super::models::{FileSystem, Payload};
use anyhow::{Context, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;

const FALLBACK_MIME: &str = "application/octet-stream";

impl FileSystem {
    /// Reads a whole file into memory, keeping its file name for the upload
    pub async fn read_payload<P: AsRef<Path>>(path: P) -> Result<Payload> {
        let path = path.as_ref();
        let abs_path = Self::get_absolute_path(path)?;

        let filename = abs_path
            .file_name()
            .context("Path has no file name")?
            .to_string_lossy()
            .to_string();

        let data = fs::read(&abs_path)
            .await
            .with_context(|| format!("Failed to read file: {}", abs_path.display()))?;

        tracing::debug!("    Read: {} ({} bytes)", abs_path.display(), data.len());

        Ok(Payload {
            filename,
            bytes: Bytes::from(data),
        })
    }

    /// True if the path points at an existing regular file
    pub async fn is_file<P: AsRef<Path>>(path: P) -> bool {
        fs::metadata(path.as_ref())
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    /// MIME type guessed from the file extension
    pub fn mime_type(filename: &str) -> String {
        mime_guess::from_path(filename)
            .first_raw()
            .unwrap_or(FALLBACK_MIME)
            .to_string()
    }

    fn get_absolute_path(path: &Path) -> Result<PathBuf> {
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        Ok(abs_path)
    }

    pub fn get_absolute_path_string(path: &str) -> Result<String> {
        let path_buf = PathBuf::from(path);
        let abs = Self::get_absolute_path(&path_buf)?;
        Ok(abs.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        std::fs::write(&path, b"RIFF....WAVE").unwrap();

        let payload = FileSystem::read_payload(&path).await.unwrap();
        assert_eq!(payload.filename, "clip.wav");
        assert_eq!(payload.bytes.as_ref(), b"RIFF....WAVE");
    }

    #[tokio::test]
    async fn test_read_payload_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileSystem::read_payload(dir.path().join("missing.bin")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, b"a").unwrap();

        assert!(FileSystem::is_file(&path).await);
        assert!(!FileSystem::is_file(dir.path()).await);
        assert!(!FileSystem::is_file(dir.path().join("b.txt")).await);
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(FileSystem::mime_type("cat.png"), "image/png");
        assert_eq!(FileSystem::mime_type("blob"), "application/octet-stream");
    }
}
