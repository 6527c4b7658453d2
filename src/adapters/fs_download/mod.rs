// Filesystem download adapter - Stores downloaded files in a directory

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use crate::utils::filename::{FilenameUtils, DEFAULT_FILENAME};

/// Writes files into a download directory without overwriting existing ones
pub struct FsDownloadAdapter {
    download_dir: PathBuf,
}

impl FsDownloadAdapter {
    /// Create an adapter targeting `download_dir` (created on first save)
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// `name`, or `stem (n).ext` for the first `n` that does not exist yet
    async fn unique_path(&self, name: &str) -> Result<PathBuf, DomainError> {
        let candidate = self.download_dir.join(name);
        if !Self::exists(&candidate).await? {
            return Ok(candidate);
        }

        let path = Path::new(name);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| name.to_string());
        let extension = path.extension().map(|e| e.to_string_lossy().to_string());

        for n in 1..10_000u32 {
            let file_name = match &extension {
                Some(ext) => format!("{} ({}).{}", stem, n, ext),
                None => format!("{} ({})", stem, n),
            };
            let candidate = self.download_dir.join(file_name);
            if !Self::exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(DomainError::FsFail(format!(
            "No free file name for '{}' in {}",
            name,
            self.download_dir.display()
        )))
    }

    async fn exists(path: &Path) -> Result<bool, DomainError> {
        tokio::fs::try_exists(path)
            .await
            .map_err(|e| DomainError::FsFail(format!("Failed to check {}: {}", path.display(), e)))
    }
}

#[async_trait]
impl DownloadSink for FsDownloadAdapter {
    async fn save(&self, file: &DownloadedFile) -> Result<PathBuf, DomainError> {
        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(|e| DomainError::FsFail(format!("Failed to create download directory: {}", e)))?;

        let sanitized = FilenameUtils::sanitize(&file.filename);
        let name = if sanitized.is_empty() {
            DEFAULT_FILENAME
        } else {
            sanitized.as_str()
        };

        let path = self.unique_path(name).await?;
        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|e| DomainError::FsFail(format!("Failed to write {}: {}", path.display(), e)))?;

        info!(path = %path.display(), size = file.size(), "download saved");
        Ok(path)
    }
}
