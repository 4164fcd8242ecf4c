//! Durable store for full inference results, keyed by message id.
//!
//! Each result is written to its own file before the reply is assembled,
//! so the attachment fallback always reads the result that belongs to the
//! triggering message, even with multiple inferences queued.

use mimus_core::error::MimusError;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// On-disk key-value store: one UTF-8 `.md` file per message id.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the artifact for a given message id.
    pub fn path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.md"))
    }

    /// Write (truncate and rewrite) the artifact for `id`.
    pub async fn write(&self, id: Uuid, text: &str) -> Result<PathBuf, MimusError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| artifact_err(&self.dir, "create dir", e))?;
        let path = self.path(id);
        tokio::fs::write(&path, text)
            .await
            .map_err(|e| artifact_err(&path, "write", e))?;
        Ok(path)
    }

    /// Read the artifact for `id` back verbatim.
    pub async fn read(&self, id: Uuid) -> Result<String, MimusError> {
        let path = self.path(id);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| artifact_err(&path, "read", e))
    }
}

fn artifact_err(path: &Path, op: &str, e: std::io::Error) -> MimusError {
    MimusError::Artifact(format!("failed to {op} {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_then_read_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path().join("artifacts"));
        let id = Uuid::new_v4();

        let path = store.write(id, "full result text").await.unwrap();
        assert_eq!(path, store.path(id));
        assert_eq!(store.read(id).await.unwrap(), "full result text");
    }

    #[tokio::test]
    async fn test_rewrite_truncates_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path());
        let id = Uuid::new_v4();

        store.write(id, "a much longer first result").await.unwrap();
        store.write(id, "short").await.unwrap();
        assert_eq!(store.read(id).await.unwrap(), "short");
    }

    #[tokio::test]
    async fn test_distinct_ids_do_not_collide() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path());
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.write(a, "result a").await.unwrap();
        store.write(b, "result b").await.unwrap();
        assert_eq!(store.read(a).await.unwrap(), "result a");
        assert_eq!(store.read(b).await.unwrap(), "result b");
    }

    #[tokio::test]
    async fn test_read_missing_artifact_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path());
        assert!(store.read(Uuid::new_v4()).await.is_err());
    }
}
