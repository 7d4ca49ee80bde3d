use medis_types::{MedisError, MedisResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Raw keyed string storage, the shape of the browser storage this
/// prototype stands in for. Values are opaque at this layer.
pub trait BlobStore: Send + Sync {
    fn read(&self, key: &str) -> MedisResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> MedisResult<()>;

    fn remove(&self, key: &str) -> MedisResult<()>;
}

pub struct FileBlobStore {
    base_dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(base_dir: impl AsRef<Path>) -> MedisResult<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        if !base_dir.exists() {
            std::fs::create_dir_all(&base_dir)
                .map_err(|e| MedisError::Storage(e.to_string()))?;
        }

        Ok(Self { base_dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> MedisResult<Option<String>> {
        let path = self.blob_path(key);

        if !path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| MedisError::Storage(format!("Failed to read blob: {}", e)))
    }

    fn write(&self, key: &str, value: &str) -> MedisResult<()> {
        let path = self.blob_path(key);

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, value)
            .map_err(|e| MedisError::Storage(format!("Failed to write blob: {}", e)))?;

        std::fs::rename(&temp_path, &path)
            .map_err(|e| MedisError::Storage(format!("Failed to save blob: {}", e)))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> MedisResult<()> {
        let path = self.blob_path(key);

        if path.exists() {
            std::fs::remove_file(&path)
                .map_err(|e| MedisError::Storage(format!("Failed to delete blob: {}", e)))?;
        }

        Ok(())
    }
}

pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> MedisResult<Option<String>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| MedisError::Storage("Lock poisoned".into()))?;

        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> MedisResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| MedisError::Storage("Lock poisoned".into()))?;

        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> MedisResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| MedisError::Storage("Lock poisoned".into()))?;

        blobs.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("medis-blob-test-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryBlobStore::new();

        assert_eq!(store.read("missing").unwrap(), None);

        store.write("key", "value").unwrap();
        assert_eq!(store.read("key").unwrap().as_deref(), Some("value"));

        store.remove("key").unwrap();
        assert_eq!(store.read("key").unwrap(), None);
    }

    #[test]
    fn test_file_store_roundtrip_and_reopen() {
        let dir = temp_dir();
        let store = FileBlobStore::new(&dir).unwrap();

        store.write("key", "{\"a\":1}").unwrap();
        assert_eq!(store.read("key").unwrap().as_deref(), Some("{\"a\":1}"));

        // A fresh handle over the same directory sees the same blobs.
        let reopened = FileBlobStore::new(&dir).unwrap();
        assert_eq!(reopened.read("key").unwrap().as_deref(), Some("{\"a\":1}"));

        reopened.remove("key").unwrap();
        assert_eq!(store.read("key").unwrap(), None);

        // Removing an absent key is not an error.
        store.remove("key").unwrap();

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
