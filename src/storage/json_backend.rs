use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use super::{KeyValueBackend, Result};

const BLOB_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed key-value storage keeping one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{}", canonical_key(key), BLOB_EXTENSION))
    }
}

impl KeyValueBackend for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.key_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.key_path(key);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "stored blob");
        Ok(())
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "blob".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join("storage")).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn missing_key_reads_as_none() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.get("Items").expect("read key").is_none());
    }

    #[test]
    fn set_then_get_returns_same_bytes() {
        let (mut storage, _guard) = storage_with_temp_dir();
        storage.set("Items", b"[1,2,3]").expect("write key");
        let loaded = storage.get("Items").expect("read key");
        assert_eq!(loaded.as_deref(), Some(&b"[1,2,3]"[..]));
        assert!(!tmp_path(&storage.key_path("Items")).exists());
    }

    #[test]
    fn set_overwrites_prior_value() {
        let (mut storage, _guard) = storage_with_temp_dir();
        storage.set("Items", b"first").expect("first write");
        storage.set("Items", b"second").expect("second write");
        assert_eq!(
            storage.get("Items").expect("read key").as_deref(),
            Some(&b"second"[..])
        );
    }

    #[test]
    fn keys_map_to_sanitized_file_names() {
        let (storage, _guard) = storage_with_temp_dir();
        let path = storage.key_path("My Items!");
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("my_items_.json")
        );
        assert_eq!(canonical_key("  "), "blob");
    }
}
