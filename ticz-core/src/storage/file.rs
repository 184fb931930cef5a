use super::DraftStore;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON-file backed store. Every mutation rewrites the file atomically.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; one that is
    /// not valid JSON is moved aside to `<name>.corrupt` and the store starts
    /// empty. Read failures are returned and leave the file in place.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = read_content(&path)?;
        let parsed = content
            .as_deref()
            .map(serde_json::from_str::<BTreeMap<String, String>>);
        let items = match parsed {
            None => BTreeMap::new(),
            Some(Ok(items)) => items,
            Some(Err(err)) => {
                let backup = sibling_path(&path, "corrupt");
                log::warn!(
                    "⚠️ Discarding unparseable draft storage {} ({}); moved to {}",
                    path.display(),
                    err,
                    backup.display()
                );
                fs::rename(&path, &backup).with_context(|| {
                    format!("Failed to move aside draft storage: {}", path.display())
                })?;
                BTreeMap::new()
            }
        };
        log::debug!("Opened draft storage {} ({} keys)", path.display(), items.len());
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        save_items_atomic(&self.path, &self.items)
    }
}

impl DraftStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.persist()
    }

    fn apply(&mut self, entries: &[(&str, Option<String>)]) -> Result<()> {
        for (key, value) in entries {
            match value {
                Some(value) => {
                    self.items.insert(key.to_string(), value.clone());
                }
                None => {
                    self.items.remove(*key);
                }
            }
        }
        self.persist()
    }
}

/// Raw file contents; `None` when there is nothing stored yet.
fn read_content(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft storage: {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(content))
}

fn save_items_atomic(path: &Path, items: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory: {}", parent.display())
            })?;
        }
    }

    let tmp_path = sibling_path(path, "tmp");
    let payload = serde_json::to_string_pretty(items).context("Failed to serialize draft")?;

    let mut file = File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp storage file: {}", tmp_path.display()))?;
    file.write_all(payload.as_bytes())
        .context("Failed to write draft storage")?;
    file.sync_all().context("Failed to flush draft storage")?;

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to atomically replace draft storage: {}",
            path.display()
        )
    })?;

    Ok(())
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("local-storage.json");
    path.with_file_name(format!("{}.{}", file_name, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn items_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("local-storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set_item("name", "Ada Lovelace").unwrap();
        store.set_item("email", "ada@example.com").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("name").as_deref(), Some("Ada Lovelace"));
        assert_eq!(reopened.get_item("email").as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn clear_empties_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("local-storage.json");
        let mut store = FileStore::open(&path).unwrap();
        store.set_item("name", "Ada").unwrap();
        store.clear().unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("name"), None);
        assert!(!sibling_path(&path, "tmp").exists());
    }

    #[test]
    fn corrupt_file_is_moved_aside() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("local-storage.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get_item("name"), None);
        assert!(sibling_path(&path, "corrupt").exists());
        assert!(!path.exists());
    }

    #[test]
    fn read_error_fails_open_and_keeps_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("local-storage.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "keep").unwrap();

        assert!(FileStore::open(&path).is_err());
        assert!(path.join("keep.txt").exists());
        assert!(!sibling_path(&path, "corrupt").exists());
    }
}
