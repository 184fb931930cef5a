//! Key/value draft persistence, shaped like browser local storage.

mod draft_keys;
mod file;

pub use draft_keys::{keys, load_draft, save_draft};
pub use file::FileStore;

use anyhow::Result;
use std::collections::BTreeMap;

pub trait DraftStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&mut self, key: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    /// Apply several writes at once; `None` removes the key.
    fn apply(&mut self, entries: &[(&str, Option<String>)]) -> Result<()> {
        for (key, value) in entries {
            match value {
                Some(value) => self.set_item(key, value)?,
                None => self.remove_item(key)?,
            }
        }
        Ok(())
    }
}

impl<S: DraftStore + ?Sized> DraftStore for Box<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn apply(&mut self, entries: &[(&str, Option<String>)]) -> Result<()> {
        (**self).apply(entries)
    }
}

/// Non-persistent store (tests and `--no-persist`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl DraftStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_behaves_like_local_storage() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("name"), None);

        store.set_item("name", "Ada").unwrap();
        assert_eq!(store.get_item("name").as_deref(), Some("Ada"));

        store.set_item("name", "Grace").unwrap();
        assert_eq!(store.get_item("name").as_deref(), Some("Grace"));

        store.remove_item("name").unwrap();
        assert_eq!(store.get_item("name"), None);
    }

    #[test]
    fn apply_sets_and_removes() {
        let mut store = MemoryStore::new();
        store.set_item("gone", "x").unwrap();
        store
            .apply(&[("kept", Some("1".to_string())), ("gone", None)])
            .unwrap();
        assert_eq!(store.get_item("kept").as_deref(), Some("1"));
        assert_eq!(store.get_item("gone"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn DraftStore> = Box::new(MemoryStore::new());
        store.set_item("email", "a@b.c").unwrap();
        store.clear().unwrap();
        assert_eq!(store.get_item("email"), None);
    }
}
