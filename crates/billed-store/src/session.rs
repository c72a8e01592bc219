use crate::error::Result;
use crate::traits::SessionStore;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Session store persisted as a JSON object in one file under the data dir.
///
/// Missing file reads as an empty store; every `set` rewrites the file.
/// One active process at a time is assumed, matching the one-browser-tab
/// model of the original.
pub struct FileSessionStore {
    path: PathBuf,
    cells: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    pub fn open(path: &Path) -> Result<Self> {
        let cells = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let object: Map<String, Value> = serde_json::from_str(&content)?;
            object
                .into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(FileSessionStore {
            path: path.to_path_buf(),
            cells: Mutex::new(cells),
        })
    }

    fn save(&self, cells: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let object: Map<String, Value> = cells
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        std::fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(object))?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut cells = self.cells.lock().unwrap_or_else(|e| e.into_inner());
        cells.insert(key.to_string(), value.to_string());
        self.save(&cells)
    }
}

/// Volatile session store for isolated tests.
#[derive(Default)]
pub struct MemorySessionStore {
    cells: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a `"user"` session payload.
    pub fn with_user(payload: &str) -> Self {
        let store = Self::new();
        store
            .cells
            .lock()
            .unwrap()
            .insert("user".to_string(), payload.to_string());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.cells
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_round_trips_across_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");

        {
            let store = FileSessionStore::open(&path).unwrap();
            store
                .set("user", r#"{"type":"Employee","email":"b@b"}"#)
                .unwrap();
        }

        let store = FileSessionStore::open(&path).unwrap();
        assert_eq!(
            store.get("user").as_deref(),
            Some(r#"{"type":"Employee","email":"b@b"}"#)
        );
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileSessionStore::open(&temp.path().join("none.json")).unwrap();
        assert_eq!(store.get("user"), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let store = MemorySessionStore::new();
        store.set("user", "first").unwrap();
        store.set("user", "second").unwrap();
        assert_eq!(store.get("user").as_deref(), Some("second"));
    }
}
