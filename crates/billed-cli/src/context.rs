use crate::config::{Config, StoreBackend};
use anyhow::Result;
use billed_store::{Database, FileSessionStore, MemoryStore, RemoteStore};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lazily-initialized handles shared by the command handlers.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    store: OnceCell<Option<Arc<dyn RemoteStore>>>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            store: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("billed.db")
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    pub fn session_store(&self) -> Result<FileSessionStore> {
        Ok(FileSessionStore::open(&self.session_path())?)
    }

    /// The configured bill store. `None` is the explicit no-backing-store
    /// mode, not a failure.
    pub fn remote_store(&self) -> Result<Option<Arc<dyn RemoteStore>>> {
        self.store
            .get_or_try_init(|| -> Result<Option<Arc<dyn RemoteStore>>> {
                match self.config()?.store.backend {
                    StoreBackend::Sqlite => {
                        let db = Database::open(&self.db_path(), &self.uploads_dir())?;
                        Ok(Some(Arc::new(db)))
                    }
                    StoreBackend::Memory => Ok(Some(Arc::new(MemoryStore::new()))),
                    StoreBackend::None => Ok(None),
                }
            })
            .cloned()
    }
}
