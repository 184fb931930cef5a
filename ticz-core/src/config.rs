use crate::cli::Cli;
use crate::storage::{DraftStore, FileStore, MemoryStore};
use crate::ticket::DEFAULT_TICKET_FILE_NAME;
use anyhow::{Context, Result};
use std::path::PathBuf;

const STORE_FILE_NAME: &str = "local-storage.json";
const LOG_FILE_NAME: &str = "ticz.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub persist: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            persist: true,
            log_file: None,
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            persist: !cli.no_persist,
            log_file: cli.log_file.clone(),
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    /// Explicit `--log-file`, or the data-dir log.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(LOG_FILE_NAME))
    }

    pub fn default_export_path(&self) -> PathBuf {
        self.data_dir.join(DEFAULT_TICKET_FILE_NAME)
    }

    /// The draft store for this run: the JSON file, or memory with `--no-persist`.
    pub fn open_store(&self) -> Result<Box<dyn DraftStore>> {
        if !self.persist {
            log::info!("💭 Draft persistence disabled");
            return Ok(Box::new(MemoryStore::new()));
        }
        let path = self.store_path();
        let store = FileStore::open(&path)
            .with_context(|| format!("Failed to open draft store {}", path.display()))?;
        Ok(Box::new(store))
    }
}
