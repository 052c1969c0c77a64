//! # Record Store
//!
//! Key/value persistence for saved genders.
//!
//! ## Requirements
//!
//! - One record per trimmed name, plain `"male"`/`"female"` strings
//! - Overwrite on save, no-op removal of absent keys
//! - Survives across sessions
//!
//! ## Implementation
//!
//! - [`FileStore`]: a JSON object of name/gender pairs, read once on open and
//!   rewritten whole on every mutation. The dataset is a handful of strings,
//!   so whole-file rewrites stay cheap.
//! - [`MemoryStore`]: a plain map for tests and embedders.
use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use crate::error::StoreError;

pub trait Store {
    fn get(&self, name: &str) -> Option<String>;

    fn set(&mut self, name: &str, gender: &str) -> Result<(), StoreError>;

    fn remove(&mut self, name: &str) -> Result<(), StoreError>;
}

#[derive(Default)]
pub struct MemoryStore {
    records: BTreeMap<String, String>,
}

impl Store for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        self.records.get(name).cloned()
    }

    fn set(&mut self, name: &str, gender: &str) -> Result<(), StoreError> {
        self.records.insert(name.to_string(), gender.to_string());

        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<(), StoreError> {
        self.records.remove(name);

        Ok(())
    }
}

pub struct FileStore {
    path: PathBuf,
    records: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let records = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, records })
    }

    fn flush(&self) -> Result<(), StoreError> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.records)?)?;

        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, name: &str) -> Option<String> {
        self.records.get(name).cloned()
    }

    fn set(&mut self, name: &str, gender: &str) -> Result<(), StoreError> {
        self.records.insert(name.to_string(), gender.to_string());

        self.flush()
    }

    fn remove(&mut self, name: &str) -> Result<(), StoreError> {
        if self.records.remove(name).is_some() {
            self.flush()?;
        }

        Ok(())
    }
}
