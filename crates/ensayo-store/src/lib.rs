//! Persistent store for saved test records
//!
//! A single pretty-printed JSON file (`ensayos.json`) holding every saved
//! test, keyed by a sequential numeric id. Written back on every change.

use chrono::{DateTime, Utc};
use ensayo_types::{Result, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Which form a stored record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnsayoKind {
    Humedad,
    Cbr,
}

impl std::fmt::Display for EnsayoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnsayoKind::Humedad => write!(f, "humedad"),
            EnsayoKind::Cbr => write!(f, "cbr"),
        }
    }
}

/// Entry in the test store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsayoEntry {
    pub id: u64,
    pub kind: EnsayoKind,

    /// Sample code, for listings
    pub muestra: String,

    /// Work order code, for listings
    pub numero_ot: String,

    /// Headline result, when computable at save time
    #[serde(default)]
    pub contenido_humedad: Option<f64>,

    /// The full form record as saved
    pub payload: Value,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persistent store for saved tests
pub struct EnsayoStore {
    store_path: PathBuf,
    entries: HashMap<u64, EnsayoEntry>,
}

impl EnsayoStore {
    /// Create or load a store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("ensayos.json");

        let entries = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, entries })
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.entries)?;
        Ok(())
    }

    fn next_id(&self) -> u64 {
        self.entries.keys().max().copied().unwrap_or(0) + 1
    }

    /// Save a new test record, returning its id
    pub fn insert(
        &mut self,
        kind: EnsayoKind,
        muestra: String,
        numero_ot: String,
        contenido_humedad: Option<f64>,
        payload: Value,
    ) -> Result<u64> {
        let id = self.next_id();
        let now = Utc::now();
        let entry = EnsayoEntry {
            id,
            kind,
            muestra,
            numero_ot,
            contenido_humedad,
            payload,
            created_at: now,
            updated_at: now,
        };
        self.entries.insert(id, entry);
        self.save()?;
        Ok(id)
    }

    /// Replace the payload of an existing record
    pub fn update(
        &mut self,
        id: u64,
        muestra: String,
        numero_ot: String,
        contenido_humedad: Option<f64>,
        payload: Value,
    ) -> Result<()> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        entry.muestra = muestra;
        entry.numero_ot = numero_ot;
        entry.contenido_humedad = contenido_humedad;
        entry.payload = payload;
        entry.updated_at = Utc::now();
        self.save()
    }

    /// Look up a single record
    pub fn get(&self, id: u64) -> Option<&EnsayoEntry> {
        self.entries.get(&id)
    }

    /// All records, newest id first
    pub fn list(&self) -> Vec<&EnsayoEntry> {
        let mut entries: Vec<&EnsayoEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| b.id.cmp(&a.id));
        entries
    }

    /// Remove a record
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.entries
            .remove(&id)
            .ok_or(StoreError::NotFound(id))?;
        self.save()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample_payload() -> Value {
        json!({ "muestra": "123-SU-25", "numero_ot": "45-25" })
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let dir = tempdir().unwrap();
        let mut store = EnsayoStore::open(dir.path().to_path_buf()).unwrap();

        let first = store
            .insert(
                EnsayoKind::Humedad,
                "123-SU-25".into(),
                "45-25".into(),
                Some(33.33),
                sample_payload(),
            )
            .unwrap();
        let second = store
            .insert(
                EnsayoKind::Cbr,
                "124-SU-25".into(),
                "46-25".into(),
                None,
                sample_payload(),
            )
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.list()[0].id, 2);
    }

    #[test]
    fn test_reopen_preserves_entries() {
        let dir = tempdir().unwrap();
        {
            let mut store = EnsayoStore::open(dir.path().to_path_buf()).unwrap();
            store
                .insert(
                    EnsayoKind::Humedad,
                    "123-SU-25".into(),
                    "45-25".into(),
                    Some(33.33),
                    sample_payload(),
                )
                .unwrap();
        }

        let store = EnsayoStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.len(), 1);
        let entry = store.get(1).unwrap();
        assert_eq!(entry.kind, EnsayoKind::Humedad);
        assert_eq!(entry.contenido_humedad, Some(33.33));
    }

    #[test]
    fn test_update_replaces_payload() {
        let dir = tempdir().unwrap();
        let mut store = EnsayoStore::open(dir.path().to_path_buf()).unwrap();
        let id = store
            .insert(
                EnsayoKind::Humedad,
                "123-SU-25".into(),
                "45-25".into(),
                None,
                sample_payload(),
            )
            .unwrap();

        store
            .update(
                id,
                "123-SU-25".into(),
                "45-25".into(),
                Some(12.5),
                json!({ "contenido_humedad": 12.5 }),
            )
            .unwrap();

        let entry = store.get(id).unwrap();
        assert_eq!(entry.contenido_humedad, Some(12.5));
        assert!(entry.updated_at >= entry.created_at);
    }

    #[test]
    fn test_missing_id_errors() {
        let dir = tempdir().unwrap();
        let mut store = EnsayoStore::open(dir.path().to_path_buf()).unwrap();
        assert!(store.get(99).is_none());
        assert!(store.delete(99).is_err());
    }
}
