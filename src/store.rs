// src/store.rs
use crate::error::{StoreError, StoreResult};
use crate::models::{GeneratedRecord, PasswordHistory};
use log;
use std::fs;
use std::path::{Path, PathBuf};

/// History store over a single JSON document.
///
/// Every operation re-loads the full document, mutates it in memory and
/// rewrites it whole; no cache is kept between calls. The file is assumed to
/// have a single writer: two processes mutating the same history can lose
/// updates.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a store over the given history file. The file does not need
    /// to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HistoryStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full history. A missing file is an empty history; a file
    /// that exists but cannot be decoded is an error.
    pub fn load(&self) -> StoreResult<PasswordHistory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("History file {:?} not found, starting empty.", self.path);
                return Ok(PasswordHistory::new());
            }
            Err(e) => {
                log::error!("Failed to read history file {:?}: {}", self.path, e);
                return Err(StoreError::Io(e));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            let msg = format!("{:?}: {}", self.path, e);
            log::error!("History file is corrupt: {}", msg);
            StoreError::CorruptHistory(msg)
        })
    }

    /// Appends a record at the end of the history and persists.
    pub fn append(&self, record: GeneratedRecord) -> StoreResult<()> {
        let mut history = self.load()?;
        log::info!("Appending record {} (purpose: '{}') to history.", record.id, record.purpose);
        history.add_record(record);
        self.persist(&history)
    }

    /// Replaces the first record whose id matches, keeping its position.
    pub fn update(&self, id: &str, record: GeneratedRecord) -> StoreResult<()> {
        let mut history = self.load()?;
        match history.records.iter().position(|r| r.id == id) {
            Some(index) => {
                log::info!("Updating record {} at position {}.", id, index);
                history.records[index] = record;
                self.persist(&history)
            }
            None => {
                log::warn!("Update failed: no record with id '{}'.", id);
                Err(StoreError::RecordNotFound { id: id.to_string() })
            }
        }
    }

    /// Removes the first record whose id matches, preserving the relative
    /// order of the remaining records.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut history = self.load()?;
        match history.records.iter().position(|r| r.id == id) {
            Some(index) => {
                let removed = history.records.remove(index);
                log::info!("Deleted record {} (purpose: '{}').", removed.id, removed.purpose);
                self.persist(&history)
            }
            None => {
                log::warn!("Delete failed: no record with id '{}'.", id);
                Err(StoreError::RecordNotFound { id: id.to_string() })
            }
        }
    }

    /// Replaces the durable copy with an empty history unconditionally.
    pub fn clear(&self) -> StoreResult<()> {
        log::info!("Clearing history at {:?}.", self.path);
        self.persist(&PasswordHistory::new())
    }

    /// Writes the full document to a sibling temp file, then renames it over
    /// the target. A failed write never leaves a partial durable copy.
    fn persist(&self, history: &PasswordHistory) -> StoreResult<()> {
        let data = serde_json::to_vec_pretty(history).map_err(|e| {
            let msg = format!("{}", e);
            log::error!("Failed to serialize history: {}", msg);
            StoreError::Serialization(msg)
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    log::error!("Failed to create history directory {:?}: {}", parent, e);
                    StoreError::Io(e)
                })?;
            }
        }

        let tmp_path = match self.path.file_name() {
            Some(name) => {
                let mut tmp_name = name.to_os_string();
                tmp_name.push(".tmp");
                self.path.with_file_name(tmp_name)
            }
            None => {
                let e = std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("history path {:?} has no file name", self.path),
                );
                log::error!("{}", e);
                return Err(StoreError::Io(e));
            }
        };

        fs::write(&tmp_path, data).map_err(|e| {
            log::error!("Failed to write temp history file {:?}: {}", tmp_path, e);
            StoreError::Io(e)
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            log::error!("Failed to move {:?} into place at {:?}: {}", tmp_path, self.path, e);
            // Best effort removal of the orphaned temp file.
            let _ = fs::remove_file(&tmp_path);
            StoreError::Io(e)
        })?;

        log::debug!("History persisted to {:?} ({} records).", self.path, history.records.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator;
    use crate::models::PasswordConfig;
    use crate::random::OsRandom;
    use tempfile::tempdir;

    fn test_record(purpose: &str) -> GeneratedRecord {
        GeneratedRecord::new(
            "s3cr3t-pass".to_string(),
            purpose,
            PasswordConfig::default(),
        )
    }

    fn test_store(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::new(dir.path().join("history.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty_history() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        let history = store.load().unwrap();
        assert!(history.records.is_empty());
    }

    #[test]
    fn test_append_then_load_single_record() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        let record = test_record("Email");

        store.append(record.clone()).unwrap();

        let history = store.load().unwrap();
        assert_eq!(history.records, vec![record]);
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        let first = test_record("first");
        let second = test_record("second");
        let third = test_record("third");

        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();
        store.append(third.clone()).unwrap();

        let history = store.load().unwrap();
        assert_eq!(history.records, vec![first, second, third]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        let first = test_record("first");
        let second = test_record("second");
        let third = test_record("third");
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();
        store.append(third.clone()).unwrap();

        let mut updated = second.clone();
        updated.purpose = "renamed".to_string();
        store.update(&second.id, updated.clone()).unwrap();

        let history = store.load().unwrap();
        assert_eq!(history.records, vec![first, updated, third]);
    }

    #[test]
    fn test_update_missing_id_is_record_not_found() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        store.append(test_record("only")).unwrap();

        let result = store.update("no-such-id", test_record("replacement"));
        match result {
            Err(StoreError::RecordNotFound { id }) => assert_eq!(id, "no-such-id"),
            other => panic!("expected RecordNotFound, got {:?}", other),
        }
        // Failed update must not touch the durable copy.
        assert_eq!(store.load().unwrap().records.len(), 1);
    }

    #[test]
    fn test_delete_preserves_remaining_order() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        let first = test_record("first");
        let second = test_record("second");
        let third = test_record("third");
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();
        store.append(third.clone()).unwrap();

        store.delete(&second.id).unwrap();

        let history = store.load().unwrap();
        assert_eq!(history.records, vec![first, third]);
    }

    #[test]
    fn test_delete_missing_id_is_record_not_found() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        match store.delete("ghost") {
            Err(StoreError::RecordNotFound { id }) => assert_eq!(id, "ghost"),
            other => panic!("expected RecordNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_clear_empties_history() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        store.append(test_record("a")).unwrap();
        store.append(test_record("b")).unwrap();

        store.clear().unwrap();
        assert!(store.load().unwrap().records.is_empty());

        // Clearing an already empty history is fine.
        store.clear().unwrap();
        assert!(store.load().unwrap().records.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_reported_not_repaired() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        fs::write(store.path(), b"{ this is not json").unwrap();

        match store.load() {
            Err(StoreError::CorruptHistory(_)) => {}
            other => panic!("expected CorruptHistory, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_with_unicode_purpose() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        let record = test_record("банк / 銀行 / 🏦");
        store.append(record.clone()).unwrap();

        let history = store.load().unwrap();
        assert_eq!(history.records, vec![record]);
    }

    #[test]
    fn test_wire_format_field_names_are_stable() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        store.append(test_record("Email")).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        for field in [
            "\"passwords\"",
            "\"id\"",
            "\"password\"",
            "\"purpose\"",
            "\"config\"",
            "\"length\"",
            "\"use_lower\"",
            "\"use_upper\"",
            "\"use_digits\"",
            "\"use_symbols\"",
            "\"created_at\"",
        ] {
            assert!(raw.contains(field), "missing field {} in {}", field, raw);
        }
    }

    #[test]
    fn test_pre_surrogate_id_files_still_load() {
        // Histories written before ids existed use the "passwords" top-level
        // key and carry only the original four record fields.
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        let legacy = r#"{
  "passwords": [
    {
      "password": "abc123xy",
      "purpose": "Email",
      "config": {
        "length": 8,
        "use_lower": true,
        "use_upper": false,
        "use_digits": true,
        "use_symbols": false
      },
      "created_at": "2024-05-01T10:00:00Z"
    }
  ]
}"#;
        fs::write(store.path(), legacy).unwrap();

        let history = store.load().unwrap();
        assert_eq!(history.records.len(), 1);
        assert_eq!(history.records[0].purpose, "Email");
        assert_eq!(history.records[0].password, "abc123xy");
        assert_eq!(history.records[0].id, "");
    }

    #[test]
    fn test_generate_and_append_scenario() {
        // End-to-end: {length=8, lower, digits}, purpose "Email" lands at the
        // end of the history with the exact config used.
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        store.append(test_record("earlier")).unwrap();

        let config = PasswordConfig {
            length: 8,
            use_lower: true,
            use_upper: false,
            use_digits: true,
            use_symbols: false,
        };
        let password = generator::generate(&config, &mut OsRandom).unwrap();
        store
            .append(GeneratedRecord::new(password.clone(), "Email", config.clone()))
            .unwrap();

        let history = store.load().unwrap();
        let last = history.records.last().unwrap();
        assert_eq!(last.purpose, "Email");
        assert_eq!(last.password, password);
        assert_eq!(last.config, config);
        assert_eq!(password.len(), 8);
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
