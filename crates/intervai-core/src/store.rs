//! Session persistence over a pluggable key-value backend.
//!
//! All sessions live in a single slot as one JSON array, most recent first.
//! Saving is read-modify-write of the whole array; there is no locking, so
//! two concurrent writers can lose an update.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::StoreError;
use crate::session::InterviewSession;

/// Name of the slot holding the session list.
pub const SESSIONS_KEY: &str = "intervai_sessions";

/// A store of named string slots.
pub trait KeyValueStore {
    /// Read a slot. `Ok(None)` when the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite a slot with `value`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a slot. Removing a missing slot is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend, used in tests and for throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// Directory backend: each slot is a `<key>.json` file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.slot_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.slot_path(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        // Write beside the target and rename so readers never see a partial file
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| StoreError::io(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| StoreError::io(&path, e))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.slot_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

/// Persisted interview history.
#[derive(Debug, Clone)]
pub struct SessionStore<K> {
    backend: K,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// All stored sessions, most recent first.
    ///
    /// A missing, empty, unreadable or corrupt slot reads as no sessions.
    pub fn list(&self) -> Vec<InterviewSession> {
        self.load().unwrap_or_else(|e| {
            tracing::warn!("failed to read session history: {e}");
            Vec::new()
        })
    }

    /// Like [`list`](Self::list), but backend read failures are returned.
    ///
    /// Missing, blank and corrupt slots still read as no sessions.
    pub fn load(&self) -> Result<Vec<InterviewSession>, StoreError> {
        let raw = match self.backend.read(SESSIONS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&raw) {
            Ok(sessions) => Ok(sessions),
            Err(e) => {
                tracing::warn!("ignoring corrupt session history: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Look a session up by its full id.
    pub fn get(&self, id: Uuid) -> Option<InterviewSession> {
        self.list().into_iter().find(|s| s.id == id)
    }

    /// Look a session up by full id or by a suffix such as its short id.
    ///
    /// When several sessions share the suffix the most recent one wins.
    pub fn find(&self, id_or_suffix: &str) -> Option<InterviewSession> {
        if let Ok(id) = Uuid::parse_str(id_or_suffix) {
            return self.get(id);
        }

        let needle = id_or_suffix
            .trim()
            .trim_start_matches('#')
            .to_lowercase()
            .replace('-', "");
        if needle.is_empty() {
            return None;
        }
        self.list()
            .into_iter()
            .find(|s| s.id.simple().to_string().ends_with(&needle))
    }

    /// Prepend `session` and persist the whole list.
    ///
    /// Fails without writing when the existing history cannot be read, so an
    /// I/O error never replaces it. Corrupt history is replaced.
    pub fn save(&mut self, session: InterviewSession) -> Result<(), StoreError> {
        let mut sessions = self.load()?;
        let id = session.id;
        sessions.insert(0, session);

        let json = serde_json::to_string_pretty(&sessions)?;
        self.backend.write(SESSIONS_KEY, &json)?;
        tracing::debug!("saved session {id} ({} stored)", sessions.len());
        Ok(())
    }

    /// Discard every stored session.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.backend.remove(SESSIONS_KEY)?;
        tracing::debug!("cleared session history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisResult, Level, PerformanceTier};
    use crate::session::AnsweredQuestion;
    use chrono::{TimeZone, Utc};

    fn session(n: u128, score: u32) -> InterviewSession {
        let result = AnalysisResult {
            score,
            confidence: Level::Medium,
            keyword_coverage: 50,
            clarity_score: 50,
            nervousness_level: Level::Low,
            feedback: "ok".into(),
            recommendations: vec!["more".into()],
            performance_level: PerformanceTier::from_score(score),
        };
        InterviewSession::from_parts(
            Uuid::from_u128(n),
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
            "General",
            vec![AnsweredQuestion {
                question_id: 1,
                question: "Tell me about yourself.".into(),
                answer: "I build things.".into(),
                result,
            }],
        )
        .unwrap()
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = SessionStore::new(MemoryStore::new());
        assert!(store.list().is_empty());
    }

    #[test]
    fn save_prepends_most_recent_first() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.save(session(1, 50)).unwrap();
        store.save(session(2, 70)).unwrap();
        store.save(session(3, 90)).unwrap();

        let ids: Vec<u128> = store.list().iter().map(|s| s.id.as_u128()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn list_is_idempotent() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.save(session(1, 50)).unwrap();
        assert_eq!(store.list(), store.list());
    }

    #[test]
    fn clear_then_list_is_empty() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.save(session(1, 50)).unwrap();
        store.clear().unwrap();
        assert!(store.list().is_empty());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_slot_reads_as_empty() {
        let mut backend = MemoryStore::new();
        backend.write(SESSIONS_KEY, "{not json").unwrap();
        let mut store = SessionStore::new(backend);
        assert!(store.list().is_empty());

        // saving over corrupt data starts a fresh list
        store.save(session(7, 60)).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn blank_slot_reads_as_empty() {
        let mut backend = MemoryStore::new();
        backend.write(SESSIONS_KEY, "   ").unwrap();
        assert!(SessionStore::new(backend).list().is_empty());
    }

    #[test]
    fn get_and_find_by_short_id() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.save(session(0xabcdef, 50)).unwrap();
        store.save(session(0x123456, 80)).unwrap();

        let id = Uuid::from_u128(0xabcdef);
        assert_eq!(store.get(id).unwrap().average_score, 50);
        assert_eq!(store.find(&id.to_string()).unwrap().id, id);
        assert_eq!(store.find("abcdef").unwrap().id, id);
        assert_eq!(store.find("ABCDEF").unwrap().id, id);
        assert_eq!(store.find("123456").unwrap().average_score, 80);
        assert_eq!(store.find("#abcdef").unwrap().id, id);
        assert_eq!(store.find(" #ABCDEF ").unwrap().id, id);
        assert!(store.find("999999").is_none());
        assert!(store.find("").is_none());
        assert!(store.get(Uuid::from_u128(42)).is_none());
    }

    /// Backend whose reads always fail, recording whether anything was written.
    #[derive(Default)]
    struct UnreadableStore {
        writes: usize,
    }

    impl KeyValueStore for UnreadableStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::io(
                "/unreadable",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ))
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            self.writes += 1;
            Ok(())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn unreadable_history_lists_empty_but_is_not_overwritten() {
        let mut store = SessionStore::new(UnreadableStore::default());
        assert!(store.list().is_empty());
        assert!(matches!(store.load(), Err(StoreError::Io { .. })));

        let err = store.save(session(1, 50)).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(store.backend().writes, 0);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = SessionStore::new(FileStore::new(dir.path()));
        store.save(session(1, 40)).unwrap();
        store.save(session(2, 80)).unwrap();
        assert!(dir.path().join("intervai_sessions.json").exists());

        let reopened = SessionStore::new(FileStore::new(dir.path()));
        let sessions = reopened.list();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id, Uuid::from_u128(2));
    }

    #[test]
    fn file_store_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = SessionStore::new(FileStore::new(&nested));
        assert!(store.list().is_empty());
        store.save(session(1, 40)).unwrap();
        assert!(nested.join("intervai_sessions.json").exists());
    }

    #[test]
    fn file_store_clear_removes_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new(FileStore::new(dir.path()));
        store.save(session(1, 40)).unwrap();
        store.clear().unwrap();
        assert!(!dir.path().join("intervai_sessions.json").exists());
        assert!(store.list().is_empty());
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(matches!(
            store.write("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(store.read("").is_err());
    }
}
