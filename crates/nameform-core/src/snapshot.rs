use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name of the snapshot inside [`state_dir`].
pub const SNAPSHOT_FILE: &str = "snapshot.json";

/// State that survives a teardown/recreate cycle.
///
/// Serialized as `{"messages": [...]}`. A snapshot without the key reads
/// back as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Somewhere to keep a [`Snapshot`] between screen instances.
pub trait SnapshotStore {
    /// Persist `snapshot`, replacing whatever was stored before.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Load the stored snapshot. `Ok(None)` means nothing was ever saved.
    fn load(&self) -> Result<Option<Snapshot>>;
}

/// In-process store; a snapshot lives as long as the store does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<Snapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.saved = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.saved.clone())
    }
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `state_dir()/snapshot.json`.
    pub fn default_location() -> Self {
        Self::new(state_dir().join(SNAPSHOT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create snapshot directory {}", parent.display())
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(snapshot).context("failed to encode snapshot")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write snapshot to {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "snapshot written");
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read snapshot at {}", self.path.display()))?;
        let snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("invalid snapshot at {}", self.path.display()))?;
        Ok(Some(snapshot))
    }
}

/// Return the directory holding persisted screen state.
///
/// Precedence: `NAMEFORM_STATE_DIR` env var > platform data dir.
/// Linux: `$XDG_DATA_HOME/nameform/` or `~/.local/share/nameform/`
/// macOS: `~/Library/Application Support/nameform/`
pub fn state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NAMEFORM_STATE_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(data) = dirs::data_dir() {
        return data.join("nameform");
    }

    PathBuf::from("state")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serialize env-mutating tests to avoid data races.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn sample() -> Snapshot {
        Snapshot {
            messages: vec![
                "The name is Alice and delay was 1000 milliseconds".into(),
                "Please enter a name.".into(),
            ],
        }
    }

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn memory_store_keeps_latest() {
        let mut store = MemoryStore::new();
        store.save(&Snapshot::default()).unwrap();
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn file_store_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SNAPSHOT_FILE);

        FileStore::new(&path).save(&sample()).unwrap();
        let loaded = FileStore::new(&path).load().unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn file_layout_is_single_messages_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE);
        FileStore::new(&path).save(&sample()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn missing_messages_key_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE);
        fs::write(&path, "{}").unwrap();
        let loaded = FileStore::new(&path).load().unwrap();
        assert_eq!(loaded, Some(Snapshot::default()));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE);
        fs::write(&path, "not json").unwrap();
        let err = FileStore::new(&path).load().unwrap_err();
        assert!(format!("{:#}", err).contains("invalid snapshot"));
    }

    #[test]
    fn state_dir_respects_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("NAMEFORM_STATE_DIR").ok();

        unsafe { std::env::set_var("NAMEFORM_STATE_DIR", "/tmp/nameform-test-state") };
        assert_eq!(state_dir(), PathBuf::from("/tmp/nameform-test-state"));
        assert_eq!(
            FileStore::default_location().path(),
            Path::new("/tmp/nameform-test-state/snapshot.json")
        );

        match original {
            Some(v) => unsafe { std::env::set_var("NAMEFORM_STATE_DIR", v) },
            None => unsafe { std::env::remove_var("NAMEFORM_STATE_DIR") },
        }
    }
}
