use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const STORE_DIR: &str = "pronostiq";
const STORE_FILE: &str = "store.json";

/// String values under string keys, persisted between runs.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// All keys live in one JSON object file, rewritten through a temp file on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_DATA_HOME/pronostiq/store.json`, falling back to `~/.local/share`.
    pub fn default_location() -> Option<Self> {
        default_store_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable store file is moved before the next write.
    pub fn quarantine_path(&self) -> PathBuf {
        self.path.with_extension("json.bad")
    }

    /// Fails when the file exists but cannot be read or parsed.
    pub fn verify(&self) -> Result<()> {
        self.read_all().map(|_| ())
    }

    fn read_raw(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("read store {}", self.path.display())),
        }
    }

    /// A missing file is an empty store; an unreadable or corrupt one is an error.
    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let Some(raw) = self.read_raw()? else {
            return Ok(BTreeMap::new());
        };
        serde_json::from_str(&raw)
            .with_context(|| format!("corrupt store file {}", self.path.display()))
    }

    /// Like `read_all`, but a corrupt file is moved to [`FileStore::quarantine_path`]
    /// so the write that follows starts from an empty store without destroying it.
    fn read_for_update(&self) -> Result<BTreeMap<String, String>> {
        let Some(raw) = self.read_raw()? else {
            return Ok(BTreeMap::new());
        };
        if let Ok(entries) = serde_json::from_str(&raw) {
            return Ok(entries);
        }
        let aside = self.quarantine_path();
        fs::rename(&self.path, &aside)
            .with_context(|| format!("move corrupt store to {}", aside.display()))?;
        Ok(BTreeMap::new())
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create store dir {}", dir.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let json = serde_json::to_string(entries).context("serialize store")?;
        fs::write(&tmp, json).context("write store")?;
        fs::rename(&tmp, &self.path).context("swap store")?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_for_update()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&entries)
    }
}

fn default_store_path() -> Option<PathBuf> {
    if let Ok(base) = std::env::var("XDG_DATA_HOME")
        && !base.trim().is_empty()
    {
        return Some(PathBuf::from(base).join(STORE_DIR).join(STORE_FILE));
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(STORE_DIR)
            .join(STORE_FILE),
    )
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileStore, KeyValueStore};

    fn temp_store(tag: &str) -> FileStore {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let dir = std::env::temp_dir().join(format!("pronostiq-store-{tag}-{nanos}"));
        FileStore::new(dir.join("store.json"))
    }

    #[test]
    fn file_store_round_trips_and_removes() {
        let mut store = temp_store("rt");
        assert_eq!(store.get("k").expect("read"), None);
        store.set("k", "[1,2]").expect("write");
        store.set("other", "x").expect("write");
        assert_eq!(store.get("k").expect("read").as_deref(), Some("[1,2]"));

        store.remove("k").expect("remove");
        assert_eq!(store.get("k").expect("read"), None);
        assert_eq!(store.get("other").expect("read").as_deref(), Some("x"));

        if let Some(dir) = store.path().parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn truncated_file_is_an_error_and_kept_aside() {
        let mut store = temp_store("corrupt");
        let dir = store.path().parent().expect("has parent").to_path_buf();
        std::fs::create_dir_all(&dir).expect("mkdir");
        let truncated = r#"{"pronostiq_history":"[{\"id\":\"17"#;
        std::fs::write(store.path(), truncated).expect("write");

        assert!(store.get("pronostiq_history").is_err());
        assert!(store.verify().is_err());

        store.set("k", "v").expect("write after corruption");
        let kept = std::fs::read_to_string(store.quarantine_path()).expect("kept aside");
        assert_eq!(kept, truncated);
        assert_eq!(store.get("k").expect("read").as_deref(), Some("v"));
        assert_eq!(store.get("pronostiq_history").expect("read"), None);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_removes_nothing() {
        let mut store = temp_store("missing");
        store.remove("k").expect("remove on missing file");
        assert!(!store.path().exists());
    }
}
