// src/store.rs
//
// Tiny persistent key/value store: one `key,value` CSV row per entry.
// Used for the saved login pair under `savedUsername` / `savedPassword`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::consts::{CREDENTIALS_FILE, KEY_PASSWORD, KEY_USERNAME};
use crate::csv::{parse_rows, write_row};
use crate::error::{HubError, Result};
use crate::file::write_atomic;
use crate::model::Credentials;

#[derive(Debug)]
pub struct KvStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl KvStore {
    /// Load `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut entries = BTreeMap::new();
        for (i, row) in parse_rows(&text, ',').into_iter().enumerate() {
            let [key, value]: [String; 2] = row
                .try_into()
                .map_err(|_| HubError::InvalidStore { path: path.clone(), line: i + 1 })?;
            entries.insert(key, value);
        }
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set several keys and persist once.
    pub fn set_many(&mut self, pairs: &[(&str, &str)]) -> Result<()> {
        for (k, v) in pairs {
            self.entries.insert(s!(*k), s!(*v));
        }
        self.flush()
    }

    pub fn remove_many(&mut self, keys: &[&str]) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|k, _| !keys.contains(&k.as_str()));
        if self.entries.len() == before {
            return Ok(());
        }
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        let mut buf: Vec<u8> = Vec::new();
        for (k, v) in &self.entries {
            write_row(&mut buf, &[k, v], ',')?;
        }
        write_atomic(&self.path, &String::from_utf8_lossy(&buf))?;
        Ok(())
    }
}

/// The saved login pair, backed by `<dir>/credentials.csv`.
#[derive(Debug)]
pub struct CredentialStore {
    kv: KvStore,
}

impl CredentialStore {
    pub fn open(dir: &Path) -> Result<Self> {
        Ok(Self { kv: KvStore::open(dir.join(CREDENTIALS_FILE))? })
    }

    /// Saved values; absent keys read as empty strings.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.kv.get(KEY_USERNAME).unwrap_or_default(),
            self.kv.get(KEY_PASSWORD).unwrap_or_default(),
        )
    }

    /// Overwrite both keys, whatever was there before.
    pub fn save(&mut self, creds: &Credentials) -> Result<()> {
        self.kv.set_many(&[
            (KEY_USERNAME, creds.username.as_str()),
            (KEY_PASSWORD, creds.password.as_str()),
        ])?;
        logf!("Store: saved credentials for {:?}", creds.username);
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.kv.remove_many(&[KEY_USERNAME, KEY_PASSWORD])
    }

    pub fn path(&self) -> &Path {
        self.kv.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path()).unwrap();
        assert!(store.credentials().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn file_layout_is_key_value_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::open(dir.path()).unwrap();
        store.save(&Credentials::new("a@uni.edu", "p,w")).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "savedPassword,\"p,w\"\nsavedUsername,a@uni.edu\n");
    }

    #[test]
    fn other_keys_survive_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CREDENTIALS_FILE);
        fs::write(&path, "theme,dark\nsavedUsername,x\nsavedPassword,y\n").unwrap();

        let mut store = CredentialStore::open(dir.path()).unwrap();
        assert_eq!(store.credentials(), Credentials::new("x", "y"));
        store.clear().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "theme,dark\n");
    }

    #[test]
    fn malformed_row_is_reported_with_line() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CREDENTIALS_FILE), "savedUsername,x\nbroken\n").unwrap();
        let err = CredentialStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, HubError::InvalidStore { line: 2, .. }));
    }
}
