use crate::errors::AppError;
use crate::models::{MoodEntry, UserIdentity};
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/moods.json"),
    }
}

pub fn resolve_user_path() -> PathBuf {
    match env::var("APP_USER_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/user.json"),
    }
}

/// Identity of the journal owner. A missing or unreadable file is the normal
/// first-run case and falls back to the built-in identity.
pub async fn load_user(path: &Path) -> UserIdentity {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(user) => user,
            Err(err) => {
                error!("failed to parse user file: {err}");
                UserIdentity::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => UserIdentity::default(),
        Err(err) => {
            error!("failed to read user file: {err}");
            UserIdentity::default()
        }
    }
}

pub async fn load_entries(path: &Path) -> Vec<MoodEntry> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse mood file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read mood file: {err}");
            Vec::new()
        }
    }
}

pub async fn persist_entries(path: &Path, entries: &[MoodEntry]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(entries)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Durable ordered sequence of mood entries backed by a single JSON array.
///
/// Every mutation rewrites the whole array (positional delete rules out an
/// append-only file), and the write lock serializes the load-mutate-persist
/// cycle so interleaved requests cannot drop each other's updates.
pub struct EntryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl EntryStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All persisted entries, oldest first. Missing or malformed storage is
    /// treated as "no entries yet", never as an error.
    pub async fn load_all(&self) -> Vec<MoodEntry> {
        load_entries(&self.path).await
    }

    pub async fn append(&self, entry: MoodEntry) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = load_entries(&self.path).await;
        entries.push(entry);
        persist_entries(&self.path, &entries).await
    }

    /// Remove the entry at `index` in current stored order. An out-of-range
    /// index leaves the sequence untouched.
    pub async fn delete_at(&self, index: usize) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = load_entries(&self.path).await;
        if index < entries.len() {
            entries.remove(index);
        }
        persist_entries(&self.path, &entries).await
    }
}
