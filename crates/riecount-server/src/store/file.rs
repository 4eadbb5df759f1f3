//! JSON file backend.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use riecount_core::error::{Result, RiecountError};
use riecount_core::CounterSet;

use super::CounterStore;

/// Store backed by a single JSON document at a fixed path.
///
/// The lock only covers this handle. Two handles (or two processes) on the
/// same path are not coordinated.
pub struct FileCounterStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Caller must hold `lock`.
    async fn read_unlocked(&self) -> Result<CounterSet> {
        let bytes = match fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CounterSet::new()),
            Err(e) => {
                return Err(RiecountError::StorageRead(format!(
                    "{}: {e}",
                    self.path.display()
                )))
            }
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| RiecountError::StorageRead(format!("{}: {e}", self.path.display())))
    }

    // Caller must hold `lock`. Writes a sibling temp file then renames it over
    // the target, so readers see either the old or the new document.
    async fn write_unlocked(&self, set: &CounterSet) -> Result<()> {
        let tmp = self.temp_path();
        self.write_via(set, &tmp).await
    }

    async fn write_via(&self, set: &CounterSet, tmp: &Path) -> Result<()> {
        let data = serde_json::to_vec(set)
            .map_err(|e| RiecountError::StorageWrite(format!("encode failed: {e}")))?;

        if let Err(e) = write_synced(tmp, &data).await {
            let _ = fs::remove_file(tmp).await;
            return Err(self.write_error(e));
        }
        if let Err(e) = fs::rename(tmp, &self.path).await {
            let _ = fs::remove_file(tmp).await;
            return Err(self.write_error(e));
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = fs::File::open(self.parent_dir()).await {
                let _ = dir.sync_all().await;
            }
        }

        Ok(())
    }

    fn write_error(&self, e: std::io::Error) -> RiecountError {
        RiecountError::StorageWrite(format!("{}: {e}", self.path.display()))
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "counters".to_string());
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        self.parent_dir()
            .join(format!(".{name}.{}.{nanos}.tmp", std::process::id()))
    }
}

async fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut f = fs::File::create(path).await?;
    f.write_all(data).await?;
    f.flush().await?;
    f.sync_all().await
}

#[async_trait]
impl CounterStore for FileCounterStore {
    async fn load_all(&self) -> Result<CounterSet> {
        let _guard = self.lock.lock().await;
        self.read_unlocked().await
    }

    async fn save_all(&self, set: &CounterSet) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.write_unlocked(set).await
    }

    async fn get_count(&self, name: &str) -> Result<u64> {
        let _guard = self.lock.lock().await;
        Ok(self.read_unlocked().await?.get(name))
    }

    async fn increment(&self, name: &str) -> Result<u64> {
        let _guard = self.lock.lock().await;
        let mut set = self.read_unlocked().await?;
        let count = set.increment(name)?;
        self.write_unlocked(&set).await?;
        Ok(count)
    }
}
