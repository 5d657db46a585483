use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use time::OffsetDateTime;
use tokio::fs;
use uuid::Uuid;

#[cfg(unix)] use std::os::unix::prelude::*;

use crate::store::StoreError;

#[cfg(unix)]
const REQUIRED_UNIX_PERMISSIONS: u32 = 0o700;

const STORED_VALUE_EXTENSION: &str = "json";
const TMP_FILENAME_INFIX: &str = ".tmp-";

/// Durable string-keyed value store plus the store manager's ambient
/// effects (clock, simulated latency). Swapped for an in-memory fake in
/// tests.
#[async_trait]
pub(super) trait StoreIo: Send + Sync {
    async fn load_value(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn save_value(&self, key: &str, value: String) -> Result<(), StoreError>;

    async fn remove_value(&self, key: &str) -> Result<(), StoreError>;

    fn get_time(&self) -> OffsetDateTime;

    async fn simulate_latency(&self);
}

/// One file per key under the data directory, written atomically.
pub struct ProductionStoreIo {
    basedir: PathBuf,
    latency: Duration,
}

impl ProductionStoreIo {
    pub async fn new(
        basedir: &Path,
        latency: Duration,
    ) -> Result<Self, StoreError> {
        match fs::metadata(basedir).await {
            Ok(meta) => {
                if !meta.is_dir() {
                    return Err(StoreError::NotADirectory);
                }
                validate_data_dir_permissions(&meta)?;
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::create_dir_all(basedir).await?;
                #[cfg(unix)]
                fs::set_permissions(
                    basedir,
                    std::fs::Permissions::from_mode(REQUIRED_UNIX_PERMISSIONS),
                ).await?;
            },
            Err(e) => return Err(e.into()),
        }
        Ok(
            ProductionStoreIo {
                basedir: basedir.to_path_buf(),
                latency,
            }
        )
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.basedir.join(format!("{key}.{STORED_VALUE_EXTENSION}"))
    }
}

#[async_trait]
impl StoreIo for ProductionStoreIo {
    async fn load_value(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.value_path(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_value(&self, key: &str, value: String) -> Result<(), StoreError> {
        let filename = self.value_path(key);
        let tmp_filename = self.basedir.join(
            format!("{key}{TMP_FILENAME_INFIX}{}", Uuid::new_v4()),
        );
        fs::write(&tmp_filename, value).await?;
        if let Err(e) = fs::rename(&tmp_filename, &filename).await {
            if let Err(cleanup) = fs::remove_file(&tmp_filename).await {
                warn!(
                    "failed to remove stale temp file {}: {cleanup}",
                    tmp_filename.display(),
                );
            }
            return Err(e.into());
        }
        Ok(())
    }

    async fn remove_value(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.value_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn get_time(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[cfg(unix)]
fn validate_data_dir_permissions(
    meta: &std::fs::Metadata,
) -> Result<(), StoreError> {
    let uid = unsafe { libc::getuid() };
    if meta.uid() != uid
        || meta.mode() & REQUIRED_UNIX_PERMISSIONS != REQUIRED_UNIX_PERMISSIONS {
        return Err(StoreError::Permission);
    }
    Ok(())
}

#[cfg(not(unix))]
fn validate_data_dir_permissions(
    _meta: &std::fs::Metadata,
) -> Result<(), StoreError> {
    Ok(())
}
