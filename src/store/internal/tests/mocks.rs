use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use time::{Duration, OffsetDateTime};
use time::macros::datetime;

use crate::store::StoreError;
use crate::store::internal::io_trait::StoreIo;

pub const TEST_EPOCH: OffsetDateTime = datetime!(2024-05-01 12:00 UTC);

/// In-memory stand-in for the durable store with a steppable clock and no
/// latency. Clones share state so tests can inspect what the store wrote.
#[derive(Clone, Debug)]
pub struct TestStoreIo {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    values: Mutex<HashMap<String, String>>,
    now: Mutex<OffsetDateTime>,
}

impl TestStoreIo {
    pub fn new() -> Self {
        TestStoreIo {
            inner: Arc::new(
                Inner {
                    values: Mutex::new(HashMap::new()),
                    now: Mutex::new(TEST_EPOCH),
                }
            ),
        }
    }

    pub fn advance_clock(&self, by: Duration) {
        *self.inner.now.lock().unwrap() += by;
    }

    pub fn raw_value(&self, key: &str) -> Option<String> {
        self.inner.values.lock().unwrap().get(key).cloned()
    }

    pub fn set_raw_value(&self, key: &str, value: &str) {
        self.inner.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }
}

#[async_trait]
impl StoreIo for TestStoreIo {
    async fn load_value(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.values.lock().unwrap().get(key).cloned())
    }

    async fn save_value(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.inner.values.lock().unwrap().insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove_value(&self, key: &str) -> Result<(), StoreError> {
        self.inner.values.lock().unwrap().remove(key);
        Ok(())
    }

    fn get_time(&self) -> OffsetDateTime {
        *self.inner.now.lock().unwrap()
    }

    async fn simulate_latency(&self) {}
}
