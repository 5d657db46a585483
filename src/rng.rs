use std::ops::DerefMut;
use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// A shareable rng handle for components that need randomness behind `&self`.
#[derive(Clone)]
#[derive(Debug)]
pub struct SyncRng<R>(Arc<Mutex<R>>);

impl<R> SyncRng<R> {
    pub fn new(rng: R) -> Self {
        SyncRng(Arc::new(Mutex::new(rng)))
    }

    pub fn get_rng(&self) -> impl DerefMut<Target = R> + '_ {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

pub fn make_entropy_rng() -> SyncRng<StdRng> {
    SyncRng::new(StdRng::from_entropy())
}
