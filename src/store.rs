mod errors;
mod internal;

use async_trait::async_trait;

use crate::data::{Note, NoteStats, NoteUpdate, User};

pub use errors::StoreError;
pub use internal::{ProductionStore, StoreImpl};

/// The session/store manager: owns the authenticated user and the in-memory
/// note list, mirroring both to durable storage on every mutation.
///
/// Mutating note operations are silent no-ops without an active session;
/// credential and validation failures are reported as [`StoreError`]s.
#[async_trait]
pub trait Store: Send + Sync {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, StoreError>;

    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, StoreError>;

    async fn logout(&self) -> Result<(), StoreError>;

    async fn add_note(
        &self,
        title: &str,
        description: &str,
    ) -> Result<Option<Note>, StoreError>;

    async fn update_note(
        &self,
        id: &str,
        update: NoteUpdate,
    ) -> Result<Option<Note>, StoreError>;

    async fn delete_note(&self, id: &str) -> Result<bool, StoreError>;

    async fn get_note(&self, id: &str) -> Option<Note>;

    async fn notes(&self) -> Vec<Note>;

    async fn search_notes(&self, query: &str) -> Vec<Note>;

    async fn stats(&self) -> NoteStats;

    async fn current_user(&self) -> Option<User>;
}
