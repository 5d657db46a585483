use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::data::{Note, NoteStats, NoteUpdate, User};
use crate::hasher::{Hasher, ProductionHasher};
use crate::lib_constants::{
    CURRENT_NOTES_KEY, REGISTERED_USERS_KEY, SESSION_USER_KEY,
    USER_NOTES_KEY_PREFIX,
};
use crate::store::internal::data::{NoteData, RegisteredUserData, SessionUserData};
use crate::store::internal::io_trait::{ProductionStoreIo, StoreIo};
use crate::store::{Store, StoreError};
use crate::util::StrExt;

mod data;
mod io_trait;

#[allow(private_bounds)]
#[derive(Debug)]
pub struct StoreImpl<Io: StoreIo, H: Hasher> {
    state: RwLock<State>,
    io: Io,
    hasher: H,
}

#[derive(Debug)]
struct State {
    user: Option<User>,
    notes: Vec<Note>,
}

pub type ProductionStore = StoreImpl<ProductionStoreIo, ProductionHasher>;

impl ProductionStore {
    pub async fn new(
        app_config: &AppConfig,
        hasher: ProductionHasher,
    ) -> Result<ProductionStore, StoreError> {
        let io = ProductionStoreIo::new(
            &app_config.data_directory,
            app_config.simulated_latency,
        ).await?;
        Self::new_internal(io, hasher).await
    }
}

#[allow(private_bounds)]
impl<Io: StoreIo, H: Hasher> StoreImpl<Io, H> {
    // restores any persisted session and its note list
    async fn new_internal(io: Io, hasher: H) -> Result<Self, StoreError> {
        let session: Option<SessionUserData> =
            load_json(&io, SESSION_USER_KEY).await?;
        let user = session.map(User::from);
        let stored: Option<Vec<NoteData>> =
            load_json(&io, CURRENT_NOTES_KEY).await?;
        let notes = stored
            .unwrap_or_default()
            .into_iter()
            .map(Note::from)
            .collect();
        Ok(
            StoreImpl {
                state: RwLock::new(State { user, notes }),
                io,
                hasher,
            }
        )
    }

    async fn persist_notes(
        &self,
        user_id: &str,
        notes: &[Note],
    ) -> Result<(), StoreError> {
        let mapped: Vec<NoteData> = notes.iter().map(NoteData::from).collect();
        let encoded = serde_json::to_string(&mapped)?;
        self.io.save_value(CURRENT_NOTES_KEY, encoded.clone()).await?;
        self.io.save_value(&user_notes_key(user_id), encoded).await?;
        Ok(())
    }
}

#[async_trait]
impl<Io: StoreIo, H: Hasher> Store for StoreImpl<Io, H> {
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, StoreError> {
        self.io.simulate_latency().await;
        let mut state = self.state.write().await;
        let mut registered: Vec<RegisteredUserData> =
            load_json(&self.io, REGISTERED_USERS_KEY)
                .await?
                .unwrap_or_default();
        if registered.iter().any(|u| u.email == email) {
            debug!("registration rejected, email already taken");
            return Err(StoreError::EmailAlreadyRegistered);
        }

        let now = self.io.get_time();
        let user = User {
            id: wallclock_id(now),
            email: email.to_owned(),
            name: name.to_owned(),
        };
        registered.push(
            RegisteredUserData {
                id: user.id.clone(),
                name: user.name.clone(),
                email: user.email.clone(),
                hash: self.hasher.generate_hash(password),
            }
        );
        save_json(&self.io, REGISTERED_USERS_KEY, &registered).await?;
        save_json(&self.io, SESSION_USER_KEY, &SessionUserData::from(&user)).await?;

        state.user = Some(user.clone());
        state.notes.clear();
        self.persist_notes(&user.id, &state.notes).await?;
        info!("registered user {}", user.id);
        Ok(user)
    }

    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, StoreError> {
        self.io.simulate_latency().await;
        let mut state = self.state.write().await;
        let registered: Vec<RegisteredUserData> =
            load_json(&self.io, REGISTERED_USERS_KEY)
                .await?
                .unwrap_or_default();
        let matched = registered
            .into_iter()
            .find(|u| u.email == email)
            .filter(|u| self.hasher.verify_hash(&u.hash, password));
        let Some(matched) = matched else {
            debug!("failed login attempt");
            return Err(StoreError::InvalidCredentials);
        };

        let user = User {
            id: matched.id,
            email: matched.email,
            name: matched.name,
        };
        save_json(&self.io, SESSION_USER_KEY, &SessionUserData::from(&user)).await?;

        let stored: Option<Vec<NoteData>> =
            load_json(&self.io, &user_notes_key(&user.id)).await?;
        let notes: Vec<Note> = stored
            .unwrap_or_default()
            .into_iter()
            .map(Note::from)
            .collect();
        self.persist_notes(&user.id, &notes).await?;

        state.user = Some(user.clone());
        state.notes = notes;
        info!("user {} logged in", user.id);
        Ok(user)
    }

    async fn logout(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.user = None;
        state.notes.clear();
        self.io.remove_value(SESSION_USER_KEY).await?;
        self.io.remove_value(CURRENT_NOTES_KEY).await?;
        info!("session cleared");
        Ok(())
    }

    async fn add_note(
        &self,
        title: &str,
        description: &str,
    ) -> Result<Option<Note>, StoreError> {
        let mut state = self.state.write().await;
        let Some(user) = &state.user else {
            debug!("add_note ignored, no active session");
            return Ok(None);
        };
        let Some(title) = title.nonblank_to_some() else {
            return Err(StoreError::EmptyTitle);
        };

        self.io.simulate_latency().await;
        let now = self.io.get_time();
        let note = Note {
            id: wallclock_id(now),
            title,
            description: description.trim().to_owned(),
            created_at: now,
            updated_at: now,
            user_id: user.id.clone(),
        };
        state.notes.push(note.clone());
        self.persist_notes(&note.user_id, &state.notes).await?;
        info!("note {} created", note.id);
        Ok(Some(note))
    }

    async fn update_note(
        &self,
        id: &str,
        update: NoteUpdate,
    ) -> Result<Option<Note>, StoreError> {
        let mut state = self.state.write().await;
        if state.user.is_none() {
            debug!("update_note ignored, no active session");
            return Ok(None);
        }
        let title = update.title
            .map(|t| t.nonblank_to_some().ok_or(StoreError::EmptyTitle))
            .transpose()?;
        let Some(note) = state.notes.iter_mut().find(|n| n.id == id) else {
            warn!("attempting to update nonexistent note {id}");
            return Ok(None);
        };

        self.io.simulate_latency().await;
        if let Some(title) = title {
            note.title = title;
        }
        if let Some(description) = update.description {
            note.description = description.trim().to_owned();
        }
        note.updated_at = self.io.get_time();
        let updated = note.clone();
        self.persist_notes(&updated.user_id, &state.notes).await?;
        info!("note {id} updated");
        Ok(Some(updated))
    }

    async fn delete_note(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let Some(user) = &state.user else {
            debug!("delete_note ignored, no active session");
            return Ok(false);
        };
        let user_id = user.id.clone();
        let len_before = state.notes.len();
        state.notes.retain(|n| n.id != id);
        if state.notes.len() == len_before {
            warn!("attempting to delete nonexistent note {id}");
            return Ok(false);
        }
        self.persist_notes(&user_id, &state.notes).await?;
        info!("note {id} deleted");
        Ok(true)
    }

    async fn get_note(&self, id: &str) -> Option<Note> {
        self.state
            .read()
            .await
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
    }

    async fn notes(&self) -> Vec<Note> {
        self.state.read().await.notes.clone()
    }

    async fn search_notes(&self, query: &str) -> Vec<Note> {
        let query = query.to_lowercase();
        self.state
            .read()
            .await
            .notes
            .iter()
            .filter(|n|
                n.title.to_lowercase().contains(&query)
                    || n.description.to_lowercase().contains(&query)
            )
            .cloned()
            .collect()
    }

    async fn stats(&self) -> NoteStats {
        let state = self.state.read().await;
        let today = self.io.get_time().date();
        NoteStats {
            total: state.notes.len(),
            created_today: state.notes
                .iter()
                .filter(|n| n.created_at.date() == today)
                .count(),
            edited: state.notes
                .iter()
                .filter(|n| n.updated_at > n.created_at)
                .count(),
        }
    }

    async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }
}

// note and user ids are stringified wall-clock milliseconds; a
// same-millisecond collision is possible and deliberately unguarded
fn wallclock_id(t: OffsetDateTime) -> String {
    (t.unix_timestamp_nanos() / 1_000_000).to_string()
}

fn user_notes_key(user_id: &str) -> String {
    format!("{USER_NOTES_KEY_PREFIX}{user_id}")
}

async fn load_json<T: DeserializeOwned>(
    io: &impl StoreIo,
    key: &str,
) -> Result<Option<T>, StoreError> {
    io.load_value(key)
        .await?
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(StoreError::from)
}

async fn save_json<T: Serialize + ?Sized>(
    io: &impl StoreIo,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    io.save_value(key, serde_json::to_string(value)?).await
}
