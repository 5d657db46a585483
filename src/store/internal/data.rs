//! On-disk representations; field names match the original localStorage
//! values of the ported app (camelCase, RFC 3339 timestamps).

use argon2::password_hash::PasswordHashString;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::data::{Note, User};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub(super) struct SessionUserData {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for SessionUserData {
    fn from(value: &User) -> Self {
        SessionUserData {
            id: value.id.clone(),
            email: value.email.clone(),
            name: value.name.clone(),
        }
    }
}

impl From<SessionUserData> for User {
    fn from(value: SessionUserData) -> Self {
        User {
            id: value.id,
            email: value.email,
            name: value.name,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RegisteredUserData {
    pub id: String,
    pub name: String,
    pub email: String,

    // the original stored a plaintext `password` field here
    #[serde(
        rename = "passwordHash",
        with = "crate::serde::password_hash_string",
    )]
    pub hash: PasswordHashString,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub(super) struct NoteData {
    pub id: String,
    pub title: String,
    pub description: String,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,

    pub user_id: String,
}

impl From<&Note> for NoteData {
    fn from(value: &Note) -> Self {
        NoteData {
            id: value.id.clone(),
            title: value.title.clone(),
            description: value.description.clone(),
            created_at: value.created_at,
            updated_at: value.updated_at,
            user_id: value.user_id.clone(),
        }
    }
}

impl From<NoteData> for Note {
    fn from(value: NoteData) -> Self {
        Note {
            id: value.id,
            title: value.title,
            description: value.description,
            created_at: value.created_at,
            updated_at: value.updated_at,
            user_id: value.user_id,
        }
    }
}
