use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub user_id: String,
}

/// Partial note edit; `None` fields keep their current value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoteStats {
    pub total: usize,
    pub created_today: usize,
    pub edited: usize,
}
