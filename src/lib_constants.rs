pub const SESSION_USER_KEY: &str = "notes-app-user";
pub const REGISTERED_USERS_KEY: &str = "notes-app-registered-users";
pub const CURRENT_NOTES_KEY: &str = "notes-app-notes";
pub const USER_NOTES_KEY_PREFIX: &str = "notes-app-notes-";
