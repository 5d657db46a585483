pub const ALICE_NAME: &str = "Alice";
pub const ALICE_EMAIL: &str = "alice@example.com";
pub const ALICE_PASSWORD: &str = "correct horse battery staple";

pub const BOB_NAME: &str = "Bob";
pub const BOB_EMAIL: &str = "bob@example.com";
pub const BOB_PASSWORD: &str = "hunter2 but longer";
