use argon2::password_hash::PasswordHashString;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(
    data: &PasswordHashString,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(data.as_str())
}

pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<PasswordHashString, D::Error> {
    let raw = String::deserialize(deserializer)?;
    PasswordHashString::new(&raw)
        .map_err(|e| Error::custom(format_args!("invalid password hash: {e}")))
}
