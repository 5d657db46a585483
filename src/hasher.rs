#[cfg(test)] mod tests;

use std::ops::DerefMut;

use argon2::password_hash::{PasswordHashString, SaltString};
use argon2::{Algorithm, Argon2, PasswordHasher, Version};
use rand::rngs::StdRng;

use crate::rng::SyncRng;

pub trait Hasher: Send + Sync {
    fn generate_hash(&self, password: &str) -> PasswordHashString;
    fn verify_hash(&self, hash: &PasswordHashString, password: &str) -> bool;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductionHasherConfig {
    pub argon2_params: argon2::Params,
}

impl ProductionHasherConfig {
    pub fn new(argon2_params: argon2::Params) -> Self {
        ProductionHasherConfig {
            argon2_params,
        }
    }
}

#[derive(Debug)]
pub struct ProductionHasher {
    config: ProductionHasherConfig,
    rng: SyncRng<StdRng>,
}

impl ProductionHasher {
    pub fn new(
        config: ProductionHasherConfig,
        rng: SyncRng<StdRng>,
    ) -> Self {
        ProductionHasher {
            config,
            rng,
        }
    }

    fn get_hasher(&self) -> Argon2<'_> {
        Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            self.config.argon2_params.clone(),
        )
    }

    fn make_salt(&self) -> SaltString {
        let mut rng = self.rng.get_rng();
        SaltString::generate(rng.deref_mut())
    }
}

impl Hasher for ProductionHasher {
    fn generate_hash(&self, password: &str) -> PasswordHashString {
        let salt = self.make_salt();
        self.get_hasher()
            .hash_password(password.as_bytes(), &salt)
            .expect("password hashing failed")
            .serialize()
    }

    fn verify_hash(&self, hash: &PasswordHashString, password: &str) -> bool {
        hash.password_hash()
            .verify_password(&[&self.get_hasher()], password)
            .is_ok()
    }
}
