use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn make_hasher() -> ProductionHasher {
    // minimal costs, these tests exercise correctness only
    let params = argon2::Params::new(8, 1, 1, Some(32))
        .expect("invalid test params");
    ProductionHasher::new(
        ProductionHasherConfig::new(params),
        SyncRng::new(StdRng::seed_from_u64(42)),
    )
}

#[test]
fn generated_hash_verifies() {
    let hasher = make_hasher();
    let hash = hasher.generate_hash("correct horse");
    assert!(hasher.verify_hash(&hash, "correct horse"));
}

#[test]
fn wrong_password_does_not_verify() {
    let hasher = make_hasher();
    let hash = hasher.generate_hash("correct horse");
    assert!(!hasher.verify_hash(&hash, "battery staple"));
}

#[test]
fn same_password_hashes_differently() {
    let hasher = make_hasher();
    let first = hasher.generate_hash("correct horse");
    let second = hasher.generate_hash("correct horse");
    assert_ne!(first.as_str(), second.as_str(), "salts must differ");
}
