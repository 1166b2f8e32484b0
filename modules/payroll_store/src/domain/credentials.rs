//! Salted password hashing for `users` rows
//!
//! Digest is `hex(SHA-256(salt || password))` with a 16 byte random salt
//! stored hex-encoded next to it.

use sha2::{Digest, Sha256};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const SALT_LEN: usize = 16;

/// Generate a fresh hex-encoded salt
pub fn generate_salt() -> String {
    hex::encode(rand::random::<[u8; SALT_LEN]>())
}

/// Hash `password`, generating a salt if none is given. Returns `(salt, digest)`.
pub fn hash_password(password: &str, salt: Option<&str>) -> (String, String) {
    let salt = salt.map_or_else(generate_salt, str::to_string);
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let digest = hex::encode(hasher.finalize());
    (salt, digest)
}

/// Check a plaintext password against a stored salt and digest
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    let (_, computed) = hash_password(password, Some(salt));
    computed == expected_hash
}
