//! Password storage and verification
//!
//! Passwords live in the user (credential) record as a single string.
//! During the legacy-data migration window that string can be either an
//! argon2 PHC hash or a raw plaintext value; [`StoredPassword`] makes
//! the distinction explicit so the authentication check branches on the
//! tag instead of guessing. New records are only ever [`StoredPassword::Hashed`].

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// PHC-format prefix of argon2 hashes produced by [`hash_password`]
const ARGON2_PREFIX: &str = "$argon2";

/// Tagged view over a stored password value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredPassword {
    /// Argon2 PHC hash string
    Hashed(String),
    /// Legacy/test plaintext value
    Plaintext(String),
}

impl StoredPassword {
    /// Classify a raw stored value by its hash-prefix pattern
    pub fn from_stored(raw: &str) -> Self {
        if raw.starts_with(ARGON2_PREFIX) {
            Self::Hashed(raw.to_string())
        } else {
            Self::Plaintext(raw.to_string())
        }
    }

    /// Verify a submitted plaintext candidate against the stored value
    pub fn verify(&self, candidate: &str) -> Result<bool, argon2::password_hash::Error> {
        match self {
            Self::Hashed(hash) => {
                let parsed = PasswordHash::new(hash)?;
                Ok(Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok())
            }
            Self::Plaintext(stored) => Ok(stored == candidate),
        }
    }
}

/// Hash a password with argon2; the only way new credentials are stored
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}
