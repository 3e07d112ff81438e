//! Argon2id password hashing and verification.
//!
//! Hashes are PHC strings (`$argon2id$v=19$m=…,t=…,p=…$salt$hash`), so the
//! salt and cost parameters travel with the hash and verification needs
//! nothing else.

use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Result of checking a candidate password against a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    /// The candidate hashes to the stored value.
    Match,
    /// The comparison ran and the values differ.
    Mismatch,
    /// The stored hash is not a usable Argon2 PHC string.
    Malformed,
}

/// Hash verified against when the username does not exist, so that unknown
/// and known usernames take the same time to reject.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("pemplat-timing-equaliser").ok());

/// Hash a password using Argon2id with a fresh random salt.
///
/// # Errors
///
/// Returns the underlying `password_hash::Error` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Verify a candidate password against a stored hash.
///
/// Pure and deterministic. The digest comparison itself is constant time.
#[must_use]
pub fn verify(stored_hash: &str, candidate: &str) -> PasswordCheck {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return PasswordCheck::Malformed;
    };

    // A PHC string without an output part parses fine but can never match.
    if parsed.hash.is_none() {
        return PasswordCheck::Malformed;
    }

    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => PasswordCheck::Match,
        Err(password_hash::Error::Password) => PasswordCheck::Mismatch,
        Err(_) => PasswordCheck::Malformed,
    }
}

/// Spend the same work as a real verification and throw the result away.
pub fn verify_dummy(candidate: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify(hash, candidate);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_matches() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert_eq!(verify(&hash, "correct horse battery"), PasswordCheck::Match);
    }

    #[test]
    fn test_wrong_password_is_mismatch() {
        let hash = hash_password("correct horse battery").unwrap();
        assert_eq!(verify(&hash, "Correct horse battery"), PasswordCheck::Mismatch);
        assert_eq!(verify(&hash, ""), PasswordCheck::Mismatch);
    }

    #[test]
    fn test_verify_is_deterministic() {
        let hash = hash_password("s3cret-pass").unwrap();
        for _ in 0..3 {
            assert_eq!(verify(&hash, "s3cret-pass"), PasswordCheck::Match);
            assert_eq!(verify(&hash, "other-pass"), PasswordCheck::Mismatch);
        }
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let first = hash_password("same input").unwrap();
        let second = hash_password("same input").unwrap();
        assert_ne!(first, second);
        assert_eq!(verify(&second, "same input"), PasswordCheck::Match);
    }

    #[test]
    fn test_empty_and_garbage_hashes_are_malformed() {
        assert_eq!(verify("", "anything"), PasswordCheck::Malformed);
        assert_eq!(verify("not a hash", "anything"), PasswordCheck::Malformed);
    }

    #[test]
    fn test_bcrypt_hash_is_malformed() {
        let bcrypt = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
        assert_eq!(verify(bcrypt, "password"), PasswordCheck::Malformed);
    }

    #[test]
    fn test_truncated_hash_is_malformed() {
        let hash = hash_password("truncate me").unwrap();
        let without_output = hash.rsplit_once('$').unwrap().0;
        assert_eq!(verify(without_output, "truncate me"), PasswordCheck::Malformed);
    }

    #[test]
    fn test_dummy_verification_does_not_panic() {
        verify_dummy("whatever");
    }
}
