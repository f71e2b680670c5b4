//! Argon2id password hashing and credential checks.
//!
//! Hashes are stored as PHC strings, so the algorithm parameters and salt
//! travel with the hash.

use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only for a malformed hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Check a login attempt where the account may not exist.
///
/// With no stored hash the password is still run through Argon2 against a
/// throwaway hash, so an unknown email costs the same as a wrong password.
/// The result is `Ok(false)` in that case.
pub fn check_credentials(password: &str, stored_hash: Option<&str>) -> Result<bool, Error> {
    match stored_hash {
        Some(hash) => verify_password(password, hash),
        None => {
            let dummy = dummy_hash()?;
            verify_password(password, dummy)?;
            Ok(false)
        }
    }
}

fn dummy_hash() -> Result<&'static str, Error> {
    static DUMMY: OnceLock<String> = OnceLock::new();
    if let Some(hash) = DUMMY.get() {
        return Ok(hash.as_str());
    }
    let hash = hash_password("movieflix-placeholder-credential")?;
    Ok(DUMMY.get_or_init(|| hash).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct-horse-battery-staple").expect("hashing should succeed");

        assert!(hash.starts_with("$argon2id$"), "expected argon2id PHC prefix");
        assert!(verify_password("correct-horse-battery-staple", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password").unwrap();
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let a = hash_password("repeat").unwrap();
        let b = hash_password("repeat").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_check_credentials_without_account_is_false() {
        assert!(!check_credentials("whatever", None).unwrap());
        // Even the placeholder's own plaintext never authenticates a missing account.
        assert!(!check_credentials("movieflix-placeholder-credential", None).unwrap());
    }

    #[test]
    fn test_check_credentials_with_account() {
        let hash = hash_password("s3cret").unwrap();
        assert!(check_credentials("s3cret", Some(&hash)).unwrap());
        assert!(!check_credentials("nope", Some(&hash)).unwrap());
    }
}
