//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and credential checks.
//! - [`token`] -- JWT access-token issuance and verification.

pub mod password;
pub mod token;
