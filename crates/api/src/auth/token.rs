//! Access-token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. They are never
//! stored server-side: once issued, a token stays valid until `exp`, with no
//! refresh or revocation.

use jsonwebtoken::errors::{Error, ErrorKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use movieflix_core::types::DbId;
use movieflix_db::models::user::User;
use serde::{Deserialize, Serialize};

/// Token lifetime: 24 hours from issuance.
pub const TOKEN_TTL_SECS: i64 = 86_400;

/// Issuer stamped into every token unless configured otherwise.
pub const DEFAULT_ISSUER: &str = "API MovieFlix";

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject -- the user's email, which is also the login name.
    pub sub: String,
    #[serde(rename = "userId")]
    pub user_id: DbId,
    pub name: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp), always `iat + TOKEN_TTL_SECS`.
    pub exp: i64,
    pub iss: String,
}

/// Signing configuration.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    pub issuer: String,
}

/// Issues and verifies access tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    issuer: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            issuer: config.issuer.clone(),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Issue a token for `user`, valid for 24 hours from now.
    pub fn issue(&self, user: &User) -> Result<String, Error> {
        self.issue_at(user, chrono::Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `issued_at`.
    pub fn issue_at(&self, user: &User, issued_at: i64) -> Result<String, Error> {
        let claims = Claims {
            sub: user.email.clone(),
            user_id: user.id,
            name: user.name.clone(),
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
            iss: self.issuer.clone(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    /// Verify signature and issuer, then reject the token if `now >= exp`.
    ///
    /// Expiry is checked here rather than by `jsonwebtoken` so the boundary
    /// is exact: the library applies a default leeway and treats `now == exp`
    /// as still valid.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)?.claims;

        if now >= claims.exp {
            return Err(ErrorKind::ExpiredSignature.into());
        }
        Ok(claims)
    }
}
