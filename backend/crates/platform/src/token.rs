//! Bearer Token Service
//!
//! Issues and verifies HMAC-signed JWTs (HS256) carrying the account's
//! identity and role. Tokens are stateless; the signature and the `exp`
//! claim are the only things checked at verification time.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use http::HeaderMap;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind as JwtErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed token lifetime: 60 days from issuance.
pub const TOKEN_TTL: Duration = Duration::from_secs(60 * 24 * 60 * 60);

/// Token issuance/verification failures.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Token issuance failed: {0}")]
    Issuance(String),
}

/// Claims embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier
    pub sub: String,
    /// Account email at issuance time
    pub email: String,
    /// Role code ("agency" or "admin")
    pub role: String,
    /// Issued-at, seconds since epoch
    pub iat: u64,
    /// Expiry, seconds since epoch
    pub exp: u64,
}

/// Issues and verifies signed bearer tokens.
///
/// Constructed once at startup from the application secret and handed to
/// the routers; never read from ambient state.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a service signing with the given secret.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::default(),
            ttl,
        }
    }

    /// Create a service with a random per-process secret (for development;
    /// tokens do not survive a restart).
    pub fn with_random_secret(ttl: Duration) -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut secret);
        Self::new(&secret, ttl)
    }

    /// Issue a token for the given account.
    pub fn issue(&self, subject: &str, email: &str, role: &str) -> Result<String, TokenError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TokenError::Issuance(e.to_string()))?
            .as_secs();

        let claims = Claims {
            sub: subject.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Issuance(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
