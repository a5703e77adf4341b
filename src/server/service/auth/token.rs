//! HS256 bearer tokens carrying identity and role claims.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Login name of the user.
    pub sub: String,
    pub id: i32,
    pub email: String,
    /// Authority names such as `ROLE_STUDENT`.
    pub roles: Vec<String>,
    /// Issued at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Signs and verifies bearer tokens with a shared secret.
///
/// Cheap to clone; held in `AppState`.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret shared by signing and verification
    /// - `ttl_secs` - Lifetime of issued tokens in seconds
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Issues a token for the user.
    ///
    /// # Returns
    /// - `Ok(String)` - Compact JWT
    /// - `Err(AppError::TokenErr)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user.name.clone(),
            id: user.id,
            email: user.email.clone(),
            roles: vec![user.role.authority().to_string()],
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Validates signature and expiry and returns the claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
