use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Lifetime used when a caller does not ask for a specific one.
pub const DEFAULT_TTL_MINUTES: i64 = 15;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Stringified user id.
    pub sub: String,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i64) -> Self {
        Self::with_ttl(user_id, Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    pub fn with_ttl(user_id: i64, ttl: Duration) -> Self {
        Self {
            sub: user_id.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("JWT encode failed: {e}"))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, String> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("JWT decode failed: {e}"))
}
