//! Token Service
//!
//! Issues and verifies the bearer credential asserting a user identity.
//! Tokens are HS256-signed, carry the user id and name, and are valid for
//! 24 hours with no clock skew allowance. No audience or issuer validation
//! is performed.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::Claims;
use crate::models::user::User;
use crate::utils::error::{ApiError, ApiResult};

/// Token validity window.
const TOKEN_VALIDITY_HOURS: i64 = 24;

#[derive(Clone)]
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Signs a credential for the given user.
    pub fn issue(&self, user: &User) -> ApiResult<String> {
        let now = Utc::now();
        let claims = Claims::new(user, now, now + Duration::hours(TOKEN_VALIDITY_HOURS));

        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&header, &claims, &encoding_key).map_err(|e| ApiError::Token(e.to_string()))
    }

    /// Verifies a presented credential and returns its claims. Any signature,
    /// expiry or not-before failure collapses to Unauthorized; nothing about
    /// the token is leaked to the caller.
    pub fn verify(&self, token: &str) -> ApiResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;

        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| ApiError::Unauthorized)
    }
}
