//! Authentication Models
//!
//! JWT claim payloads and the verified caller identity extracted from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::User;
use crate::utils::error::{messages, ApiError, ApiResult};

/// Claims carried by a bearer credential: the user id (stringified) and name,
/// valid from `nbf` until `exp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a string
    pub sub: String,
    /// User display name
    pub name: String,
    /// Not valid before (unix seconds)
    pub nbf: i64,
    /// Expiration (unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(user: &User, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user.id.to_string(),
            name: user.name.clone(),
            nbf: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}

/// Identity of the authenticated caller, extracted from verified claims.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
}

impl CurrentUser {
    /// Reads the numeric identity out of a verified token. A token that
    /// verified but carries no usable identity claim is reported as NotFound,
    /// distinct from the Unauthorized raised for a bad token.
    pub fn from_claims(claims: &Claims) -> ApiResult<Self> {
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| ApiError::NotFound(messages::MISSING_IDENTITY.into()))?;

        Ok(Self {
            id,
            name: claims.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user() -> User {
        User {
            id: 7,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[test]
    fn test_claims_carry_id_and_name() {
        let now = Utc::now();
        let claims = Claims::new(&user(), now, now + Duration::hours(24));
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.exp - claims.nbf, 24 * 3600);
    }

    #[test]
    fn test_current_user_from_claims() {
        let now = Utc::now();
        let claims = Claims::new(&user(), now, now + Duration::hours(24));
        let current = CurrentUser::from_claims(&claims).unwrap();
        assert_eq!(current.id, 7);
        assert_eq!(current.name, "Alice");
    }

    #[test]
    fn test_unusable_identity_claim_is_not_found() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            name: "Alice".to_string(),
            nbf: 0,
            exp: 0,
        };
        let err = CurrentUser::from_claims(&claims).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(m) if m == messages::MISSING_IDENTITY));
    }
}
