//! Authentication claim types for bearer tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by an authorization token.
///
/// The payload is a fixed, statically-typed claim set; there is no dynamic
/// map to coerce at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Member identifier.
    pub user_id: String,
    /// Kind of identifier carried in `user_id` (e.g. registration number).
    pub id_type: String,
    /// Issued at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a member, issued now.
    #[must_use]
    pub fn new(user_id: &str, id_type: &str, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            id_type: id_type.to_string(),
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the expiry as a UTC timestamp, if representable.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_claims_stamp_issuance() {
        let expires = Utc::now() + Duration::minutes(30);
        let claims = Claims::new("member-1", "REG_NO", expires);

        assert_eq!(claims.user_id, "member-1");
        assert_eq!(claims.id_type, "REG_NO");
        assert_eq!(claims.exp, expires.timestamp());
        assert!(claims.iat <= claims.exp);
    }

    #[test]
    fn test_expires_at_round_trip() {
        let expires = Utc::now() + Duration::hours(1);
        let claims = Claims::new("member-1", "REG_NO", expires);

        assert_eq!(
            claims.expires_at().map(|dt| dt.timestamp()),
            Some(expires.timestamp())
        );
    }

    #[test]
    fn test_claims_serialize_camel_case() {
        let claims = Claims::new("member-1", "REG_NO", Utc::now());
        let json = serde_json::to_string(&claims).unwrap();

        assert!(json.contains("\"userId\":\"member-1\""));
        assert!(json.contains("\"idType\":\"REG_NO\""));
    }
}
