//! Token issuance and verification.
//!
//! Tokens are compact JWTs signed with HMAC-SHA512 over a 64-byte key.
//! Expiry is compared manually after signature verification so `verify` and
//! `is_expired` share a single decode path and a zero TTL is reported as
//! expired immediately, with no leeway.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::auth::Claims;
use crate::config::TokenConfig;

/// Header `typ` value stamped on issued tokens.
const AUTH_TOKEN_TYPE: &str = "JWT";

/// Required signing key length in bytes (512-bit HMAC key).
const SIGNING_KEY_LEN: usize = 64;

/// Errors that can occur during token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing key is not the required length.
    #[error("signing key must be {SIGNING_KEY_LEN} bytes, got {0}")]
    InvalidKey(usize),

    /// Issuance input was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No token was supplied.
    #[error("token is missing")]
    Missing,

    /// Token is structurally invalid or its signature does not verify.
    #[error("token is malformed")]
    Malformed,

    /// Token signature verifies but the validity window has elapsed.
    #[error("token has expired")]
    Expired,

    /// Token verifies but its claims carry no usable identity.
    #[error("token payload carries no member identity")]
    PayloadInvalid,

    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    Encoding(String),
}

/// Token service for issuance and verification.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Creates a token service from the configured signing key.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::InvalidKey` unless the key is exactly 64 bytes.
    pub fn new(config: &TokenConfig) -> Result<Self, TokenError> {
        let secret = config.secret.as_bytes();
        if secret.len() != SIGNING_KEY_LEN {
            return Err(TokenError::InvalidKey(secret.len()));
        }

        // Expiry is checked manually after decoding; see module docs.
        let mut validation = Validation::new(Algorithm::HS512);
        validation.validate_exp = false;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Issues a signed authorization token for a member.
    ///
    /// Deterministic given identical inputs and clock value.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::InvalidArgument` if `user_id` is empty and
    /// `TokenError::Encoding` if signing fails.
    pub fn issue(&self, user_id: &str, id_type: &str, ttl: Duration) -> Result<String, TokenError> {
        if user_id.is_empty() {
            return Err(TokenError::InvalidArgument(
                "user id must not be empty".to_string(),
            ));
        }

        let claims = Claims::new(user_id, id_type, Utc::now() + ttl);

        let mut header = Header::new(Algorithm::HS512);
        header.typ = Some(AUTH_TOKEN_TYPE.to_string());

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verifies a token and extracts its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Missing` for an absent/empty token,
    /// `TokenError::Malformed` when parsing or signature verification fails,
    /// `TokenError::Expired` for a verified token past its expiry, and
    /// `TokenError::PayloadInvalid` when the claims carry no member identity.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.decode_claims(token)?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }
        if claims.user_id.is_empty() {
            return Err(TokenError::PayloadInvalid);
        }

        Ok(claims)
    }

    /// Checks whether a token's validity window has elapsed.
    ///
    /// Unlike [`verify`](Self::verify), a valid-but-expired token is reported
    /// as `Ok(true)` rather than an error, for refresh-style flows.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Missing` and `TokenError::Malformed` under the
    /// same rules as `verify`.
    pub fn is_expired(&self, token: &str) -> Result<bool, TokenError> {
        let claims = self.decode_claims(token)?;
        Ok(claims.exp <= Utc::now().timestamp())
    }

    /// Decodes a token, verifying its signature but not its expiry.
    fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::Missing);
        }

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str =
        "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    fn create_test_service() -> TokenService {
        TokenService::new(&TokenConfig {
            secret: TEST_SECRET.to_string(),
            ttl_secs: 1800,
        })
        .unwrap()
    }

    #[test]
    fn test_key_must_be_64_bytes() {
        let result = TokenService::new(&TokenConfig {
            secret: "too-short".to_string(),
            ttl_secs: 1800,
        });
        assert!(matches!(result, Err(TokenError::InvalidKey(9))));
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let service = create_test_service();

        let token = service
            .issue("member-1", "REG_NO", Duration::minutes(30))
            .unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.user_id, "member-1");
        assert_eq!(claims.id_type, "REG_NO");
        // iat and exp are stamped a moment apart; allow a one-second straddle.
        assert!((1799..=1800).contains(&(claims.exp - claims.iat)));
    }

    #[test]
    fn test_issue_rejects_empty_user_id() {
        let service = create_test_service();
        let result = service.issue("", "REG_NO", Duration::minutes(30));
        assert!(matches!(result, Err(TokenError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let service = create_test_service();
        let token = service.issue("member-1", "REG_NO", Duration::zero()).unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::Expired)));
        assert!(service.is_expired(&token).unwrap());
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let service = create_test_service();
        let token = service
            .issue("member-1", "REG_NO", Duration::seconds(-60))
            .unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::Expired)));
        assert!(service.is_expired(&token).unwrap());
    }

    #[test]
    fn test_live_token_is_not_expired() {
        let service = create_test_service();
        let token = service
            .issue("member-1", "REG_NO", Duration::minutes(30))
            .unwrap();

        assert!(!service.is_expired(&token).unwrap());
    }

    #[test]
    fn test_missing_token() {
        let service = create_test_service();
        assert!(matches!(service.verify(""), Err(TokenError::Missing)));
        assert!(matches!(service.verify("   "), Err(TokenError::Missing)));
        assert!(matches!(service.is_expired(""), Err(TokenError::Missing)));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = create_test_service();
        assert!(matches!(
            service.verify("not.a.token"),
            Err(TokenError::Malformed)
        ));
        assert!(matches!(
            service.is_expired("not.a.token"),
            Err(TokenError::Malformed)
        ));
    }

    #[test]
    fn test_tampered_signature_is_malformed_even_when_expired() {
        let service = create_test_service();
        // Expired claims; an invalid signature must still win.
        let token = service.issue("member-1", "REG_NO", Duration::zero()).unwrap();

        let (rest, signature) = token.rsplit_once('.').unwrap();
        for (i, original) in signature.char_indices() {
            let flipped = if original == 'A' { 'B' } else { 'A' };
            let mut mutated = String::with_capacity(signature.len());
            mutated.push_str(&signature[..i]);
            mutated.push(flipped);
            mutated.push_str(&signature[i + original.len_utf8()..]);

            let result = service.verify(&format!("{rest}.{mutated}"));
            assert!(
                matches!(result, Err(TokenError::Malformed)),
                "tampered signature at byte {i} was not classified as malformed"
            );
        }
    }

    #[test]
    fn test_token_signed_with_other_key_is_malformed() {
        let service = create_test_service();
        let other = TokenService::new(&TokenConfig {
            secret: "fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210"
                .to_string(),
            ttl_secs: 1800,
        })
        .unwrap();

        let token = other
            .issue("member-1", "REG_NO", Duration::minutes(30))
            .unwrap();
        assert!(matches!(service.verify(&token), Err(TokenError::Malformed)));
    }

    #[test]
    fn test_empty_user_id_payload_is_invalid() {
        let service = create_test_service();

        // Construct claims directly, bypassing issuance.
        let claims = Claims::new("", "REG_NO", Utc::now() + Duration::minutes(30));
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(TokenError::PayloadInvalid)
        ));
        // Expiry inspection does not care about the identity claims.
        assert!(!service.is_expired(&token).unwrap());
    }
}
