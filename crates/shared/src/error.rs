//! Application-wide error types.

use thiserror::Error;

use crate::jwt::TokenError;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// One variant per rejection the API can return, so handlers map domain
/// failures to a status code and a stable error code in one place.
#[derive(Debug, Error)]
pub enum AppError {
    /// Source amount is not positive or does not exceed the fee.
    #[error("Invalid amount: source amount must be positive and exceed the fee")]
    InvalidAmount,

    /// Target currency is not supported.
    #[error("Invalid currency: '{0}' is not a supported target currency")]
    InvalidCurrency(String),

    /// Exchange rate feed could not be reached.
    #[error("Exchange rate feed unavailable: {0}")]
    FeedUnavailable(String),

    /// Exchange rate feed returned an undecodable response.
    #[error("Exchange rate feed returned an invalid response: {0}")]
    FeedInvalidResponse(String),

    /// No bearer token on the request.
    #[error("Authorization token is missing")]
    TokenMissing,

    /// Bearer token failed structural or signature checks.
    #[error("Authorization token is malformed")]
    TokenMalformed,

    /// Bearer token is past its expiry.
    #[error("Authorization token has expired")]
    TokenExpired,

    /// Bearer token verified but carries no usable identity.
    #[error("Authorization token payload is invalid")]
    TokenPayloadInvalid,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount | Self::InvalidCurrency(_) => 400,
            Self::TokenMissing
            | Self::TokenMalformed
            | Self::TokenExpired
            | Self::TokenPayloadInvalid => 401,
            Self::FeedUnavailable(_) | Self::FeedInvalidResponse(_) => 502,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::FeedUnavailable(_) => "EXCHANGE_FEED_UNAVAILABLE",
            Self::FeedInvalidResponse(_) => "EXCHANGE_FEED_INVALID_RESPONSE",
            Self::TokenMissing => "TOKEN_MISSING",
            Self::TokenMalformed => "TOKEN_MALFORMED",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::TokenPayloadInvalid => "TOKEN_PAYLOAD_INVALID",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Missing => Self::TokenMissing,
            TokenError::Expired => Self::TokenExpired,
            TokenError::PayloadInvalid => Self::TokenPayloadInvalid,
            TokenError::Malformed | TokenError::InvalidArgument(_) => Self::TokenMalformed,
            TokenError::InvalidKey(_) | TokenError::Encoding(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::InvalidAmount.status_code(), 400);
        assert_eq!(AppError::InvalidCurrency(String::new()).status_code(), 400);
        assert_eq!(AppError::FeedUnavailable(String::new()).status_code(), 502);
        assert_eq!(
            AppError::FeedInvalidResponse(String::new()).status_code(),
            502
        );
        assert_eq!(AppError::TokenMissing.status_code(), 401);
        assert_eq!(AppError::TokenMalformed.status_code(), 401);
        assert_eq!(AppError::TokenExpired.status_code(), 401);
        assert_eq!(AppError::TokenPayloadInvalid.status_code(), 401);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidAmount.error_code(), "INVALID_AMOUNT");
        assert_eq!(
            AppError::InvalidCurrency(String::new()).error_code(),
            "INVALID_CURRENCY"
        );
        assert_eq!(
            AppError::FeedUnavailable(String::new()).error_code(),
            "EXCHANGE_FEED_UNAVAILABLE"
        );
        assert_eq!(
            AppError::FeedInvalidResponse(String::new()).error_code(),
            "EXCHANGE_FEED_INVALID_RESPONSE"
        );
        assert_eq!(AppError::TokenMissing.error_code(), "TOKEN_MISSING");
        assert_eq!(AppError::TokenMalformed.error_code(), "TOKEN_MALFORMED");
        assert_eq!(AppError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(
            AppError::TokenPayloadInvalid.error_code(),
            "TOKEN_PAYLOAD_INVALID"
        );
        assert_eq!(AppError::Internal(String::new()).error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_from_token_error() {
        assert!(matches!(
            AppError::from(TokenError::Missing),
            AppError::TokenMissing
        ));
        assert!(matches!(
            AppError::from(TokenError::Expired),
            AppError::TokenExpired
        ));
        assert!(matches!(
            AppError::from(TokenError::Malformed),
            AppError::TokenMalformed
        ));
        assert!(matches!(
            AppError::from(TokenError::PayloadInvalid),
            AppError::TokenPayloadInvalid
        ));
        assert!(matches!(
            AppError::from(TokenError::Encoding("boom".into())),
            AppError::Internal(_)
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::InvalidCurrency("EUR".into()).to_string(),
            "Invalid currency: 'EUR' is not a supported target currency"
        );
        assert_eq!(
            AppError::TokenExpired.to_string(),
            "Authorization token has expired"
        );
        assert_eq!(
            AppError::FeedUnavailable("timed out".into()).to_string(),
            "Exchange rate feed unavailable: timed out"
        );
    }
}
