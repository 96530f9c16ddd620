//! Unverified JWT payload decoding.
//!
//! The client never verifies token signatures (that is the server's job); it
//! only needs the embedded role and expiry to decide whether a stored session
//! is still usable. A malformed token is reported as an authentication error
//! and must never panic the caller.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{LinkError, Result};

/// Claims embedded in a job-board JWT payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject: the account identifier (email)
    pub sub: String,

    /// Role granted to the account ("admin" or "user")
    #[serde(default)]
    pub role: String,

    /// Expiry as a unix timestamp in seconds
    pub exp: i64,
}

impl Claims {
    /// Whether the embedded expiry is in the past
    pub fn is_expired(&self) -> bool {
        self.exp <= chrono::Utc::now().timestamp()
    }
}

/// Decode the claims from a JWT without verifying the signature.
///
/// Splits the compact form on `.`, base64url-decodes the payload segment and
/// parses it as JSON. Any structural problem yields
/// [`LinkError::AuthenticationError`].
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_header), Some(payload)) if !payload.is_empty() => payload,
        _ => {
            return Err(LinkError::AuthenticationError(
                "malformed token: expected header.payload.signature".into(),
            ))
        }
    };

    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| LinkError::AuthenticationError(format!("malformed token payload: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| LinkError::AuthenticationError(format!("malformed token claims: {}", e)))
}

/// Build a compact JWT with the given claims and a dummy signature.
///
/// Test-only: production tokens come from the server.
#[cfg(test)]
pub(crate) fn encode_test_token(claims: &Claims) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
    format!("{}.{}.sig", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: &str, exp: i64) -> Claims {
        Claims {
            sub: "alice@example.com".to_string(),
            role: role.to_string(),
            exp,
        }
    }

    #[test]
    fn test_decode_round_trip() {
        let original = claims("admin", chrono::Utc::now().timestamp() + 3600);
        let token = encode_test_token(&original);

        let decoded = decode_claims(&token).unwrap();
        assert_eq!(decoded, original);
        assert!(!decoded.is_expired());
    }

    #[test]
    fn test_expired_claims() {
        let past = claims("user", chrono::Utc::now().timestamp() - 60);
        let token = encode_test_token(&past);
        assert!(decode_claims(&token).unwrap().is_expired());
    }

    #[test]
    fn test_malformed_tokens_never_panic() {
        for bad in ["", "not-a-jwt", "a.", "a.!!!.c", "a.b.c"] {
            match decode_claims(bad) {
                Err(LinkError::AuthenticationError(_)) => {}
                other => panic!("expected AuthenticationError for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_missing_role_defaults_to_empty() {
        let payload = general_purpose::URL_SAFE_NO_PAD
            .encode(br#"{"sub":"bob@example.com","exp":4102444800}"#);
        let token = format!("h.{}.s", payload);

        let decoded = decode_claims(&token).unwrap();
        assert_eq!(decoded.role, "");
    }
}
