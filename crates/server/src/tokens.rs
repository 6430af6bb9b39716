//! Session tokens.
//!
//! Tokens are self-contained: a base64url JSON payload
//! `{sub, username, type, exp}` followed by a base64url HMAC-SHA256 signature
//! over the encoded payload, joined with a dot. The signing secret is
//! injected at construction; the signer never reads the environment.
//!
//! There is no revocation list. Logout is an acknowledgment only and issued
//! tokens stay valid until their natural expiry.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Access token lifetime: 15 minutes.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;
/// Refresh token lifetime: 7 days.
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Expiry as unix seconds; valid strictly before this instant.
    pub exp: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("bad signature")]
    BadSignature,
    #[error("wrong token type")]
    WrongKind,
    #[error("token expired")]
    Expired,
}

/// An access/refresh pair issued together.
#[derive(Clone, Debug)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Signs and verifies session tokens with a symmetric secret.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl TokenSigner {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.secret).expect("hmac accepts keys of any length")
    }

    pub fn sign(&self, claims: &Claims) -> String {
        let json = serde_json::to_vec(claims).expect("claims serialize to JSON");
        let payload = URL_SAFE_NO_PAD.encode(json);
        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        format!("{payload}.{signature}")
    }

    /// Verifies signature, token type and expiry, in that order.
    ///
    /// The signature check is constant-time. Callers collapse every variant
    /// to the same generic 401, so the error only matters for logs and tests.
    pub fn verify(
        &self,
        token: &str,
        expected: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let (payload, signature) = token.split_once('.').ok_or(TokenError::Malformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let claims: Claims = serde_json::from_slice(&json).map_err(|_| TokenError::Malformed)?;

        if claims.kind != expected {
            return Err(TokenError::WrongKind);
        }
        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// Issues a fresh access/refresh pair for a user.
    pub fn issue_pair(&self, sub: i64, username: &str, now: DateTime<Utc>) -> TokenPair {
        let access = self.sign(&Claims {
            sub,
            username: username.to_string(),
            kind: TokenKind::Access,
            exp: now.timestamp() + ACCESS_TOKEN_TTL_SECS,
        });
        let refresh = self.sign(&Claims {
            sub,
            username: username.to_string(),
            kind: TokenKind::Refresh,
            exp: now.timestamp() + REFRESH_TOKEN_TTL_SECS,
        });
        TokenPair { access, refresh }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn signer() -> TokenSigner {
        TokenSigner::new("test-secret".as_bytes())
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn sign_verify_round_trip() {
        let signer = signer();
        let now = at(1_700_000_000);
        let pair = signer.issue_pair(42, "alice", now);

        let claims = signer
            .verify(&pair.access, TokenKind::Access, now)
            .unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp, now.timestamp() + ACCESS_TOKEN_TTL_SECS);
    }

    #[test]
    fn access_token_is_not_a_refresh_token() {
        let signer = signer();
        let now = at(1_700_000_000);
        let pair = signer.issue_pair(42, "alice", now);

        assert_eq!(
            signer.verify(&pair.access, TokenKind::Refresh, now),
            Err(TokenError::WrongKind)
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let signer = signer();
        let issued = at(1_700_000_000);
        let pair = signer.issue_pair(42, "alice", issued);

        let after_expiry = at(issued.timestamp() + ACCESS_TOKEN_TTL_SECS);
        assert_eq!(
            signer.verify(&pair.access, TokenKind::Access, after_expiry),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn token_valid_right_up_to_expiry() {
        let signer = signer();
        let issued = at(1_700_000_000);
        let pair = signer.issue_pair(42, "alice", issued);

        let last_valid = at(issued.timestamp() + ACCESS_TOKEN_TTL_SECS - 1);
        assert!(
            signer
                .verify(&pair.access, TokenKind::Access, last_valid)
                .is_ok()
        );
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let signer = signer();
        let now = at(1_700_000_000);
        let token = signer.sign(&Claims {
            sub: 42,
            username: "alice".to_string(),
            kind: TokenKind::Access,
            exp: now.timestamp() + 60,
        });

        let (_, signature) = token.split_once('.').unwrap();
        let forged_payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&Claims {
                sub: 1,
                username: "mallory".to_string(),
                kind: TokenKind::Access,
                exp: now.timestamp() + 60,
            })
            .unwrap(),
        );
        let forged = format!("{forged_payload}.{signature}");

        assert_eq!(
            signer.verify(&forged, TokenKind::Access, now),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let other = TokenSigner::new("other-secret".as_bytes());
        let now = at(1_700_000_000);
        let pair = other.issue_pair(42, "alice", now);

        assert_eq!(
            signer().verify(&pair.access, TokenKind::Access, now),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn missing_separator_is_malformed() {
        let now = at(1_700_000_000);
        assert_eq!(
            signer().verify("not-a-token", TokenKind::Access, now),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn reissued_pair_differs_but_resolves_to_same_subject() {
        let signer = signer();
        let login_at = at(1_700_000_000);
        let first = signer.issue_pair(42, "alice", login_at);

        let refresh_at = at(1_700_000_001);
        let second = signer.issue_pair(42, "alice", refresh_at);

        assert_ne!(first.access, second.access);
        let first_claims = signer
            .verify(&first.access, TokenKind::Access, login_at)
            .unwrap();
        let second_claims = signer
            .verify(&second.access, TokenKind::Access, refresh_at)
            .unwrap();
        assert_eq!(first_claims.sub, second_claims.sub);
        assert!(second_claims.exp > first_claims.exp);
    }
}
