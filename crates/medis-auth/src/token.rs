use crate::random_bytes;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use medis_types::{IdentityToken, MedisError, MedisResult, TokenClaims, TOKEN_TTL_SECS};
use std::time::Duration;

/// Stand-in for the OAuth identity provider. Holds the placeholder
/// profile that gets stamped into every fabricated token.
#[derive(Clone, Debug)]
pub struct MockIdentityProvider {
    pub issuer: String,
    pub audience: String,
    pub subject: String,
    pub email: String,
    pub name: String,
    pub picture: String,
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self {
            issuer: "https://accounts.google.com".into(),
            audience: "mock-google-client-id".into(),
            subject: "1234567890".into(),
            email: "patient@example.com".into(),
            name: "John Doe".into(),
            picture: "https://example.com/profile.jpg".into(),
        }
    }
}

impl MockIdentityProvider {
    /// Fabricate a structurally JWT-shaped token: JSON header, JSON
    /// claims, random signature bytes, each segment base64url without
    /// padding. The signature verifies nothing.
    pub fn issue_token(&self) -> MedisResult<IdentityToken> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            iss: self.issuer.clone(),
            sub: self.subject.clone(),
            aud: self.audience.clone(),
            exp: now + TOKEN_TTL_SECS,
            iat: now,
            email: self.email.clone(),
            name: self.name.clone(),
            picture: self.picture.clone(),
        };

        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = serde_json::to_vec(&claims)
            .map_err(|e| MedisError::Serialization(e.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(payload);
        let signature = URL_SAFE_NO_PAD.encode(random_bytes::<32>());

        Ok(IdentityToken::new(format!(
            "{}.{}.{}",
            header, payload, signature
        )))
    }

    /// Simulated provider round trip: the delay stands in for the OAuth
    /// redirect, after which a fresh token is issued.
    pub async fn fetch_token(&self, delay: Duration) -> MedisResult<IdentityToken> {
        tokio::time::sleep(delay).await;
        self.issue_token()
    }
}

/// Decode the claims segment of a token. A token without three segments
/// or with a non-JSON payload is rejected, never panicked on.
pub fn decode_claims(token: &IdentityToken) -> MedisResult<TokenClaims> {
    let segments = token.segments();
    if segments.len() != 3 {
        return Err(MedisError::InvalidToken(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    let payload = URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|e| MedisError::InvalidToken(e.to_string()))?;

    serde_json::from_slice(&payload).map_err(|e| MedisError::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_shape() {
        let provider = MockIdentityProvider::default();
        let token = provider.issue_token().unwrap();

        let segments = token.segments();
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_claims_roundtrip() {
        let provider = MockIdentityProvider::default();
        let token = provider.issue_token().unwrap();

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.iss, provider.issuer);
        assert_eq!(claims.aud, provider.audience);
        assert_eq!(claims.email, provider.email);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_decode_rejects_malformed_tokens() {
        assert!(decode_claims(&IdentityToken::new("not-a-token")).is_err());
        assert!(decode_claims(&IdentityToken::new("a.b")).is_err());

        // Three segments but a payload that is not JSON.
        let garbage = format!("{0}.{0}.{0}", URL_SAFE_NO_PAD.encode("garbage"));
        assert!(decode_claims(&IdentityToken::new(garbage)).is_err());
    }

    #[tokio::test]
    async fn test_fetch_token_issues_after_delay() {
        let provider = MockIdentityProvider::default();
        let token = provider.fetch_token(Duration::ZERO).await.unwrap();
        assert_eq!(token.segments().len(), 3);
    }
}
