use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::Claims;
use super::errors::TokenError;

/// Builds and parses signed session tokens for a single token class.
///
/// The signing secret and lifetime are fixed at construction; access
/// and refresh tokens are separate codec instances with independent
/// secrets. There is no shared-secret fallback, so a token issued by
/// one codec never parses under another.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl_seconds: i64,
}

impl TokenCodec {
    /// Create a codec bound to one signing secret and one lifetime.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret for this token class
    /// * `ttl_seconds` - lifetime applied to every issued token
    pub fn new(secret: &[u8], ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl_seconds,
        }
    }

    /// Issue a signed token embedding the given identity snapshot.
    ///
    /// The claims payload is `{client, iat: now, exp: now + ttl}`,
    /// signed with HS256 into the compact three-segment form.
    ///
    /// # Errors
    /// * `SigningFailed` - claims serialization or signing failed
    pub fn issue<T: Serialize>(&self, snapshot: &T) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims::new(snapshot, now, now + self.ttl_seconds);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and deserialize its claims.
    ///
    /// Signature and expiry checks are both mandatory; a structurally
    /// valid but expired or mis-signed token is rejected. Expiry is
    /// checked with zero leeway.
    ///
    /// # Errors
    /// * `Expired` - `exp` is in the past
    /// * `BadSignature` - signed with a different secret
    /// * `Malformed` - not a parseable token for this codec
    pub fn parse<T: DeserializeOwned>(&self, token: &str) -> Result<Claims<T>, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims<T>>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::BadSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestSnapshot {
        id: String,
        email: String,
    }

    fn snapshot() -> TestSnapshot {
        TestSnapshot {
            id: "client123".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[test]
    fn test_issue_and_parse() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!", 900);

        let token = codec.issue(&snapshot()).expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims: Claims<TestSnapshot> = codec.parse(&token).expect("Failed to parse token");
        assert_eq!(claims.client, snapshot());
        assert_eq!(claims.exp - claims.iat, 900);
    }

    #[test]
    fn test_parse_expired_token() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!", -10);

        let token = codec.issue(&snapshot()).expect("Failed to issue token");

        let result = codec.parse::<TestSnapshot>(&token);
        assert_eq!(result.unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_parse_with_wrong_secret() {
        let access = TokenCodec::new(b"access_secret_at_least_32_bytes_long!", 900);
        let refresh = TokenCodec::new(b"refresh_secret_at_least_32_bytes_ok!", 900);

        let token = access.issue(&snapshot()).expect("Failed to issue token");

        // Class separation: the refresh key must never validate an
        // access token, even though the token is well-formed and fresh
        let result = refresh.parse::<TestSnapshot>(&token);
        assert_eq!(result.unwrap_err(), TokenError::BadSignature);
    }

    #[test]
    fn test_parse_garbage_token() {
        let codec = TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!", 900);

        let result = codec.parse::<TestSnapshot>("not.a.token");
        assert!(matches!(result.unwrap_err(), TokenError::Malformed(_)));

        let result = codec.parse::<TestSnapshot>("");
        assert!(matches!(result.unwrap_err(), TokenError::Malformed(_)));
    }
}
