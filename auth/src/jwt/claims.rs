use serde::Deserialize;
use serde::Serialize;

/// Claims payload carried by a session token.
///
/// Generic over the embedded identity snapshot so the service decides
/// what a token says about its bearer. `iat` and `exp` are Unix
/// timestamps; `exp` is always set and always validated on parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims<T> {
    /// Embedded identity snapshot of the authenticated client
    pub client: T,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl<T> Claims<T> {
    pub fn new(client: T, iat: i64, exp: i64) -> Self {
        Self { client, iat, exp }
    }

    /// Check whether the token is expired relative to a given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_expired() {
        let claims = Claims::new("client123", 900, 1000);

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let claims = Claims::new(serde_json::json!({"id": "abc", "email": "a@b.com"}), 1, 2);

        let encoded = serde_json::to_string(&claims).unwrap();
        let decoded: Claims<serde_json::Value> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, claims);
    }
}
