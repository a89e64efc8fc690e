//! Credential and token primitives shared by the client service.
//!
//! Two independent building blocks:
//! - Password hashing (Argon2id) and secret-strength validation
//! - Signed session tokens (JWT, HS256) carrying an embedded identity
//!   snapshot and an expiry
//!
//! A [`TokenCodec`] is bound to exactly one signing secret and one
//! lifetime at construction. Access and refresh tokens are therefore
//! separate codec instances; a token signed for one class never
//! validates against the other.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Abc123!").unwrap();
//! assert!(hasher.verify("Abc123!", &hash).unwrap());
//! ```
//!
//! ## Token issuance and resolution
//! ```
//! use auth::TokenCodec;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", 900);
//! let token = codec.issue(&"client123".to_string()).unwrap();
//! let claims = codec.parse::<String>(&token).unwrap();
//! assert_eq!(claims.client, "client123");
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::StrengthError;
pub use password::validate_strength;
