pub mod argon2;
pub mod errors;
pub mod strength;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
pub use errors::StrengthError;
pub use strength::validate_strength;
