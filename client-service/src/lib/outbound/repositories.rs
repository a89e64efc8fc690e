pub mod client;
pub mod token;

pub use client::PostgresClientRepository;
pub use token::PostgresTokenRepository;
