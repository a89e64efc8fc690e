use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::client::errors::BusinessTypeError;
use crate::client::errors::ClientIdError;
use crate::client::errors::EmailError;

/// Client aggregate entity.
///
/// The authenticated principal: authentication fields (id, email,
/// password hash) plus profile attributes carried along into issued
/// tokens.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: EmailAddress,
    pub address: String,
    pub phone_number: String,
    pub business_type: BusinessType,
    pub api_key: String,
    pub account_active: bool,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Construct a fresh client from validated signup fields.
    ///
    /// The name is title-cased, the account starts active, and both
    /// timestamps are set to now. `password_hash` must already be the
    /// hashed secret, never the plaintext.
    pub fn new(
        name: String,
        email: EmailAddress,
        address: String,
        phone_number: String,
        business_type: BusinessType,
        api_key: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ClientId::new(),
            name: title_case(&name),
            email,
            address,
            phone_number,
            business_type,
            api_key,
            account_active: true,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Client unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    /// Generate a new random client ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a client ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ClientIdError> {
        Uuid::parse_str(s)
            .map(ClientId)
            .map_err(|e| ClientIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Unique
/// across all clients at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Business category of a client account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Retail,
    Wholesale,
    Logistics,
    Other,
}

impl BusinessType {
    /// Parse a business type from its wire representation.
    ///
    /// # Errors
    /// * `Unknown` - Not one of the recognized categories
    pub fn parse(s: &str) -> Result<Self, BusinessTypeError> {
        match s.to_ascii_lowercase().as_str() {
            "retail" => Ok(Self::Retail),
            "wholesale" => Ok(Self::Wholesale),
            "logistics" => Ok(Self::Logistics),
            "other" => Ok(Self::Other),
            _ => Err(BusinessTypeError::Unknown(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Retail => "retail",
            Self::Wholesale => "wholesale",
            Self::Logistics => "logistics",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializable identity snapshot embedded in issued tokens.
///
/// Everything the client record carries except the password hash,
/// which must never leave the service inside a token. Profile edits
/// after issuance are not reflected in outstanding tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientSnapshot {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub business_type: BusinessType,
    pub api_key: String,
    pub account_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Client> for ClientSnapshot {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            email: client.email.as_str().to_string(),
            address: client.address.clone(),
            phone_number: client.phone_number.clone(),
            business_type: client.business_type,
            api_key: client.api_key.clone(),
            account_active: client.account_active,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

/// Command to register a new client with domain types
#[derive(Debug)]
pub struct SignupCommand {
    pub name: String,
    pub email: EmailAddress,
    pub address: String,
    pub phone_number: String,
    pub business_type: BusinessType,
    pub api_key: String,
    pub password: String,
}

/// Command to update an existing client with optional validated fields.
///
/// Only provided fields are updated; the password never changes
/// through a profile edit.
#[derive(Debug, Default)]
pub struct UpdateClientCommand {
    pub name: Option<String>,
    pub email: Option<EmailAddress>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub business_type: Option<BusinessType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_title_cases_name() {
        let client = Client::new(
            "ada lovelace".to_string(),
            EmailAddress::new("ada@example.com".to_string()).unwrap(),
            "12 Analytical Row".to_string(),
            "0700000000".to_string(),
            BusinessType::Retail,
            "key-1".to_string(),
            "$argon2id$hash".to_string(),
        );

        assert_eq!(client.name, "Ada Lovelace");
        assert!(client.account_active);
        assert_eq!(client.created_at, client.updated_at);
    }

    #[test]
    fn test_client_id_round_trip() {
        let id = ClientId::new();
        let parsed = ClientId::from_string(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(ClientId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_email_address_validation() {
        assert!(EmailAddress::new("a@b.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_business_type_parse() {
        assert_eq!(BusinessType::parse("retail").unwrap(), BusinessType::Retail);
        assert_eq!(
            BusinessType::parse("Wholesale").unwrap(),
            BusinessType::Wholesale
        );
        assert!(BusinessType::parse("bakery").is_err());
    }

    #[test]
    fn test_snapshot_excludes_password_hash() {
        let client = Client::new(
            "Test".to_string(),
            EmailAddress::new("t@example.com".to_string()).unwrap(),
            "addr".to_string(),
            "000".to_string(),
            BusinessType::Other,
            "key".to_string(),
            "$argon2id$hash".to_string(),
        );

        let snapshot = ClientSnapshot::from(&client);
        let json = serde_json::to_string(&snapshot).unwrap();

        assert!(!json.contains("argon2id"));
        assert_eq!(snapshot.id, client.id);
        assert_eq!(snapshot.email, "t@example.com");
    }
}
