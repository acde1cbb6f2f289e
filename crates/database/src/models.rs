//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored contact.
///
/// `id` is `None` until the record has been persisted; the store assigns it on
/// insert and never changes it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Auto-incrementing ID.
    #[serde(default)]
    pub id: Option<i64>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Phone number, also the conflict key for new contacts.
    pub phone_number: String,
    /// Email address, if known.
    #[serde(default)]
    pub email: Option<String>,
    /// Postal address, if known.
    #[serde(default)]
    pub address: Option<String>,
    /// User-settable published flag.
    #[serde(default, alias = "exist", alias = "published")]
    #[sqlx(rename = "exist")]
    pub exists: bool,
}

impl Contact {
    /// Build an unsaved contact with only the required fields set.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            email: None,
            address: None,
            exists: false,
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the postal address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_json_is_camel_case() {
        let contact = Contact {
            id: Some(7),
            ..Contact::new("John", "Doe", "555-1234").with_email("john@example.com")
        };

        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["firstName"], "John");
        assert_eq!(value["phoneNumber"], "555-1234");
        assert_eq!(value["email"], "john@example.com");
        assert_eq!(value["address"], serde_json::Value::Null);
        assert_eq!(value["exists"], false);
    }

    #[test]
    fn test_contact_accepts_legacy_flag_names() {
        let json = r#"{"firstName":"A","lastName":"B","phoneNumber":"1","exist":true}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert!(contact.exists);
        assert_eq!(contact.id, None);

        let json = r#"{"firstName":"A","lastName":"B","phoneNumber":"1","published":true}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert!(contact.exists);
    }
}
