//! The contact store abstraction and its SQLite implementation.

use async_trait::async_trait;

use crate::contact;
use crate::error::Result;
use crate::models::Contact;
use crate::Database;

/// Repository-style access to contact records.
///
/// Implementations must be cheap to share between concurrent requests and
/// must not hold per-request state. This trait is object-safe and is used as
/// `Arc<dyn ContactStore>`.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts, ordered by ID.
    async fn find_all(&self) -> Result<Vec<Contact>>;

    /// A single contact, or `None` if the ID is unknown.
    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>>;

    /// Contacts whose first name equals `first_name` exactly.
    async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Contact>>;

    /// Contacts whose phone number contains `fragment`.
    async fn find_by_phone_number_containing(&self, fragment: &str) -> Result<Vec<Contact>>;

    /// Contacts whose phone number contains `phone_number` or is contained in it.
    async fn find_phone_number_overlapping(&self, phone_number: &str) -> Result<Vec<Contact>>;

    /// Contacts with the given published flag.
    async fn find_by_exists(&self, exists: bool) -> Result<Vec<Contact>>;

    /// Insert when `contact.id` is `None`, otherwise overwrite the stored record.
    ///
    /// Overwriting an unknown ID fails with `DatabaseError::NotFound`.
    async fn save(&self, contact: Contact) -> Result<Contact>;

    /// Delete one contact. Fails with `DatabaseError::NotFound` if it is absent.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Delete every contact.
    async fn delete_all(&self) -> Result<()>;

    /// Number of stored contacts.
    async fn count(&self) -> Result<i64>;
}

/// [`ContactStore`] backed by the SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteContactStore {
    db: Database,
}

impl SqliteContactStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactStore for SqliteContactStore {
    async fn find_all(&self) -> Result<Vec<Contact>> {
        contact::list_contacts(self.db.pool()).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>> {
        contact::get_contact(self.db.pool(), id).await
    }

    async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Contact>> {
        contact::list_contacts_by_first_name(self.db.pool(), first_name).await
    }

    async fn find_by_phone_number_containing(&self, fragment: &str) -> Result<Vec<Contact>> {
        contact::list_contacts_by_phone_fragment(self.db.pool(), fragment).await
    }

    async fn find_phone_number_overlapping(&self, phone_number: &str) -> Result<Vec<Contact>> {
        contact::list_overlapping_phone_numbers(self.db.pool(), phone_number).await
    }

    async fn find_by_exists(&self, exists: bool) -> Result<Vec<Contact>> {
        contact::list_contacts_by_exists(self.db.pool(), exists).await
    }

    async fn save(&self, contact: Contact) -> Result<Contact> {
        match contact.id {
            Some(id) => contact::update_contact(self.db.pool(), id, &contact).await,
            None => contact::create_contact(self.db.pool(), &contact).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        contact::delete_contact(self.db.pool(), id).await
    }

    async fn delete_all(&self) -> Result<()> {
        let removed = contact::delete_all_contacts(self.db.pool()).await?;
        tracing::debug!(removed, "Deleted all contacts");
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        contact::count_contacts(self.db.pool()).await
    }
}
