//! In-process contact stores for handler tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use database::{Contact, ContactStore, DatabaseError, Result};

/// Vec-backed store mirroring the SQLite store's constraints.
///
/// Counts every call so tests can assert that validation happened first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contacts: Mutex<Vec<Contact>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    hide_overlaps: AtomicBool,
}

impl MemoryStore {
    /// Number of store operations invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make the overlap query return nothing, as when a concurrent write lands
    /// between the check and the save.
    pub fn hide_overlaps(&self) {
        self.hide_overlaps.store(true, Ordering::SeqCst);
    }

    fn filter(&self, predicate: impl Fn(&Contact) -> bool) -> Vec<Contact> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let contacts = self.contacts.lock().unwrap();
        contacts.iter().filter(|c| predicate(c)).cloned().collect()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Contact>> {
        Ok(self.filter(|_| true))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>> {
        Ok(self.filter(|c| c.id == Some(id)).into_iter().next())
    }

    async fn find_by_first_name(&self, first_name: &str) -> Result<Vec<Contact>> {
        Ok(self.filter(|c| c.first_name == first_name))
    }

    async fn find_by_phone_number_containing(&self, fragment: &str) -> Result<Vec<Contact>> {
        Ok(self.filter(|c| c.phone_number.contains(fragment)))
    }

    async fn find_phone_number_overlapping(&self, phone_number: &str) -> Result<Vec<Contact>> {
        if self.hide_overlaps.load(Ordering::SeqCst) {
            return Ok(self.filter(|_| false));
        }
        Ok(self.filter(|c| {
            c.phone_number.contains(phone_number) || phone_number.contains(c.phone_number.as_str())
        }))
    }

    async fn find_by_exists(&self, exists: bool) -> Result<Vec<Contact>> {
        Ok(self.filter(|c| c.exists == exists))
    }

    async fn save(&self, contact: Contact) -> Result<Contact> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut contacts = self.contacts.lock().unwrap();

        let taken = contacts
            .iter()
            .any(|c| c.id != contact.id && c.phone_number == contact.phone_number);
        if taken {
            return Err(DatabaseError::AlreadyExists {
                entity: "Contact",
                id: contact.phone_number,
            });
        }

        match contact.id {
            Some(id) => {
                let slot = contacts
                    .iter_mut()
                    .find(|c| c.id == Some(id))
                    .ok_or_else(|| DatabaseError::NotFound {
                        entity: "Contact",
                        id: id.to_string(),
                    })?;
                *slot = contact.clone();
                Ok(contact)
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
                let saved = Contact {
                    id: Some(id),
                    ..contact
                };
                contacts.push(saved.clone());
                Ok(saved)
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id != Some(id));
        if contacts.len() == before {
            return Err(DatabaseError::NotFound {
                entity: "Contact",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.contacts.lock().unwrap().clear();
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.filter(|_| true).len() as i64)
    }
}

/// Store whose every operation fails as if the database were gone.
#[derive(Debug, Default)]
pub struct FailingStore;

fn unavailable<T>() -> Result<T> {
    Err(DatabaseError::Sqlx(sqlx::Error::PoolClosed))
}

#[async_trait]
impl ContactStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<Contact>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Contact>> {
        unavailable()
    }

    async fn find_by_first_name(&self, _first_name: &str) -> Result<Vec<Contact>> {
        unavailable()
    }

    async fn find_by_phone_number_containing(&self, _fragment: &str) -> Result<Vec<Contact>> {
        unavailable()
    }

    async fn find_phone_number_overlapping(&self, _phone_number: &str) -> Result<Vec<Contact>> {
        unavailable()
    }

    async fn find_by_exists(&self, _exists: bool) -> Result<Vec<Contact>> {
        unavailable()
    }

    async fn save(&self, _contact: Contact) -> Result<Contact> {
        unavailable()
    }

    async fn delete_by_id(&self, _id: i64) -> Result<()> {
        unavailable()
    }

    async fn delete_all(&self) -> Result<()> {
        unavailable()
    }

    async fn count(&self) -> Result<i64> {
        unavailable()
    }
}
