//! Contact operations: validation, duplicate detection and error classification.
//!
//! Every operation is a single pass against the store. Validation runs before
//! any store call, and store failures are classified into [`ApiError`] here so
//! the HTTP layer only has to map variants to statuses.

use std::sync::Arc;

use database::validation::{validate_id, validate_required};
use database::{Contact, ContactStore, DatabaseError, ValidationError};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ApiError, Result};

/// Create/update request body.
///
/// All fields are optional at the serde level so that missing required fields
/// are reported as validation errors rather than body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(alias = "exist", alias = "published")]
    pub exists: Option<bool>,
}

impl ContactRequest {
    /// Validate required fields and build an unsaved contact.
    pub fn into_contact(self) -> std::result::Result<Contact, ValidationError> {
        let first_name = validate_required("firstName", self.first_name.as_deref())?;
        let last_name = validate_required("lastName", self.last_name.as_deref())?;
        let phone_number = validate_required("phoneNumber", self.phone_number.as_deref())?;

        Ok(Contact {
            id: None,
            first_name,
            last_name,
            phone_number,
            email: self.email,
            address: self.address,
            exists: self.exists.unwrap_or(false),
        })
    }
}

/// Contact operations over a shared store.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// All contacts, or those whose phone number contains `phone_number`.
    pub async fn list(&self, phone_number: Option<&str>) -> Result<Vec<Contact>> {
        let contacts = match phone_number {
            Some(fragment) => self.store.find_by_phone_number_containing(fragment).await?,
            None => self.store.find_all().await?,
        };
        Ok(contacts)
    }

    pub async fn get(&self, id: i64) -> Result<Contact> {
        let id = validate_id(id)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(id))
    }

    /// Contacts with exactly this first name.
    pub async fn find_by_first_name(&self, first_name: Option<&str>) -> Result<Vec<Contact>> {
        let first_name = first_name.ok_or_else(|| ValidationError::Missing("firstName".to_string()))?;
        Ok(self.store.find_by_first_name(first_name).await?)
    }

    /// Contacts with the published flag set.
    pub async fn published(&self) -> Result<Vec<Contact>> {
        Ok(self.store.find_by_exists(true).await?)
    }

    pub async fn count(&self) -> Result<i64> {
        Ok(self.store.count().await?)
    }

    /// Create a contact unless its phone number overlaps an existing one.
    pub async fn create(&self, request: ContactRequest) -> Result<Contact> {
        let contact = request.into_contact()?;

        let overlapping = self
            .store
            .find_phone_number_overlapping(&contact.phone_number)
            .await?;
        if !overlapping.is_empty() {
            debug!(
                phone_number = %contact.phone_number,
                matches = overlapping.len(),
                "Phone number overlaps existing contacts"
            );
            return Err(ApiError::Conflict(contact.phone_number));
        }

        let phone_number = contact.phone_number.clone();
        let created = self.store.save(contact).await.map_err(|err| match err {
            DatabaseError::AlreadyExists { .. } => ApiError::Conflict(phone_number),
            DatabaseError::InvalidArgument(msg) => ApiError::BadRequest(msg),
            other => ApiError::Storage(other),
        })?;

        info!(id = ?created.id, "Contact created");
        Ok(created)
    }

    /// Replace every mutable field of an existing contact.
    ///
    /// The new phone number may not overlap any other contact's number; the
    /// contact's own current number is ignored.
    pub async fn update(&self, id: i64, request: ContactRequest) -> Result<Contact> {
        let id = validate_id(id)?;
        let changes = request.into_contact()?;

        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(id))?;

        let overlapping = self
            .store
            .find_phone_number_overlapping(&changes.phone_number)
            .await?
            .into_iter()
            .filter(|other| other.id != existing.id)
            .count();
        if overlapping > 0 {
            debug!(
                id,
                phone_number = %changes.phone_number,
                matches = overlapping,
                "Updated phone number overlaps other contacts"
            );
            return Err(ApiError::BadRequest(format!(
                "phone number already in use: {}",
                changes.phone_number
            )));
        }

        let contact = Contact {
            id: existing.id,
            ..changes
        };

        let updated = self.store.save(contact).await.map_err(|err| match err {
            DatabaseError::AlreadyExists { id: key, .. } => {
                ApiError::BadRequest(format!("phone number already in use: {}", key))
            }
            DatabaseError::InvalidArgument(msg) => ApiError::BadRequest(msg),
            DatabaseError::NotFound { .. } => ApiError::NotFound(id),
            other => ApiError::Storage(other),
        })?;

        info!(id, "Contact updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let id = validate_id(id)?;

        self.store.delete_by_id(id).await.map_err(|err| match err {
            DatabaseError::NotFound { .. } => ApiError::NotFound(id),
            other => ApiError::Storage(other),
        })?;

        info!(id, "Contact deleted");
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<()> {
        self.store.delete_all().await?;
        info!("All contacts deleted");
        Ok(())
    }
}
