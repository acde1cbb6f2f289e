//! Contact CRUD operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Contact;

const ENTITY: &str = "Contact";

/// Insert a new contact and return it with its assigned ID.
///
/// Any `id` already set on `contact` is ignored.
pub async fn create_contact(pool: &SqlitePool, contact: &Contact) -> Result<Contact> {
    let result = sqlx::query(
        r#"
        INSERT INTO contacts (first_name, last_name, phone_number, email, address, exist)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&contact.first_name)
    .bind(&contact.last_name)
    .bind(&contact.phone_number)
    .bind(&contact.email)
    .bind(&contact.address)
    .bind(contact.exists)
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::from_write(e, ENTITY, &contact.phone_number))?;

    Ok(Contact {
        id: Some(result.last_insert_rowid()),
        ..contact.clone()
    })
}

/// Get a contact by ID.
pub async fn get_contact(pool: &SqlitePool, id: i64) -> Result<Option<Contact>> {
    let contact = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, first_name, last_name, phone_number, email, address, exist
        FROM contacts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(contact)
}

/// Overwrite every mutable field of an existing contact.
pub async fn update_contact(pool: &SqlitePool, id: i64, contact: &Contact) -> Result<Contact> {
    let result = sqlx::query(
        r#"
        UPDATE contacts
        SET first_name = ?, last_name = ?, phone_number = ?, email = ?, address = ?, exist = ?
        WHERE id = ?
        "#,
    )
    .bind(&contact.first_name)
    .bind(&contact.last_name)
    .bind(&contact.phone_number)
    .bind(&contact.email)
    .bind(&contact.address)
    .bind(contact.exists)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::from_write(e, ENTITY, &contact.phone_number))?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: ENTITY,
            id: id.to_string(),
        });
    }

    Ok(Contact {
        id: Some(id),
        ..contact.clone()
    })
}

/// Delete a contact by ID.
pub async fn delete_contact(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM contacts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: ENTITY,
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete every contact. Returns the number of rows removed.
pub async fn delete_all_contacts(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM contacts
        "#,
    )
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// List all contacts.
pub async fn list_contacts(pool: &SqlitePool) -> Result<Vec<Contact>> {
    let contacts = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, first_name, last_name, phone_number, email, address, exist
        FROM contacts
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(contacts)
}

/// List contacts with an exact first name.
pub async fn list_contacts_by_first_name(pool: &SqlitePool, first_name: &str) -> Result<Vec<Contact>> {
    let contacts = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, first_name, last_name, phone_number, email, address, exist
        FROM contacts
        WHERE first_name = ?
        ORDER BY id
        "#,
    )
    .bind(first_name)
    .fetch_all(pool)
    .await?;

    Ok(contacts)
}

/// List contacts whose phone number contains `fragment`.
///
/// Uses `instr` rather than `LIKE` so `%` and `_` match literally.
pub async fn list_contacts_by_phone_fragment(pool: &SqlitePool, fragment: &str) -> Result<Vec<Contact>> {
    let contacts = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, first_name, last_name, phone_number, email, address, exist
        FROM contacts
        WHERE instr(phone_number, ?) > 0
        ORDER BY id
        "#,
    )
    .bind(fragment)
    .fetch_all(pool)
    .await?;

    Ok(contacts)
}

/// List contacts whose phone number contains `phone_number` or is contained by it.
pub async fn list_overlapping_phone_numbers(pool: &SqlitePool, phone_number: &str) -> Result<Vec<Contact>> {
    let contacts = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, first_name, last_name, phone_number, email, address, exist
        FROM contacts
        WHERE instr(phone_number, ?1) > 0 OR instr(?1, phone_number) > 0
        ORDER BY id
        "#,
    )
    .bind(phone_number)
    .fetch_all(pool)
    .await?;

    Ok(contacts)
}

/// List contacts by their published flag.
pub async fn list_contacts_by_exists(pool: &SqlitePool, exists: bool) -> Result<Vec<Contact>> {
    let contacts = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, first_name, last_name, phone_number, email, address, exist
        FROM contacts
        WHERE exist = ?
        ORDER BY id
        "#,
    )
    .bind(exists)
    .fetch_all(pool)
    .await?;

    Ok(contacts)
}

/// Count total contacts.
pub async fn count_contacts(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM contacts
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
