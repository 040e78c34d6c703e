//! Custom field actions.
//!
//! Fields are the custom attributes stored on every subscriber profile.
//!
//! # Example
//!
//! ```no_run
//! use mailerlite::{FieldType, MailerLiteClient, NewField};
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLiteClient::new("api-key")?;
//!
//! let created = client
//!     .fields()
//!     .create(&NewField::new("Company", FieldType::Text))
//!     .await?;
//! println!("Created field {} with key {}", created.data.id, created.data.key);
//!
//! for field in client.fields().list().await?.data {
//!     println!("{}: {:?}", field.title, field.field_type);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use super::Service;
use crate::error::Result;
use crate::response::Response;
use crate::types::{Field, FieldUpdate, NewField};

/// Provides access to custom field operations.
///
/// Obtained via [`MailerLiteClient::fields()`](crate::MailerLiteClient::fields).
#[derive(Debug, Clone, Copy)]
pub struct FieldActions<'a> {
    service: Service<'a>,
}

impl<'a> FieldActions<'a> {
    pub(crate) fn new(service: Service<'a>) -> Self {
        Self { service }
    }

    /// Abandon calls made through this handle once `token` is cancelled.
    pub fn cancel_on(self, token: &'a CancellationToken) -> Self {
        Self::new(self.service.cancel_on(token))
    }

    /// List all fields.
    pub async fn list(&self) -> Result<Response<Vec<Field>>> {
        self.service.call::<(), _>(Method::GET, "fields", None).await
    }

    /// Create a new field.
    pub async fn create(&self, field: &NewField) -> Result<Response<Field>> {
        self.service.call(Method::POST, "fields", Some(field)).await
    }

    /// Update a field.
    ///
    /// Only the title of a field can be changed.
    pub async fn update(&self, id: i64, update: &FieldUpdate) -> Result<Response<Field>> {
        self.service
            .call(Method::PUT, &format!("fields/{id}"), Some(update))
            .await
    }

    /// Delete a field.
    pub async fn delete(&self, id: i64) -> Result<Response<()>> {
        self.service
            .call_void(Method::DELETE, &format!("fields/{id}"))
            .await
    }
}
