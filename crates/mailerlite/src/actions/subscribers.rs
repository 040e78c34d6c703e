//! Subscriber actions.
//!
//! # Example
//!
//! ```no_run
//! use mailerlite::{MailerLiteClient, SubscriberListOptions, SubscriptionType};
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLiteClient::new("api-key")?;
//!
//! let opts = SubscriberListOptions::new()
//!     .subscription_type(SubscriptionType::Unconfirmed)
//!     .limit(100);
//! for subscriber in client.subscribers().list(&opts).await?.data {
//!     println!("{} <{}>", subscriber.name, subscriber.email);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use super::Service;
use crate::error::Result;
use crate::query::{SubscriberListOptions, with_query};
use crate::request::path_segment;
use crate::response::Response;
use crate::types::Subscriber;

/// Provides access to subscriber operations.
///
/// Obtained via [`MailerLiteClient::subscribers()`](crate::MailerLiteClient::subscribers).
#[derive(Debug, Clone, Copy)]
pub struct SubscriberActions<'a> {
    service: Service<'a>,
}

impl<'a> SubscriberActions<'a> {
    pub(crate) fn new(service: Service<'a>) -> Self {
        Self { service }
    }

    /// Abandon calls made through this handle once `token` is cancelled.
    pub fn cancel_on(self, token: &'a CancellationToken) -> Self {
        Self::new(self.service.cancel_on(token))
    }

    /// List subscribers, optionally filtered by state and paginated.
    pub async fn list(&self, opts: &SubscriberListOptions) -> Result<Response<Vec<Subscriber>>> {
        let path = with_query("subscribers", opts)?;
        self.service.call::<(), _>(Method::GET, &path, None).await
    }

    /// Fetch a single subscriber by email address (or numeric ID).
    ///
    /// The value is percent-encoded into one path segment, so characters
    /// like `#` and `?` that are valid in an email reach the API intact.
    pub async fn get(&self, email: &str) -> Result<Response<Subscriber>> {
        let path = format!("subscribers/{}", path_segment(email)?);
        self.service.call::<(), _>(Method::GET, &path, None).await
    }
}
