//! Group actions.

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use super::Service;
use crate::error::Result;
use crate::response::Response;
use crate::types::{NewGroupSubscriber, Subscriber};

/// Provides access to group operations.
///
/// Obtained via [`MailerLiteClient::groups()`](crate::MailerLiteClient::groups).
#[derive(Debug, Clone, Copy)]
pub struct GroupActions<'a> {
    service: Service<'a>,
}

impl<'a> GroupActions<'a> {
    pub(crate) fn new(service: Service<'a>) -> Self {
        Self { service }
    }

    /// Abandon calls made through this handle once `token` is cancelled.
    pub fn cancel_on(self, token: &'a CancellationToken) -> Self {
        Self::new(self.service.cancel_on(token))
    }

    /// Add a subscriber to a group.
    ///
    /// Creates the subscriber if the email is not known yet and returns the
    /// subscriber as stored by MailerLite.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mailerlite::{MailerLiteClient, NewGroupSubscriber};
    ///
    /// # async fn example() -> mailerlite::Result<()> {
    /// let client = MailerLiteClient::new("api-key")?;
    /// let subscriber = NewGroupSubscriber::new("demo@example.com")
    ///     .name("Demo")
    ///     .field("city", "Vilnius");
    ///
    /// let added = client.groups().add_subscriber(2984475, &subscriber).await?;
    /// println!("Subscriber ID: {}", added.data.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_subscriber(
        &self,
        group_id: i64,
        subscriber: &NewGroupSubscriber,
    ) -> Result<Response<Subscriber>> {
        self.service
            .call(
                Method::POST,
                &format!("groups/{group_id}/subscribers"),
                Some(subscriber),
            )
            .await
    }
}
