//! Account statistics actions.

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use super::Service;
use crate::error::Result;
use crate::query::{StatsOptions, with_query};
use crate::response::Response;
use crate::types::Stats;

/// Provides access to account statistics.
///
/// Obtained via [`MailerLiteClient::stats()`](crate::MailerLiteClient::stats).
#[derive(Debug, Clone, Copy)]
pub struct StatsActions<'a> {
    service: Service<'a>,
}

impl<'a> StatsActions<'a> {
    pub(crate) fn new(service: Service<'a>) -> Self {
        Self { service }
    }

    /// Abandon calls made through this handle once `token` is cancelled.
    pub fn cancel_on(self, token: &'a CancellationToken) -> Self {
        Self::new(self.service.cancel_on(token))
    }

    /// Get basic account stats such as subscriber counts and open rates.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mailerlite::{MailerLiteClient, StatsOptions};
    ///
    /// # async fn example() -> mailerlite::Result<()> {
    /// let client = MailerLiteClient::new("api-key")?;
    ///
    /// let now = client.stats().get(&StatsOptions::new()).await?;
    /// let last_year = client.stats().get(&StatsOptions::at(1609459200)).await?;
    /// println!(
    ///     "Subscribers grew from {} to {}",
    ///     last_year.data.subscribed, now.data.subscribed
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, opts: &StatsOptions) -> Result<Response<Stats>> {
        let path = with_query("stats", opts)?;
        self.service.call::<(), _>(Method::GET, &path, None).await
    }
}
