//! Action modules for MailerLite resources.
//!
//! Each module provides a handle grouping the operations of one resource.
//! Handles borrow the client through a shared [`Service`] view, so they are
//! free to create and carry no state of their own besides an optional
//! cancellation token.

mod campaigns;
mod fields;
mod groups;
mod segments;
mod settings;
mod stats;
mod subscribers;
mod webhooks;

pub use campaigns::CampaignActions;
pub use fields::FieldActions;
pub use groups::GroupActions;
pub use segments::SegmentActions;
pub use settings::SettingsActions;
pub use stats::StatsActions;
pub use subscribers::SubscriberActions;
pub use webhooks::WebhookActions;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::client::MailerLiteClient;
use crate::error::Result;
use crate::response::{DecodeMode, Response};

/// The client plus the cancellation token bound to a handle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Service<'a> {
    client: &'a MailerLiteClient,
    cancel: Option<&'a CancellationToken>,
}

impl<'a> Service<'a> {
    pub(crate) fn new(client: &'a MailerLiteClient) -> Self {
        Self {
            client,
            cancel: None,
        }
    }

    pub(crate) fn cancel_on(self, token: &'a CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..self
        }
    }

    /// Issue a request and decode its JSON body, defaulting when empty.
    pub(crate) async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let request = self.client.new_request(method, path, body)?;
        let response = self
            .client
            .send::<T>(request, DecodeMode::Json, self.cancel)
            .await?;
        Ok(response.map(Option::unwrap_or_default))
    }

    /// Issue a bodiless request whose response body is ignored.
    pub(crate) async fn call_void(&self, method: Method, path: &str) -> Result<Response<()>> {
        let request = self.client.new_request::<()>(method, path, None)?;
        let response = self
            .client
            .send::<serde_json::Value>(request, DecodeMode::Discard, self.cancel)
            .await?;
        Ok(response.map(|_| ()))
    }
}
