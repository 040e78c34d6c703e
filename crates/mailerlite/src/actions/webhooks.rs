//! Webhook actions.

use super::Service;

/// Handle for the webhooks part of the MailerLite API.
///
/// Obtained via [`MailerLiteClient::webhooks()`](crate::MailerLiteClient::webhooks).
/// No operations are exposed yet.
#[derive(Debug, Clone, Copy)]
pub struct WebhookActions<'a> {
    #[allow(dead_code)] // Reserved for the webhooks operations
    service: Service<'a>,
}

impl<'a> WebhookActions<'a> {
    pub(crate) fn new(service: Service<'a>) -> Self {
        Self { service }
    }
}
