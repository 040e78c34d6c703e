//! Campaign actions.

use super::Service;

/// Handle for the campaigns part of the MailerLite API.
///
/// Obtained via [`MailerLiteClient::campaigns()`](crate::MailerLiteClient::campaigns).
/// No operations are exposed yet.
#[derive(Debug, Clone, Copy)]
pub struct CampaignActions<'a> {
    #[allow(dead_code)] // Reserved for the campaigns operations
    service: Service<'a>,
}

impl<'a> CampaignActions<'a> {
    pub(crate) fn new(service: Service<'a>) -> Self {
        Self { service }
    }
}
