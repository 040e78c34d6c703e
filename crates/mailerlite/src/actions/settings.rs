//! Account settings actions.

use super::Service;

/// Handle for the settings part of the MailerLite API.
///
/// Obtained via [`MailerLiteClient::settings()`](crate::MailerLiteClient::settings).
/// No operations are exposed yet.
#[derive(Debug, Clone, Copy)]
pub struct SettingsActions<'a> {
    #[allow(dead_code)] // Reserved for the settings operations
    service: Service<'a>,
}

impl<'a> SettingsActions<'a> {
    pub(crate) fn new(service: Service<'a>) -> Self {
        Self { service }
    }
}
