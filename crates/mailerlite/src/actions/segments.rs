//! Segment actions.

use super::Service;

/// Handle for the segments part of the MailerLite API.
///
/// Obtained via [`MailerLiteClient::segments()`](crate::MailerLiteClient::segments).
/// No operations are exposed yet.
#[derive(Debug, Clone, Copy)]
pub struct SegmentActions<'a> {
    #[allow(dead_code)] // Reserved for the segments operations
    service: Service<'a>,
}

impl<'a> SegmentActions<'a> {
    pub(crate) fn new(service: Service<'a>) -> Self {
        Self { service }
    }
}
