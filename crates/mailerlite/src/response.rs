//! Response metadata and decode modes for the request pipeline.

use std::fmt;
use std::io::Write;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// A successful MailerLite response.
///
/// Wraps the decoded payload together with the status and headers the
/// server sent, so callers can inspect things like rate limit headers.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// HTTP status (always in the 2xx range).
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// The decoded payload.
    pub data: T,
}

impl<T> Response<T> {
    /// Discard the metadata and keep the payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transform the payload while keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            status: self.status,
            headers: self.headers,
            data: f(self.data),
        }
    }
}

/// How the body of a successful response is consumed.
///
/// Selected by the caller of
/// [`MailerLiteClient::send()`](crate::MailerLiteClient::send).
pub enum DecodeMode<'a> {
    /// Decode the body as JSON. An empty body yields no value.
    Json,
    /// Copy the body verbatim into the sink without decoding it.
    Raw(&'a mut (dyn Write + Send)),
    /// Ignore the body entirely.
    Discard,
}

impl fmt::Debug for DecodeMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeMode::Json => f.write_str("Json"),
            DecodeMode::Raw(_) => f.write_str("Raw(..)"),
            DecodeMode::Discard => f.write_str("Discard"),
        }
    }
}
