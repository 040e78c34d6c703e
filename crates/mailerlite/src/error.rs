//! Error types for the mailerlite crate.
//!
//! Every failure is returned as an [`Error`] value; nothing in the request
//! pipeline panics or retries.
//!
//! # Error Handling
//!
//! The variants map onto the stages a call goes through:
//!
//! - [`Error::Config`]: the client was built with an invalid setting
//! - [`Error::Url`], [`Error::Path`], [`Error::Query`], [`Error::Encode`],
//!   [`Error::Request`]: the request could not be built
//! - [`Error::Http`], [`Error::Cancelled`]: the call never produced a response
//! - [`Error::Api`]: MailerLite answered with a non-2xx status
//! - [`Error::Decode`], [`Error::Io`]: a 2xx body could not be consumed
//!
//! # Example
//!
//! ```no_run
//! use mailerlite::{Error, MailerLiteClient};
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLiteClient::new("api-key")?;
//!
//! match client.subscribers().get("demo@example.com").await {
//!     Ok(response) => println!("Found {}", response.data.email),
//!     Err(Error::Api(err)) if err.status.as_u16() == 404 => {
//!         println!("No such subscriber: {}", err.detail.message);
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// The error type for MailerLite operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid client configuration.
    ///
    /// Raised by [`ClientBuilder::build()`](crate::ClientBuilder::build), for
    /// example when the base URL does not end in `/`.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The relative request path could not be resolved against the base URL.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// A path segment such as a subscriber email cannot be addressed.
    #[error("Invalid path segment: {0:?}")]
    Path(String),

    /// Query options could not be encoded.
    #[error("Query encoding failed: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The request body could not be encoded as JSON.
    #[error("JSON encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// reqwest rejected the assembled request, for example a header value.
    #[error("Invalid request: {0}")]
    Request(#[source] reqwest::Error),

    /// Transport failure from reqwest (DNS, TLS, connection).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The caller's cancellation token fired.
    ///
    /// Takes precedence over a transport failure that happened while the
    /// token was cancelled.
    #[error("Request cancelled")]
    Cancelled,

    /// MailerLite answered with a status outside 200-299.
    #[error(transparent)]
    Api(Box<ApiError>),

    /// A successful response carried malformed JSON.
    #[error("Failed to decode {status} response: {source}")]
    Decode {
        /// Status of the response whose body failed to decode.
        status: StatusCode,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Writing a raw response body to the caller's sink failed.
    #[error("Failed to write response body: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The HTTP status associated with this error, if a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(err) => Some(err.status),
            Error::Decode { status, .. } => Some(*status),
            Error::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Returns the API error payload, if this is an [`Error::Api`].
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the call was abandoned because its cancellation token fired.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(Box::new(err))
    }
}

/// A non-2xx response from MailerLite.
///
/// Carries the request that caused it alongside whatever the server said.
/// If the error body could not be decoded, `detail` is left empty.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Method of the failed request.
    pub method: Method,
    /// Fully resolved URL of the failed request.
    pub url: Url,
    /// Status returned by MailerLite.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Decoded `{"error": {...}}` payload.
    pub detail: ErrorDetail,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {} {}",
            self.method,
            self.url,
            self.status.as_u16(),
            self.detail.message,
            self.detail.code
        )
    }
}

impl std::error::Error for ApiError {}

/// Details about what went wrong during a failed API request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (0 when absent).
    #[serde(default)]
    pub code: i64,
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code == 0 {
            f.write_str(&self.message)
        } else {
            write!(f, "{} (code: {})", self.message, self.code)
        }
    }
}

/// The error envelope MailerLite wraps around [`ErrorDetail`].
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: ErrorDetail,
}

impl ErrorEnvelope {
    /// Decode an error body, tolerating anything that does not match.
    pub fn parse(body: &[u8]) -> ErrorDetail {
        serde_json::from_slice::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error)
            .unwrap_or_default()
    }
}

/// A specialized Result type for MailerLite operations.
pub type Result<T> = std::result::Result<T, Error>;
