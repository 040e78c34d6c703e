//! The MailerLite client and builder.

use std::io::Write;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::actions::{
    CampaignActions, FieldActions, GroupActions, SegmentActions, Service, SettingsActions,
    StatsActions, SubscriberActions, WebhookActions,
};
use crate::error::{ApiError, Error, ErrorEnvelope, Result};
use crate::request::{APPLICATION_JSON, HEADER_API_KEY, encode_body};
use crate::response::{DecodeMode, Response};

/// Default base URL of the public MailerLite v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.mailerlite.com/api/v2/";

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = "mailerlite-rs";

/// The main client for interacting with the MailerLite API.
///
/// Cloning is cheap and clones share the underlying connection pool, so a
/// single client can serve many concurrent calls.
///
/// # Example
///
/// ```no_run
/// use mailerlite::MailerLiteClient;
///
/// # async fn example() -> mailerlite::Result<()> {
/// let client = MailerLiteClient::new("your-api-key")?;
///
/// let stats = client.stats().get(&Default::default()).await?;
/// println!("{} active subscribers", stats.data.subscribed);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MailerLiteClient {
    http_client: Client,
    base_url: Url,
    user_agent: Option<String>,
    api_key: String,
}

impl std::fmt::Debug for MailerLiteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailerLiteClient")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl MailerLiteClient {
    /// Create a client for the public API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// The base URL relative paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured `User-Agent`, if any.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    fn service(&self) -> Service<'_> {
        Service::new(self)
    }

    /// Access campaign operations.
    pub fn campaigns(&self) -> CampaignActions<'_> {
        CampaignActions::new(self.service())
    }

    /// Access custom field operations.
    pub fn fields(&self) -> FieldActions<'_> {
        FieldActions::new(self.service())
    }

    /// Access group operations.
    pub fn groups(&self) -> GroupActions<'_> {
        GroupActions::new(self.service())
    }

    /// Access segment operations.
    pub fn segments(&self) -> SegmentActions<'_> {
        SegmentActions::new(self.service())
    }

    /// Access account settings.
    pub fn settings(&self) -> SettingsActions<'_> {
        SettingsActions::new(self.service())
    }

    /// Access account statistics.
    pub fn stats(&self) -> StatsActions<'_> {
        StatsActions::new(self.service())
    }

    /// Access subscriber operations.
    pub fn subscribers(&self) -> SubscriberActions<'_> {
        SubscriberActions::new(self.service())
    }

    /// Access webhook operations.
    pub fn webhooks(&self) -> WebhookActions<'_> {
        WebhookActions::new(self.service())
    }

    /// Build an API request.
    ///
    /// `path` is resolved against the base URL and should not start with a
    /// slash. If `body` is given it is JSON-encoded and sent with
    /// `Content-Type: application/json`.
    pub fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;

        let mut builder = self
            .http_client
            .request(method, url)
            .header(HEADER_API_KEY, &self.api_key)
            .header(ACCEPT, APPLICATION_JSON);

        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, APPLICATION_JSON)
                .body(encode_body(body)?);
        }

        if let Some(agent) = &self.user_agent {
            builder = builder.header(USER_AGENT, agent);
        }

        builder.build().map_err(|e| {
            if e.is_builder() {
                Error::Request(e)
            } else {
                Error::Http(e)
            }
        })
    }

    /// Send a request and consume the response body according to `mode`.
    ///
    /// Statuses outside 200-299 become [`Error::Api`]. With
    /// [`DecodeMode::Json`] the body is decoded into `T`; an empty body
    /// yields `None`. The other modes always yield `None`.
    ///
    /// If `cancel` fires before or during the call, [`Error::Cancelled`] is
    /// returned, including when the transport failed at the same time.
    pub async fn send<T>(
        &self,
        request: Request,
        mode: DecodeMode<'_>,
        cancel: Option<&CancellationToken>,
    ) -> Result<Response<Option<T>>>
    where
        T: DeserializeOwned,
    {
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.execute(request, cancel).await?;
        let status = response.status();
        let headers = response.headers().clone();
        debug!(%method, %url, status = status.as_u16(), "Received response");

        let body = read_body(response, cancel).await?;

        if !status.is_success() {
            let detail = ErrorEnvelope::parse(&body);
            warn!(
                %method,
                %url,
                status = status.as_u16(),
                code = detail.code,
                message = %detail.message,
                "MailerLite API error"
            );
            return Err(ApiError {
                method,
                url,
                status,
                headers,
                detail,
            }
            .into());
        }

        let data = match mode {
            DecodeMode::Json => decode_json(status, &body)?,
            DecodeMode::Raw(sink) => {
                Write::write_all(sink, &body)?;
                None
            }
            DecodeMode::Discard => None,
        };

        Ok(Response {
            status,
            headers,
            data,
        })
    }

    /// Perform the call, preferring the cancellation reason over transport
    /// failures.
    async fn execute(
        &self,
        request: Request,
        cancel: Option<&CancellationToken>,
    ) -> Result<reqwest::Response> {
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let Some(token) = cancel else {
            return Ok(self.http_client.execute(request).await?);
        };

        if token.is_cancelled() {
            debug!("Request cancelled before sending");
            return Err(Error::Cancelled);
        }

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Request cancelled in flight");
                return Err(Error::Cancelled);
            }
            result = self.http_client.execute(request) => result,
        };

        result.map_err(|e| {
            if token.is_cancelled() {
                Error::Cancelled
            } else {
                Error::Http(e)
            }
        })
    }
}

/// Read the whole body, honouring the cancellation token.
async fn read_body(
    response: reqwest::Response,
    cancel: Option<&CancellationToken>,
) -> Result<Vec<u8>> {
    let result = match cancel {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => return Err(Error::Cancelled),
            result = response.bytes() => result,
        },
        None => response.bytes().await,
    };

    match result {
        Ok(bytes) => Ok(bytes.to_vec()),
        Err(_) if cancel.is_some_and(CancellationToken::is_cancelled) => Err(Error::Cancelled),
        Err(e) => Err(Error::Http(e)),
    }
}

/// Decode a 2xx body, treating an empty body as no value.
fn decode_json<T>(status: reqwest::StatusCode, body: &[u8]) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map(Some)
        .map_err(|source| Error::Decode { status, source })
}

/// Builder for creating a customized [`MailerLiteClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use mailerlite::MailerLiteClient;
///
/// # fn example() -> mailerlite::Result<()> {
/// let client = MailerLiteClient::builder("my-api-key")
///     .base_url("https://api.mailerlite.com/api/v2/")
///     .user_agent("newsletter-sync/1.0")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    user_agent: String,
    http_client: Option<Client>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
            timeout: None,
        }
    }

    /// Set the base URL for API requests.
    ///
    /// Must end with a trailing slash. Defaults to
    /// `https://api.mailerlite.com/api/v2/`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the `User-Agent` header. An empty string keeps the current value.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        let agent = agent.into();
        if !agent.is_empty() {
            self.user_agent = agent;
        }
        self
    }

    /// Use a preconfigured reqwest client as the transport.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a request timeout on the default transport.
    ///
    /// Ignored when a transport is supplied with
    /// [`http_client()`](Self::http_client).
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Error::Config`] if the base URL cannot be parsed or does
    /// not end in `/`, if the API key or user agent cannot be sent as a
    /// header, or if the default transport cannot be initialised.
    pub fn build(self) -> Result<MailerLiteClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;

        if !base_url.path().ends_with('/') {
            return Err(Error::Config(format!(
                "base URL must have a trailing slash, but {:?} does not",
                self.base_url
            )));
        }

        HeaderValue::from_str(&self.api_key)
            .map_err(|_| Error::Config("API key contains invalid header characters".into()))?;
        HeaderValue::from_str(&self.user_agent).map_err(|_| {
            Error::Config(format!(
                "user agent {:?} contains invalid header characters",
                self.user_agent
            ))
        })?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| Error::Config(format!("failed to initialise transport: {e}")))?
            }
        };

        Ok(MailerLiteClient {
            http_client,
            base_url,
            user_agent: Some(self.user_agent),
            api_key: self.api_key,
        })
    }
}
