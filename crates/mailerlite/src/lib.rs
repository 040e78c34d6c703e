//! An async Rust client for the MailerLite v2 REST API.
//!
//! Every operation maps directly onto one HTTP call: the client resolves a
//! path against the API base URL, JSON-encodes the body, attaches the API
//! key and hands back the decoded payload along with the response status
//! and headers.
//!
//! # Quick Start
//!
//! ```no_run
//! use mailerlite::MailerLiteClient;
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLiteClient::new("your-api-key")?;
//!
//! let fields = client.fields().list().await?;
//! for field in fields.data {
//!     println!("{} ({})", field.title, field.key);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder for custom configuration. The base URL must end with a
//! trailing slash:
//!
//! ```no_run
//! use std::time::Duration;
//! use mailerlite::MailerLiteClient;
//!
//! # fn example() -> mailerlite::Result<()> {
//! let client = MailerLiteClient::builder("your-api-key")
//!     .base_url("https://api.mailerlite.com/api/v2/")
//!     .user_agent("newsletter-sync/1.0")
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Cancellation
//!
//! Every handle accepts a [`CancellationToken`](tokio_util::sync::CancellationToken).
//! Once it fires, calls made through the handle return [`Error::Cancelled`]:
//!
//! ```no_run
//! use mailerlite::{MailerLiteClient, SubscriberListOptions};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLiteClient::new("your-api-key")?;
//! let token = CancellationToken::new();
//!
//! let subscribers = client
//!     .subscribers()
//!     .cancel_on(&token)
//!     .list(&SubscriberListOptions::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Resources
//!
//! - [`MailerLiteClient::fields()`] - List, create, update and delete custom fields
//! - [`MailerLiteClient::groups()`] - Add subscribers to groups
//! - [`MailerLiteClient::stats()`] - Account-wide statistics
//! - [`MailerLiteClient::subscribers()`] - List and look up subscribers
//! - [`MailerLiteClient::campaigns()`], [`MailerLiteClient::segments()`],
//!   [`MailerLiteClient::webhooks()`], [`MailerLiteClient::settings()`] - reserved,
//!   no operations yet
//!
//! # Lower-level Access
//!
//! [`MailerLiteClient::new_request()`] and [`MailerLiteClient::send()`] expose
//! the pipeline every handle is built on, for endpoints this crate does not
//! wrap yet.

pub mod actions;
pub mod client;
pub mod error;
pub mod query;
mod request;
pub mod response;
pub mod types;

pub use client::{ClientBuilder, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, MailerLiteClient};
pub use error::{ApiError, Error, ErrorDetail, Result};
pub use query::{ListOptions, StatsOptions, SubscriberListOptions};
pub use response::{DecodeMode, Response};
pub use types::{
    Field, FieldType, FieldUpdate, NewField, NewGroupSubscriber, Stats, Subscriber,
    SubscriberField, SubscriptionType, Timestamp, WeakInt,
};

pub use reqwest::{Method, StatusCode};
