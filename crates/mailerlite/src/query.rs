//! URL query options for list-style endpoints.
//!
//! Option structs only emit the fields that were set, so a default value
//! produces a bare path with no query string.
//!
//! # Example
//!
//! ```
//! use mailerlite::{SubscriberListOptions, SubscriptionType};
//!
//! let opts = SubscriberListOptions::new()
//!     .subscription_type(SubscriptionType::Active)
//!     .limit(50);
//!
//! let path = mailerlite::query::with_query("subscribers", &opts).unwrap();
//! assert_eq!(path, "subscribers?type=active&limit=50");
//! ```

use serde::Serialize;

use crate::error::Result;
use crate::types::SubscriptionType;

/// Append the fields of `opts` to `path` as URL query parameters.
///
/// Returns `path` unchanged when `opts` encodes to nothing.
pub fn with_query<O>(path: &str, opts: &O) -> Result<String>
where
    O: Serialize + ?Sized,
{
    let query = serde_urlencoded::to_string(opts)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}

/// Pagination shared by list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Optional filters for [`SubscriberActions::list()`](crate::actions::SubscriberActions::list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[must_use]
pub struct SubscriberListOptions {
    /// Only return subscribers in this state.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub subscription_type: Option<SubscriptionType>,
    /// Pagination.
    #[serde(flatten)]
    pub page: ListOptions,
}

impl SubscriberListOptions {
    /// Create options that apply no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by subscription state.
    pub fn subscription_type(mut self, kind: SubscriptionType) -> Self {
        self.subscription_type = Some(kind);
        self
    }

    /// Limit the number of subscribers returned.
    pub fn limit(mut self, limit: u32) -> Self {
        self.page.limit = Some(limit);
        self
    }

    /// Skip the first `offset` subscribers.
    pub fn offset(mut self, offset: u32) -> Self {
        self.page.offset = Some(offset);
        self
    }
}

/// Optional parameters for [`StatsActions::get()`](crate::actions::StatsActions::get).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[must_use]
pub struct StatsOptions {
    /// Unix timestamp to read historical values at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl StatsOptions {
    /// Create options for the current stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read stats as they were at the given Unix timestamp.
    pub fn at(timestamp: i64) -> Self {
        Self {
            timestamp: Some(timestamp),
        }
    }
}
