//! Account statistics types.

use serde::{Deserialize, Serialize};

/// Account-wide aggregate statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Active subscribers.
    #[serde(default)]
    pub subscribed: i64,
    /// Unsubscribed subscribers.
    #[serde(default)]
    pub unsubscribed: i64,
    /// Campaigns sent.
    #[serde(default)]
    pub campaigns: i64,
    /// Emails sent.
    #[serde(default)]
    pub sent_emails: i64,
    /// Open rate, as a fraction.
    #[serde(default)]
    pub open_rate: f64,
    /// Click rate, as a fraction.
    #[serde(default)]
    pub click_rate: f64,
    /// Bounce rate, as a fraction.
    #[serde(default)]
    pub bounce_rate: f64,
}
