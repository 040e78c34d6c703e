//! Subscriber-related types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::scalar::Timestamp;

/// An email subscriber.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Subscriber ID.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    pub email: String,
    /// Number of emails sent to this subscriber.
    #[serde(default)]
    pub sent: i64,
    /// Number of emails opened.
    #[serde(default)]
    pub opened: i64,
    /// Number of emails clicked.
    #[serde(default)]
    pub clicked: i64,
    /// Current subscription state.
    #[serde(rename = "type")]
    pub subscription_type: SubscriptionType,
    /// Country the subscriber signed up from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<String>,
    /// IP address used at signup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_ip: Option<String>,
    /// Signup time as reported by the signup form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_timestamp: Option<String>,
    /// IP address used to confirm the subscription.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_ip: Option<String>,
    /// Confirmation time as reported by the confirmation flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_timestamp: Option<String>,
    /// Custom field values.
    #[serde(default)]
    pub fields: Vec<SubscriberField>,
    /// When the subscriber subscribed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_subscribe: Option<Timestamp>,
    /// When the subscriber unsubscribed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_unsubscribe: Option<Timestamp>,
    /// When the subscriber was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<Timestamp>,
    /// When the subscriber was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<Timestamp>,
}

impl Subscriber {
    /// Look up the value of a custom field by key.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }
}

/// The state of a subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionType {
    /// Opted out.
    Unsubscribed,
    /// Receiving emails.
    #[default]
    Active,
    /// Double opt-in not yet confirmed.
    Unconfirmed,
    /// Emails bounce.
    Bounced,
    /// Marked as junk.
    Junk,
}

impl SubscriptionType {
    /// The wire name of this state.
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriptionType::Unsubscribed => "unsubscribed",
            SubscriptionType::Active => "active",
            SubscriptionType::Unconfirmed => "unconfirmed",
            SubscriptionType::Bounced => "bounced",
            SubscriptionType::Junk => "junk",
        }
    }
}

impl std::str::FromStr for SubscriptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsubscribed" => Ok(SubscriptionType::Unsubscribed),
            "active" => Ok(SubscriptionType::Active),
            "unconfirmed" => Ok(SubscriptionType::Unconfirmed),
            "bounced" => Ok(SubscriptionType::Bounced),
            "junk" => Ok(SubscriptionType::Junk),
            _ => Err(format!(
                "Invalid subscription type: {s}. Use unsubscribed, active, unconfirmed, bounced or junk"
            )),
        }
    }
}

/// A custom field value attached to a subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberField {
    /// Field key.
    pub key: String,
    /// Field value, as text.
    #[serde(default)]
    pub value: String,
    /// Field type name (`TEXT`, `NUMBER`, `DATE`).
    #[serde(rename = "type", default)]
    pub field_type: String,
}

/// A subscriber to add to a group.
///
/// Only the fields that are set are sent. Use [`NewGroupSubscriber::new()`]
/// and the chained setters to build one.
///
/// # Example
///
/// ```
/// use mailerlite::{NewGroupSubscriber, SubscriptionType};
///
/// let subscriber = NewGroupSubscriber::new("demo@example.com")
///     .name("Demo")
///     .field("company", "Acme")
///     .resubscribe(true)
///     .subscription_type(SubscriptionType::Unconfirmed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[must_use]
pub struct NewGroupSubscriber {
    /// Email address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    /// Display name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Custom field values keyed by field key.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    /// Reactivate the subscriber if they previously unsubscribed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resubscribe: Option<bool>,
    /// Trigger autoresponders for this group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoresponders: Option<bool>,
    /// Initial subscription state.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub subscription_type: Option<SubscriptionType>,
}

impl NewGroupSubscriber {
    /// Start a new subscriber with the given email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set a custom field value.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Reactivate a previously unsubscribed subscriber.
    pub fn resubscribe(mut self, resubscribe: bool) -> Self {
        self.resubscribe = Some(resubscribe);
        self
    }

    /// Trigger the group's autoresponders.
    pub fn autoresponders(mut self, autoresponders: bool) -> Self {
        self.autoresponders = Some(autoresponders);
        self
    }

    /// Set the initial subscription state.
    pub fn subscription_type(mut self, kind: SubscriptionType) -> Self {
        self.subscription_type = Some(kind);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_from_api_payload() {
        let subscriber: Subscriber = serde_json::from_value(serde_json::json!({
            "id": 1343965485,
            "name": "John",
            "email": "demo@mailerlite.com",
            "sent": 0,
            "opened": 0,
            "clicked": 0,
            "type": "active",
            "country_id": null,
            "signup_ip": "127.0.0.1",
            "signup_timestamp": "2018-01-01 01:01:01",
            "confirmation_ip": null,
            "confirmation_timestamp": null,
            "fields": [
                {"key": "email", "value": "demo@mailerlite.com", "type": "TEXT"},
                {"key": "city", "value": "Vilnius", "type": "TEXT"}
            ],
            "date_subscribe": "2016-04-04 12:00:00",
            "date_unsubscribe": null,
            "date_created": "2016-04-04 12:00:00",
            "date_updated": null
        }))
        .unwrap();

        assert_eq!(subscriber.id, 1343965485);
        assert_eq!(subscriber.subscription_type, SubscriptionType::Active);
        assert_eq!(subscriber.signup_ip.as_deref(), Some("127.0.0.1"));
        assert!(subscriber.confirmation_ip.is_none());
        assert_eq!(subscriber.field("city"), Some("Vilnius"));
        assert_eq!(subscriber.field("missing"), None);
        assert_eq!(
            subscriber.date_subscribe.unwrap().to_string(),
            "2016-04-04 12:00:00"
        );
        assert!(subscriber.date_unsubscribe.is_none());
    }

    #[test]
    fn test_subscriber_json_round_trip() {
        let subscriber = Subscriber {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            sent: 3,
            opened: 2,
            clicked: 1,
            subscription_type: SubscriptionType::Bounced,
            fields: vec![SubscriberField {
                key: "company".to_string(),
                value: "Engines".to_string(),
                field_type: "TEXT".to_string(),
            }],
            date_created: Timestamp::parse("2021-01-01 00:00:00"),
            ..Default::default()
        };

        let json = serde_json::to_value(&subscriber).unwrap();
        assert!(json.get("date_updated").is_none());
        assert!(json.get("signup_ip").is_none());

        let back: Subscriber = serde_json::from_value(json).unwrap();
        assert_eq!(back, subscriber);
    }

    #[test]
    fn test_subscription_type_parse() {
        assert_eq!(
            "Junk".parse::<SubscriptionType>().unwrap(),
            SubscriptionType::Junk
        );
        assert!("spam".parse::<SubscriptionType>().is_err());
        assert_eq!(SubscriptionType::Unconfirmed.as_str(), "unconfirmed");
    }

    #[test]
    fn test_new_group_subscriber_omits_unset_fields() {
        let json = serde_json::to_value(NewGroupSubscriber::new("a@b.c")).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.c"}));

        let json = serde_json::to_value(
            NewGroupSubscriber::new("a@b.c")
                .name("A")
                .field("city", "Riga")
                .resubscribe(false)
                .autoresponders(true)
                .subscription_type(SubscriptionType::Unconfirmed),
        )
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "a@b.c",
                "name": "A",
                "fields": {"city": "Riga"},
                "resubscribe": false,
                "autoresponders": true,
                "type": "unconfirmed"
            })
        );
    }
}
