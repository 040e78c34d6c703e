//! Domain types for the MailerLite API.
//!
//! These are flat data types mirroring the JSON the API sends and accepts.

mod field;
mod scalar;
mod stats;
mod subscriber;

pub use field::{Field, FieldType, FieldUpdate, NewField};
pub use scalar::{TIMESTAMP_FORMAT, Timestamp, WeakInt};
pub use stats::Stats;
pub use subscriber::{NewGroupSubscriber, Subscriber, SubscriberField, SubscriptionType};
