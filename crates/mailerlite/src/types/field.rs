//! Custom field types.

use serde::{Deserialize, Serialize};

use super::scalar::{Timestamp, WeakInt};

/// A custom field in a subscriber profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field ID (sometimes sent as a string).
    pub id: WeakInt,
    /// Human-readable title.
    pub title: String,
    /// Key used in subscriber payloads.
    pub key: String,
    /// Data type stored in the field.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// When the field was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<Timestamp>,
    /// When the field was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<Timestamp>,
}

/// The kind of data a field stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    /// Free text.
    #[default]
    Text,
    /// Numeric value.
    Number,
    /// Calendar date.
    Date,
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TEXT" => Ok(FieldType::Text),
            "NUMBER" => Ok(FieldType::Number),
            "DATE" => Ok(FieldType::Date),
            _ => Err(format!("Invalid field type: {s}. Use text, number or date")),
        }
    }
}

/// A field to create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewField {
    /// Title of the new field.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Data type of the new field. The API defaults to text.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
}

impl NewField {
    /// A field with the given title and type.
    pub fn new(title: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            title: title.into(),
            field_type: Some(field_type),
        }
    }
}

/// Changes to apply to an existing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldUpdate {
    /// New title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
}

impl FieldUpdate {
    /// Rename a field.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
