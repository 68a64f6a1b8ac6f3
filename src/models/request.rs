//! Wire shapes for the contact endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body the form sends on submit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
}

/// Custom deserializer that accepts any JSON value and keeps its text.
///
/// Strings are kept verbatim, `null` becomes empty, and every other value
/// (numbers for the phone groups, booleans, nested objects) keeps its JSON text.
fn deserialize_loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(loose_text(value))
}

fn loose_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Contact submission as the endpoint declares it.
///
/// All fields are optional on the wire. The form only transmits `name` and
/// `email`; absent fields stay empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(deserialize_with = "deserialize_loose_text")]
    pub email: String,

    #[serde(deserialize_with = "deserialize_loose_text")]
    pub confirm_email: String,

    #[serde(deserialize_with = "deserialize_loose_text")]
    pub name: String,

    #[serde(deserialize_with = "deserialize_loose_text")]
    pub tel1: String,

    #[serde(deserialize_with = "deserialize_loose_text")]
    pub tel2: String,

    #[serde(deserialize_with = "deserialize_loose_text")]
    pub tel3: String,

    #[serde(deserialize_with = "deserialize_loose_text")]
    pub category: String,

    #[serde(deserialize_with = "deserialize_loose_text")]
    pub message: String,
}

impl ContactRequest {
    /// Build a request from an already-parsed JSON document.
    ///
    /// A document that is not an object carries no recognized fields and
    /// yields an empty request.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}
