use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

/// Accepts an identifier encoded as either a JSON string or a JSON number
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    match value {
        Value::String(string) if !string.is_empty() => Ok(string),
        Value::String(_) => Err(Error::custom("field is empty")),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(Error::custom(format!(
            "field is not a string or number: {other}"
        ))),
    }
}
