//! Lenient serde helpers for supplier payloads

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Treat an explicit `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a coordinate as a number, a numeric string, an empty string or `null`
pub(crate) fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::Null => Ok(None),
		Value::Number(number) => number
			.as_f64()
			.map(Some)
			.ok_or_else(|| de::Error::custom("coordinate out of range")),
		Value::String(raw) if raw.trim().is_empty() => Ok(None),
		Value::String(raw) => raw
			.trim()
			.parse::<f64>()
			.map(Some)
			.map_err(|_| de::Error::custom(format!("invalid number literal: {}", raw))),
		other => Err(de::Error::custom(format!(
			"invalid JSON for coordinate: {}",
			other
		))),
	}
}
