use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_DECK: &str = "Kioku";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CardMode {
	#[default]
	All,
	Sentence,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	pub fn toggle_icon(self) -> &'static str {
		match self {
			Self::Light => "☾",
			Self::Dark => "☼",
		}
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
	#[error("API URL must start with http:// or https://")]
	Scheme,
	#[error("API URL is not a valid URL")]
	Invalid,
}

/// Strips trailing slashes so endpoint paths can be appended verbatim.
pub fn validate_api_url(input: &str) -> Result<String, SettingsError> {
	let trimmed = input.trim();
	let parsed = Url::parse(trimmed).map_err(|_| SettingsError::Invalid)?;
	if !matches!(parsed.scheme(), "http" | "https") {
		return Err(SettingsError::Scheme);
	}
	Ok(trimmed.trim_end_matches('/').to_owned())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_endpoint_passes_unchanged() {
		assert_eq!(validate_api_url(DEFAULT_API_URL).unwrap(), DEFAULT_API_URL);
	}

	#[test]
	fn trailing_slashes_and_whitespace_are_stripped() {
		assert_eq!(validate_api_url("  https://kioku.example/  ").unwrap(), "https://kioku.example");
		assert_eq!(validate_api_url("http://localhost:8000///").unwrap(), "http://localhost:8000");
	}

	#[test]
	fn missing_scheme_is_rejected() {
		// `localhost:8000` parses, but its "scheme" is the host name.
		assert_eq!(validate_api_url("localhost:8000"), Err(SettingsError::Scheme));
		assert_eq!(validate_api_url("ftp://files.example"), Err(SettingsError::Scheme));
	}

	#[test]
	fn garbage_is_rejected() {
		assert_eq!(validate_api_url(""), Err(SettingsError::Invalid));
		assert_eq!(validate_api_url("not a url"), Err(SettingsError::Invalid));
	}

	#[test]
	fn modes_store_as_lowercase_names() {
		assert_eq!(serde_json::to_string(&CardMode::Sentence).unwrap(), r#""sentence""#);
		assert_eq!(serde_json::from_str::<CardMode>(r#""all""#).unwrap(), CardMode::All);
		assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
		assert_eq!(Theme::Light.to_string(), "light");
	}

	#[test]
	fn theme_toggle_cycles_and_hints() {
		assert_eq!(Theme::Light.toggled(), Theme::Dark);
		assert_eq!(Theme::Dark.toggled(), Theme::Light);
		assert_eq!(Theme::Light.toggle_icon(), "☾");
		assert_eq!(Theme::Dark.toggle_icon(), "☼");
	}
}
