use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Callers only ever see the rendered message, so the taxonomy stays coarse.
#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
	#[error("{0}")]
	Rejected(String),
	#[error("HTTP {0}")]
	Status(u16),
	#[error("Could not reach the Kioku server. Check the API URL in settings.")]
	Network,
	#[error("Extension error: {0}")]
	Extension(String),
}

impl RelayError {
	pub fn from_status(status: u16, detail: Option<String>) -> Self {
		match detail {
			Some(detail) if !detail.is_empty() => Self::Rejected(detail),
			_ => Self::Status(status),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detail_beats_status_code() {
		let err = RelayError::from_status(422, Some("text too short".into()));
		assert_eq!(err.to_string(), "text too short");
	}

	#[test]
	fn bare_status_renders_http_code() {
		assert_eq!(RelayError::from_status(502, None).to_string(), "HTTP 502");
		assert_eq!(RelayError::from_status(500, Some(String::new())).to_string(), "HTTP 500");
	}
}
