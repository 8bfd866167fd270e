use std::fmt::Display;

use chrono::{DateTime, TimeZone};

pub fn capture_label<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
	Tz::Offset: Display,
{
	format!("Captured at {}", at.format("%H:%M"))
}

#[cfg(test)]
mod tests {
	use chrono::Utc;

	use super::*;

	#[test]
	fn label_renders_hours_and_minutes() {
		let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap();
		assert_eq!(capture_label(at), "Captured at 09:05");

		let at = Utc.timestamp_millis_opt(at.timestamp_millis()).unwrap();
		assert_eq!(capture_label(at), "Captured at 09:05");
	}
}
