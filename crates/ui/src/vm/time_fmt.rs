use chrono::{DateTime, Utc};

#[must_use]
pub fn format_submitted_at(value: DateTime<Utc>) -> String {
    value.format("%d %b %Y, %H:%M UTC").to_string()
}
