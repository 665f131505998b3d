use chrono::{DateTime, NaiveDateTime, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Renders server timestamps in a single UTC format. Values that are neither
/// RFC 3339 nor `YYYY-MM-DD HH:MM:SS` are returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.with_timezone(&Utc).format(DISPLAY_FORMAT).to_string();
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc().format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|_| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::format_timestamp;

    #[test]
    fn rfc3339_is_normalized_to_utc() {
        assert_eq!(
            format_timestamp("2024-05-01T12:30:00+02:00"),
            "2024-05-01 10:30:00 UTC"
        );
        assert_eq!(
            format_timestamp("2024-05-01T10:30:00.123456Z"),
            "2024-05-01 10:30:00 UTC"
        );
    }

    #[test]
    fn sql_style_timestamps_are_accepted() {
        assert_eq!(
            format_timestamp("2024-05-01 10:30:00"),
            "2024-05-01 10:30:00 UTC"
        );
    }

    #[test]
    fn unknown_formats_are_shown_verbatim() {
        assert_eq!(format_timestamp(" yesterday "), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }
}
