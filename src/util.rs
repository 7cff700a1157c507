use time::{OffsetDateTime, format_description::well_known::Rfc3339};

#[inline]
pub(crate) fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// RFC 3339 timestamp for log lines. Falls back to the unix timestamp if formatting fails.
pub fn timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc3339)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

#[inline]
pub fn timestamp_now() -> String {
    timestamp(now())
}
