//! Expiration date formatting for the `expires` cookie attribute.
//!
//! Dates are rendered as RFC 7231 IMF-fixdate strings in UTC
//! (`Sun, 06 Nov 1994 08:49:37 GMT`). Deletion writes use a fixed
//! already-expired timestamp instead of a computed date.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const IMF_FIXDATE: &[FormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// The timestamp carried by deletion writes. Hosts treat any past
/// `expires` as an instruction to drop the cookie.
pub const EPOCH_EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 UTC";

/// Format an instant as an RFC 7231 HTTP-date in UTC.
pub fn format(instant: OffsetDateTime) -> String {
    instant
        .to_offset(UtcOffset::UTC)
        .format(IMF_FIXDATE)
        .expect("IMF-fixdate formatting should not fail")
}

/// Parse an `expires` attribute value written by [`format`] or by a
/// deletion write (`UTC` zone spelling). Returns `None` for anything else.
pub fn parse(input: &str) -> Option<OffsetDateTime> {
    let input = input.trim();
    let normalized = input.strip_suffix(" UTC").map(|rest| format!("{rest} GMT"));
    let candidate = normalized.as_deref().unwrap_or(input);
    PrimitiveDateTime::parse(candidate, IMF_FIXDATE)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
