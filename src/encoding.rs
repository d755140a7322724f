//! Percent-encoding of cookie names and values.
//!
//! The serialized jar delimits entries with `;` and splits each entry on
//! `=`, so both characters (and everything else outside the unreserved set)
//! must be escaped before a name or value enters the jar. Encoding is
//! reversible: `decode(encode(x)) == x` for every `&str` input.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is escaped,
/// matching the host encoding primitive cookies are exchanged with.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a cookie name or value.
pub fn encode(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, COMPONENT).into()
}

/// Percent-decode a jar segment back into the original string.
///
/// Returns `None` when the decoded bytes are not valid UTF-8; jar content
/// from other writers is not guaranteed to round-trip.
pub fn decode(input: &str) -> Option<Cow<'_, str>> {
    percent_decode_str(input).decode_utf8().ok()
}
