//! The ambient jar capability and an in-memory host emulation.
//!
//! The jar is the single string the host exposes for all cookies visible to
//! the current document. Reading returns the whole serialized jar; writing
//! hands the host one serialized cookie-attribute string which it merges in
//! as an upsert. Operations never own or cache the jar; every call goes back
//! to the backend.

use std::sync::{Mutex, PoisonError};

use time::OffsetDateTime;

use crate::httpdate;

/// Capability interface over the host's cookie jar.
///
/// Both methods are infallible: a host that refuses a write does so
/// silently, and a missing or malformed jar reads as empty.
pub trait CookieJar {
    /// The full serialized jar, `name1=value1; name2=value2; ...`.
    fn read_all(&self) -> String;

    /// Upsert one serialized cookie-attribute string into the jar.
    fn write(&self, serialized: &str);
}

/// One cookie as the emulated host retains it. Name and value are stored
/// still percent-encoded, exactly as they appeared in the write.
#[derive(Debug, Clone)]
struct StoredCookie {
    name: String,
    value: String,
    path: Option<String>,
    domain: Option<String>,
    expires: Option<OffsetDateTime>,
    sequence: u64,
}

#[derive(Debug, Default)]
struct JarInner {
    cookies: Vec<StoredCookie>,
    next_sequence: u64,
}

/// In-memory jar reproducing the host side of the contract.
///
/// Writes are upserts keyed by `(name, path, domain)`; a write whose
/// `expires` is already in the past removes the matching cookie instead of
/// storing it. Reads drop expired cookies and serialize the survivors
/// longest-path first, then in insertion order, the way browsers do.
#[derive(Debug, Default)]
pub struct MemoryJar {
    inner: Mutex<JarInner>,
}

impl MemoryJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) cookies.
    pub fn len(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner
            .cookies
            .iter()
            .filter(|c| !is_expired(c, now))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cookie.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.cookies.clear();
    }
}

impl CookieJar for MemoryJar {
    fn read_all(&self) -> String {
        let now = OffsetDateTime::now_utc();
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.cookies.retain(|c| !is_expired(c, now));

        let mut visible: Vec<&StoredCookie> = inner.cookies.iter().collect();
        // Longest path first, insertion order breaks ties.
        visible.sort_by(|a, b| {
            let a_path = a.path.as_deref().unwrap_or("/").len();
            let b_path = b.path.as_deref().unwrap_or("/").len();
            b_path.cmp(&a_path).then(a.sequence.cmp(&b.sequence))
        });

        visible
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, serialized: &str) {
        let mut segments = serialized.split(';');
        let Some((name, value)) = segments.next().and_then(|first| first.split_once('=')) else {
            // A write with no name=value part has nothing to upsert.
            return;
        };

        let mut path = None;
        let mut domain = None;
        let mut expires = None;
        for segment in segments {
            let segment = segment.trim();
            let (key, attr_value) = match segment.split_once('=') {
                Some((key, attr_value)) => (key, Some(attr_value)),
                None => (segment, None),
            };
            match key.to_ascii_lowercase().as_str() {
                "expires" => expires = attr_value.and_then(httpdate::parse),
                "path" => path = attr_value.map(str::to_owned),
                "domain" => domain = attr_value.map(str::to_owned),
                // The secure flag restricts transmission, which has no
                // observable effect on an in-memory jar.
                "secure" => {}
                _ => {}
            }
        }

        let now = OffsetDateTime::now_utc();
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.cookies.retain(|c| {
            c.name != name || c.path.as_deref() != path.as_deref() || c.domain.as_deref() != domain.as_deref()
        });

        if expires.is_some_and(|instant| instant <= now) {
            tracing::debug!(name = %name, "expired write, cookie removed");
            return;
        }

        let sequence = inner.next_sequence;
        inner.next_sequence += 1;
        inner.cookies.push(StoredCookie {
            name: name.to_owned(),
            value: value.to_owned(),
            path,
            domain,
            expires,
            sequence,
        });
        tracing::debug!(name = %name, "cookie upserted");
    }
}

fn is_expired(cookie: &StoredCookie, now: OffsetDateTime) -> bool {
    cookie.expires.is_some_and(|instant| instant <= now)
}
