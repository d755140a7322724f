//! Cookie attribute configuration for `set` and `delete` writes.

use time::{Duration, OffsetDateTime};

/// When a cookie should expire.
///
/// Either an absolute instant or a duration from the moment the write is
/// made; both resolve to a UTC HTTP-date in the serialized attribute string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expires {
    /// Expire at this instant.
    At(OffsetDateTime),
    /// Expire this long after the write.
    After(Duration),
}

impl Expires {
    /// Expire `secs` seconds after the write.
    pub fn after_secs(secs: i64) -> Self {
        Self::After(Duration::seconds(secs))
    }

    pub(crate) fn resolve(&self, now: OffsetDateTime) -> OffsetDateTime {
        match self {
            Self::At(instant) => *instant,
            Self::After(duration) => now + *duration,
        }
    }
}

/// Attributes for a `set` write. Every field is optional; an absent field
/// omits the attribute entirely so the host default governs.
#[derive(Debug, Clone, Default)]
pub struct CookieOptions {
    /// Expiration; `None` makes a session cookie.
    pub expires: Option<Expires>,
    /// Path scope restriction, passed through unencoded.
    pub path: Option<String>,
    /// Domain scope restriction, passed through unencoded.
    pub domain: Option<String>,
    /// Only transmit over secure channels.
    pub secure: bool,
}

impl CookieOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expires(mut self, expires: Expires) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

/// Scope attributes for a `delete` write.
///
/// Deletion targets the cookie keyed by `(name, path, domain)`, so these
/// must match the values the cookie was set with; an omitted field only
/// matches a cookie that was set without it.
#[derive(Debug, Clone, Default)]
pub struct DeleteOptions {
    pub path: Option<String>,
    pub domain: Option<String>,
}

impl DeleteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}
