//! The `get`/`set`/`delete` operation surface over an injected jar.

use time::OffsetDateTime;

use crate::encoding;
use crate::httpdate;
use crate::jar::CookieJar;
use crate::options::{CookieOptions, DeleteOptions};

/// Cookie operations against an ambient jar.
///
/// The store keeps no state of its own: `get` re-reads the jar on every
/// call, `set` and `delete` each issue exactly one write, and the host's
/// merge semantics decide everything else.
#[derive(Debug)]
pub struct CookieStore<J> {
    jar: J,
}

impl<J: CookieJar> CookieStore<J> {
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    /// The jar backend this store writes through.
    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// Look up a cookie's value by name.
    ///
    /// The jar is split on `;`, each segment trimmed and split on its first
    /// `=`, and the first segment whose name part equals the encoded `name`
    /// wins. Malformed segments (no `=`, undecodable value) never match;
    /// they degrade to `None` rather than failing the read.
    pub fn get(&self, name: &str) -> Option<String> {
        let wanted = encoding::encode(name);
        let jar = self.jar.read_all();

        for segment in jar.split(';') {
            let segment = segment.trim();
            let Some((segment_name, segment_value)) = segment.split_once('=') else {
                continue;
            };
            if segment_name == wanted.as_ref() {
                tracing::debug!(name = %name, "cookie hit");
                return encoding::decode(segment_value).map(|value| value.into_owned());
            }
        }

        tracing::debug!(name = %name, "cookie miss");
        None
    }

    /// Write a cookie, upserted into the jar by the host.
    ///
    /// Builds `encode(name)=encode(value)` followed by `expires`, `path`,
    /// `domain`, and `secure` attributes in that order, each omitted when
    /// its option is absent. Without `expires` the host treats the cookie
    /// as session-scoped. Host refusal of the write is not observable.
    pub fn set(&self, name: &str, value: &str, options: &CookieOptions) {
        let mut serialized = format!("{}={}", encoding::encode(name), encoding::encode(value));

        if let Some(expires) = &options.expires {
            let instant = expires.resolve(OffsetDateTime::now_utc());
            serialized.push_str(";expires=");
            serialized.push_str(&httpdate::format(instant));
        }
        if let Some(path) = &options.path {
            serialized.push_str(";path=");
            serialized.push_str(path);
        }
        if let Some(domain) = &options.domain {
            serialized.push_str(";domain=");
            serialized.push_str(domain);
        }
        if options.secure {
            serialized.push_str(";secure");
        }

        tracing::debug!(name = %name, "writing cookie");
        self.jar.write(&serialized);
    }

    /// Delete a cookie by writing it back with an empty value and an
    /// already-expired timestamp.
    ///
    /// `path` and `domain` must match the values the cookie was set with;
    /// a mismatched scope targets a different (usually nonexistent) cookie
    /// and the delete silently does nothing.
    pub fn delete(&self, name: &str, options: &DeleteOptions) {
        let mut serialized = format!(
            "{}=;expires={}",
            encoding::encode(name),
            httpdate::EPOCH_EXPIRED
        );

        if let Some(path) = &options.path {
            serialized.push_str(";path=");
            serialized.push_str(path);
        }
        if let Some(domain) = &options.domain {
            serialized.push_str(";domain=");
            serialized.push_str(domain);
        }

        tracing::debug!(name = %name, "deleting cookie");
        self.jar.write(&serialized);
    }
}
