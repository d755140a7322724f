//! # docjar
//!
//! A browser-inspired ambient cookie jar abstraction for Rust.
//!
//! `docjar` models the way a document-scoped script talks to its cookie
//! store: one serialized jar string (`name1=value1; name2=value2`) owned by
//! the host, read whole and written one upserted cookie at a time.
//!
//! ## Features
//!
//! - **Three operations**: `get`, `set`, `delete`, nothing else
//! - **Reversible encoding**: names and values survive the `;`/`=` format
//!   via percent-encoding
//! - **Injected jar**: the ambient store sits behind the
//!   [`CookieJar`](jar::CookieJar) trait, so the operations are testable
//!   against an in-memory jar
//! - **Host emulation**: [`MemoryJar`](jar::MemoryJar) reproduces host-side
//!   upsert, expiry, and serialization order for non-browser environments
//!
//! ## Quick Start
//!
//! ```rust
//! use docjar::jar::MemoryJar;
//! use docjar::options::{CookieOptions, DeleteOptions};
//! use docjar::store::CookieStore;
//!
//! let store = CookieStore::new(MemoryJar::new());
//!
//! store.set("session", "abc123", &CookieOptions::new().path("/"));
//! assert_eq!(store.get("session").as_deref(), Some("abc123"));
//!
//! store.delete("session", &DeleteOptions::new().path("/"));
//! assert_eq!(store.get("session"), None);
//! ```
//!
//! ## Modules
//!
//! - [`encoding`] - Percent-encoding of cookie names and values
//! - [`httpdate`] - RFC 7231 expiration date formatting
//! - [`jar`] - The ambient jar capability trait and in-memory backend
//! - [`options`] - Cookie attribute configuration
//! - [`store`] - The `get`/`set`/`delete` operation surface

pub mod encoding;
pub mod httpdate;
pub mod jar;
pub mod options;
pub mod store;
