use std::sync::Mutex;

use docjar::httpdate;
use docjar::jar::CookieJar;
use docjar::options::{CookieOptions, DeleteOptions, Expires};
use docjar::store::CookieStore;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Jar double that serves fixed contents and records every write verbatim.
#[derive(Default)]
struct RecordingJar {
    contents: String,
    writes: Mutex<Vec<String>>,
}

impl RecordingJar {
    fn with_contents(contents: &str) -> Self {
        Self {
            contents: contents.to_owned(),
            writes: Mutex::new(Vec::new()),
        }
    }

    fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl CookieJar for RecordingJar {
    fn read_all(&self) -> String {
        self.contents.clone()
    }

    fn write(&self, serialized: &str) {
        self.writes.lock().unwrap().push(serialized.to_owned());
    }
}

#[test]
fn set_writes_path_and_secure_literally() {
    let store = CookieStore::new(RecordingJar::default());
    store.set("a", "1", &CookieOptions::new().path("/x").secure(true));

    assert_eq!(store.jar().writes(), vec!["a=1;path=/x;secure".to_owned()]);
}

#[test]
fn set_without_options_writes_the_bare_pair() {
    let store = CookieStore::new(RecordingJar::default());
    store.set("a", "1", &CookieOptions::new());

    assert_eq!(store.jar().writes(), vec!["a=1".to_owned()]);
}

#[test]
fn set_with_absolute_expiry_formats_the_instant() {
    let store = CookieStore::new(RecordingJar::default());
    let instant = datetime!(2030-06-15 12:00:00 UTC);
    store.set("a", "1", &CookieOptions::new().expires(Expires::At(instant)));

    assert_eq!(
        store.jar().writes(),
        vec!["a=1;expires=Sat, 15 Jun 2030 12:00:00 GMT".to_owned()]
    );
}

#[test]
fn set_with_relative_expiry_is_anchored_at_the_call() {
    let store = CookieStore::new(RecordingJar::default());

    let before = OffsetDateTime::now_utc();
    store.set("a", "1", &CookieOptions::new().expires(Expires::after_secs(60)));
    let after = OffsetDateTime::now_utc();

    let writes = store.jar().writes();
    assert_eq!(writes.len(), 1);
    let expires = writes[0]
        .strip_prefix("a=1;expires=")
        .expect("write should carry an expires attribute");
    let instant = httpdate::parse(expires).expect("expires should be an HTTP-date");

    // HTTP-dates have second resolution, so compare against the call
    // window truncated the same way.
    let lower = before + Duration::seconds(60) - Duration::seconds(1);
    let upper = after + Duration::seconds(60);
    assert!(instant >= lower && instant <= upper);
}

#[test]
fn set_appends_attributes_in_a_fixed_order() {
    let store = CookieStore::new(RecordingJar::default());
    let instant = datetime!(2030-01-01 00:00:00 UTC);
    store.set(
        "a",
        "1",
        &CookieOptions::new()
            .secure(true)
            .domain("example.com")
            .path("/x")
            .expires(Expires::At(instant)),
    );

    assert_eq!(
        store.jar().writes(),
        vec!["a=1;expires=Tue, 01 Jan 2030 00:00:00 GMT;path=/x;domain=example.com;secure".to_owned()]
    );
}

#[test]
fn delete_writes_the_fixed_epoch_timestamp() {
    let store = CookieStore::new(RecordingJar::default());
    store.delete(
        "a",
        &DeleteOptions::new().path("/x").domain("example.com"),
    );

    assert_eq!(
        store.jar().writes(),
        vec!["a=;expires=Thu, 01 Jan 1970 00:00:00 UTC;path=/x;domain=example.com".to_owned()]
    );
}

#[test]
fn delete_without_scope_omits_the_attributes() {
    let store = CookieStore::new(RecordingJar::default());
    store.delete("a", &DeleteOptions::new());

    assert_eq!(
        store.jar().writes(),
        vec!["a=;expires=Thu, 01 Jan 1970 00:00:00 UTC".to_owned()]
    );
}

#[test]
fn reserved_characters_are_encoded_on_write() {
    let store = CookieStore::new(RecordingJar::default());
    store.set("na me", "v;a=l", &CookieOptions::new());

    assert_eq!(store.jar().writes(), vec!["na%20me=v%3Ba%3Dl".to_owned()]);
}

#[test]
fn get_decodes_the_stored_value() {
    let store = CookieStore::new(RecordingJar::with_contents("na%20me=v%3Ba%3Dl"));
    assert_eq!(store.get("na me").as_deref(), Some("v;a=l"));
}

#[test]
fn get_splits_on_the_first_equals_only() {
    // Raw `=` in a segment's value part is legal since encoding never
    // produces one; everything after the first `=` is the value.
    let store = CookieStore::new(RecordingJar::with_contents("a=b=c"));
    assert_eq!(store.get("a").as_deref(), Some("b=c"));
}

#[test]
fn get_returns_the_first_of_duplicate_names() {
    let store = CookieStore::new(RecordingJar::with_contents("dup=first; dup=second"));
    assert_eq!(store.get("dup").as_deref(), Some("first"));
}

#[test]
fn get_tolerates_empty_and_bare_segments() {
    let store = CookieStore::new(RecordingJar::with_contents("a=1;;bare; b=2;"));
    assert_eq!(store.get("a").as_deref(), Some("1"));
    assert_eq!(store.get("b").as_deref(), Some("2"));
    assert_eq!(store.get("bare"), None);
    assert_eq!(store.get("missing"), None);
}

#[test]
fn get_on_an_empty_jar_is_none() {
    let store = CookieStore::new(RecordingJar::default());
    assert_eq!(store.get("anything"), None);
}

#[test]
fn get_with_undecodable_jar_bytes_is_none() {
    let store = CookieStore::new(RecordingJar::with_contents("a=%FF%FE"));
    assert_eq!(store.get("a"), None);
}

#[test]
fn every_operation_issues_exactly_one_write() {
    let store = CookieStore::new(RecordingJar::default());
    store.set("a", "1", &CookieOptions::new());
    store.delete("a", &DeleteOptions::new());
    store.get("a");

    assert_eq!(store.jar().writes().len(), 2);
}
