use docjar::jar::{CookieJar, MemoryJar};
use docjar::options::{CookieOptions, DeleteOptions, Expires};
use docjar::store::CookieStore;

fn main() {
    let store = CookieStore::new(MemoryJar::new());

    println!("--- Step 1: Setting cookies ---");
    store.set(
        "session",
        "abc123",
        &CookieOptions::new()
            .path("/")
            .expires(Expires::after_secs(3600))
            .secure(true),
    );
    store.set("theme", "dark", &CookieOptions::new());
    println!("Jar: {}", store.jar().read_all());

    println!("\n--- Step 2: Reading them back ---");
    println!("session = {:?}", store.get("session"));
    println!("theme   = {:?}", store.get("theme"));
    println!("missing = {:?}", store.get("missing"));

    println!("\n--- Step 3: Deleting the session ---");
    store.delete("session", &DeleteOptions::new().path("/"));
    println!("Jar: {}", store.jar().read_all());
    println!("session = {:?}", store.get("session"));
}
