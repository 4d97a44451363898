use super::*;
use crate::session::clock::FixedClock;
use crate::session::medium::{DocumentCookies, MemoryCookies, RequestCookies};

const START: i64 = 1_760_000_000;

fn memory_store() -> (FixedClock, CookieStore<MemoryCookies<FixedClock>, FixedClock>) {
    let start = OffsetDateTime::from_unix_timestamp(START).unwrap();
    let clock = FixedClock::new(start);
    let store = CookieStore::new(MemoryCookies::new(clock.clone()), clock.clone());
    (clock, store)
}

// =============================================================================
// write / read / delete
// =============================================================================

#[test]
fn read_before_write_is_absent() {
    let (_, store) = memory_store();
    assert_eq!(store.read(SESSION_COOKIE_NAME), None);
}

#[test]
fn write_then_read_round_trips() {
    let (_, store) = memory_store();
    for token in ["abc", "tok1", "eyJhbGciOi.J9==", "with space", "a;b", " padded ", "50%off", "%20", "k=v,w"] {
        store.write(SESSION_COOKIE_NAME, token, DEFAULT_TTL_DAYS);
        assert_eq!(store.read(SESSION_COOKIE_NAME).as_deref(), Some(token));
    }
}

#[test]
fn later_write_overwrites_earlier() {
    let (_, store) = memory_store();
    store.write(SESSION_COOKIE_NAME, "first", DEFAULT_TTL_DAYS);
    store.write(SESSION_COOKIE_NAME, "second", DEFAULT_TTL_DAYS);
    assert_eq!(store.read(SESSION_COOKIE_NAME).as_deref(), Some("second"));
    assert_eq!(store.medium().cookie_string().unwrap(), "auth_token=second");
}

#[test]
fn delete_after_write_reports_absence() {
    let (_, store) = memory_store();
    store.write(SESSION_COOKIE_NAME, "abc", DEFAULT_TTL_DAYS);
    store.delete(SESSION_COOKIE_NAME);
    assert_eq!(store.read(SESSION_COOKIE_NAME), None);
}

#[test]
fn delete_is_idempotent() {
    let (_, store) = memory_store();
    store.delete(SESSION_COOKIE_NAME);
    store.delete(SESSION_COOKIE_NAME);
    assert_eq!(store.read(SESSION_COOKIE_NAME), None);
}

#[test]
fn delete_leaves_other_entries() {
    let (_, store) = memory_store();
    store.write("theme", "dark", DEFAULT_TTL_DAYS);
    store.write(SESSION_COOKIE_NAME, "abc", DEFAULT_TTL_DAYS);
    store.delete(SESSION_COOKIE_NAME);
    assert_eq!(store.read("theme").as_deref(), Some("dark"));
}

#[test]
fn entry_expires_after_default_ttl() {
    let (clock, store) = memory_store();
    store.write(SESSION_COOKIE_NAME, "abc", DEFAULT_TTL_DAYS);
    clock.advance(Duration::hours(23));
    assert_eq!(store.read(SESSION_COOKIE_NAME).as_deref(), Some("abc"));
    clock.advance(Duration::hours(1));
    assert_eq!(store.read(SESSION_COOKIE_NAME), None);
}

#[test]
fn custom_ttl_extends_lifetime() {
    let (clock, store) = memory_store();
    store.write(SESSION_COOKIE_NAME, "abc", 7);
    clock.advance(Duration::days(6));
    assert_eq!(store.read(SESSION_COOKIE_NAME).as_deref(), Some("abc"));
    clock.advance(Duration::days(1));
    assert_eq!(store.read(SESSION_COOKIE_NAME), None);
}

#[test]
fn zero_ttl_write_is_immediately_expired() {
    let (_, store) = memory_store();
    store.write(SESSION_COOKIE_NAME, "abc", 0);
    assert_eq!(store.read(SESSION_COOKIE_NAME), None);
}

// =============================================================================
// degraded media
// =============================================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn unavailable_medium_reads_as_absent() {
    let store = CookieStore::new(DocumentCookies, FixedClock::new(OffsetDateTime::UNIX_EPOCH));
    store.write(SESSION_COOKIE_NAME, "abc", DEFAULT_TTL_DAYS);
    assert_eq!(store.read(SESSION_COOKIE_NAME), None);
    assert!(matches!(store.try_read(SESSION_COOKIE_NAME), Err(StoreError::Unavailable(_))));
}

#[test]
fn read_only_medium_swallows_writes() {
    let store = CookieStore::new(RequestCookies::new("auth_token=abc"), FixedClock::new(OffsetDateTime::UNIX_EPOCH));
    store.write(SESSION_COOKIE_NAME, "other", DEFAULT_TTL_DAYS);
    store.delete(SESSION_COOKIE_NAME);
    assert_eq!(store.read(SESSION_COOKIE_NAME).as_deref(), Some("abc"));
}

#[test]
fn malformed_pairs_are_skipped() {
    let store = CookieStore::new(
        RequestCookies::new("garbage; =novalue; auth_token=abc"),
        FixedClock::new(OffsetDateTime::UNIX_EPOCH),
    );
    assert_eq!(store.read(SESSION_COOKIE_NAME).as_deref(), Some("abc"));
}

#[test]
fn entirely_malformed_string_reads_as_absent() {
    let store = CookieStore::new(RequestCookies::new(";;;garbage"), FixedClock::new(OffsetDateTime::UNIX_EPOCH));
    assert_eq!(store.read(SESSION_COOKIE_NAME), None);
}

// =============================================================================
// find_cookie / assignment
// =============================================================================

#[test]
fn find_cookie_requires_exact_name() {
    assert_eq!(find_cookie("xauth_token=1; auth_token_x=2", "auth_token"), None);
    assert_eq!(find_cookie("xauth_token=1; auth_token=2", "auth_token").as_deref(), Some("2"));
}

#[test]
fn find_cookie_returns_first_match() {
    assert_eq!(find_cookie("auth_token=a; auth_token=b", "auth_token").as_deref(), Some("a"));
}

#[test]
fn find_cookie_decodes_percent_escapes() {
    assert_eq!(find_cookie("auth_token=a%3Bb%20c", "auth_token").as_deref(), Some("a;b c"));
    assert_eq!(find_cookie("auth_token=%20", "auth_token").as_deref(), Some(" "));
}

#[test]
fn find_cookie_skips_pairs_that_decode_to_invalid_utf8() {
    assert_eq!(find_cookie("auth_token=%FF; auth_token=ok", "auth_token").as_deref(), Some("ok"));
}

#[test]
fn assignment_encodes_separators_in_value() {
    let line = assignment("auth_token", "a;b c", OffsetDateTime::UNIX_EPOCH);
    assert!(line.starts_with("auth_token=a%3Bb%20c;"));
}

#[test]
fn find_cookie_keeps_empty_value() {
    assert_eq!(find_cookie("auth_token=", "auth_token").as_deref(), Some(""));
}

#[test]
fn assignment_carries_path_and_expiry() {
    let expires = OffsetDateTime::from_unix_timestamp(START).unwrap();
    let line = assignment("auth_token", "abc", expires);
    assert!(line.starts_with("auth_token=abc"));
    assert!(line.contains("Path=/"));
    assert!(line.contains("Expires="));
    assert!(line.ends_with("GMT"));
}

#[test]
fn deletion_assignment_uses_epoch() {
    let line = assignment("auth_token", "", OffsetDateTime::UNIX_EPOCH);
    assert!(line.contains("01 Jan 1970 00:00:00 GMT"));
}
