use std::sync::Arc;

use time::{Duration, OffsetDateTime};

use super::*;
use crate::session::clock::FixedClock;
use crate::session::medium::{MemoryCookies, RequestCookies};
use crate::session::store::CookieStore;

type MemoryAuth = AuthService<CookieStore<MemoryCookies<FixedClock>, FixedClock>>;

fn memory_auth() -> (FixedClock, MemoryAuth) {
    let clock = FixedClock::new(OffsetDateTime::from_unix_timestamp(1_760_000_000).unwrap());
    let store = CookieStore::new(MemoryCookies::new(clock.clone()), clock.clone());
    (clock, AuthService::new(store))
}

#[test]
fn not_authenticated_before_login() {
    let (_, auth) = memory_auth();
    assert!(!auth.is_authenticated());
}

#[test]
fn login_then_logout_toggles_presence() {
    let (_, auth) = memory_auth();
    auth.login("abc");
    assert!(auth.is_authenticated());
    auth.logout();
    assert!(!auth.is_authenticated());
}

#[test]
fn logout_without_login_is_harmless() {
    let (_, auth) = memory_auth();
    auth.logout();
    assert!(!auth.is_authenticated());
}

#[test]
fn login_with_empty_token_is_not_a_session() {
    let (_, auth) = memory_auth();
    auth.login("");
    assert!(!auth.is_authenticated());
}

#[test]
fn session_lapses_after_one_day() {
    let (clock, auth) = memory_auth();
    auth.login("abc");
    clock.advance(Duration::days(1));
    assert!(!auth.is_authenticated());
}

#[test]
fn relogin_after_logout_restores_session() {
    let (_, auth) = memory_auth();
    auth.login("tok1");
    auth.logout();
    auth.login("tok2");
    assert!(auth.is_authenticated());
}

#[test]
fn unverified_cookie_value_passes() {
    let store = CookieStore::new(RequestCookies::new("auth_token=set-by-hand"), FixedClock::new(OffsetDateTime::UNIX_EPOCH));
    assert!(AuthService::new(store).is_authenticated());
}

#[test]
fn clones_share_one_store() {
    let clock = FixedClock::new(OffsetDateTime::UNIX_EPOCH);
    let store: Arc<dyn SessionStore> = Arc::new(CookieStore::new(MemoryCookies::new(clock.clone()), clock));
    let auth = AuthService::new(store);
    let other = auth.clone();
    auth.login("abc");
    assert!(other.is_authenticated());
}
