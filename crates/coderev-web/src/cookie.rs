//! Browser session cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use coderev_application::SessionStore;

pub const SESSION_COOKIE: &str = "coderev_session";

/// Returns the session id carried by the request, if any.
pub fn session_id(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Resolves the browser's session id, issuing a new one when the request
/// carries none. The returned jar holds the cookie to set, if any.
pub fn ensure_session(jar: CookieJar) -> (CookieJar, String) {
    match session_id(&jar) {
        Some(id) => (jar, id),
        None => {
            let id = SessionStore::new_session_id();
            (jar.add(session_cookie(id.clone())), id)
        }
    }
}

fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
