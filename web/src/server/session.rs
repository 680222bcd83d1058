//! Resolve the signed-in user from the request's session cookie.

use std::path::Path;

use catalog_common::session::cookie_value;
use chrono::{DateTime, Utc};
use http::header::COOKIE;
use http::HeaderMap;

use super::db;
use crate::app::AppState;

/// User id for a session token, if the session exists and has not expired.
/// Storage errors count as "no session".
pub fn session_user(db_path: &Path, token: Option<&str>, now: DateTime<Utc>) -> Option<String> {
    let token = token?;
    match db::find_session(db_path, token) {
        Ok(Some(session)) if session.is_active(now) => Some(session.user_id),
        Ok(Some(_)) => {
            tracing::debug!("Session expired");
            None
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("Session lookup failed: {e}");
            None
        }
    }
}

/// Session token carried by `headers`, if any.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let values = headers.get_all(COOKIE).iter().filter_map(|v| v.to_str().ok());
    cookie_value(values, cookie_name)
}

/// The current request's user, read from Leptos context.
///
/// Works both while rendering a route and inside a server function.
pub fn current_user(state: &AppState) -> Option<String> {
    let parts = leptos::prelude::use_context::<http::request::Parts>()?;
    let token = session_token(&parts.headers, &state.session_cookie);
    session_user(&state.db_path, token.as_deref(), Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_common::profile::Profile;
    use catalog_common::session::Session;
    use chrono::Duration;
    use http::HeaderValue;

    #[test]
    fn test_session_token_from_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("catalog_session=tok; b=2"));
        assert_eq!(session_token(&headers, "catalog_session").as_deref(), Some("tok"));
        assert_eq!(session_token(&HeaderMap::new(), "catalog_session"), None);
    }

    #[test]
    fn test_session_user() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        db::ensure_catalog_schema(&path).unwrap();
        db::insert_profile(
            &path,
            &Profile {
                id: "u1".into(),
                email: "u1@example.org".into(),
                display_name: "Ada".into(),
                biography: None,
            },
        )
        .unwrap();
        let now = Utc::now();
        db::insert_session(
            &path,
            &Session {
                token: "tok".into(),
                user_id: "u1".into(),
                expires_at: now + Duration::minutes(10),
            },
        )
        .unwrap();

        assert_eq!(session_user(&path, Some("tok"), now).as_deref(), Some("u1"));
        assert_eq!(session_user(&path, Some("tok"), now + Duration::minutes(11)), None);
        assert_eq!(session_user(&path, Some("other"), now), None);
        assert_eq!(session_user(&path, None, now), None);
    }

    #[test]
    fn test_unreadable_database_means_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.db");
        assert_eq!(session_user(&missing, Some("tok"), Utc::now()), None);
    }
}
