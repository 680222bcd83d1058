//! Sessions issued by the sign-in service and read back from a cookie.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Find a cookie value in one or more `Cookie` header values.
///
/// Header values are `name=value` pairs separated by `;`.
pub fn cookie_value<'a, I>(headers: I, name: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        let session = Session {
            token: "t".into(),
            user_id: "u1".into(),
            expires_at: now + Duration::minutes(5),
        };
        assert!(session.is_active(now));
        assert!(!session.is_active(now + Duration::minutes(5)));
    }

    #[test]
    fn test_cookie_value() {
        let headers = ["theme=dark; catalog_session=abc123", "other=1"];
        assert_eq!(cookie_value(headers, "catalog_session").as_deref(), Some("abc123"));
        assert_eq!(cookie_value(headers, "other").as_deref(), Some("1"));
        assert_eq!(cookie_value(headers, "missing"), None);
    }

    #[test]
    fn test_cookie_value_ignores_empty_and_quoted() {
        assert_eq!(cookie_value(["catalog_session="], "catalog_session"), None);
        assert_eq!(
            cookie_value(["catalog_session=\"xyz\""], "catalog_session").as_deref(),
            Some("xyz")
        );
        // prefix of another cookie name must not match
        assert_eq!(cookie_value(["catalog_session_old=1"], "catalog_session"), None);
    }
}
