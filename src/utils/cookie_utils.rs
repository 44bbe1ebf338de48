use cookie::Cookie;
use tracing::debug;

use crate::interfaces::credential_provider::CredentialProviderInterface;

pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Looks up a named cookie in a `document.cookie` style string (`a=1; b=2`).
/// Values are percent-decoded, the first cookie with the exact name wins.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.trim().is_empty() {
        return None;
    }
    Cookie::split_parse_encoded(cookies)
        .filter_map(|parsed| match parsed {
            Ok(cookie) => Some(cookie),
            Err(err) => {
                debug!("->> skipping unparsable cookie - {err}");
                None
            }
        })
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

#[derive(Debug, Clone)]
pub struct CookieCredentialProvider {
    cookies: String,
    cookie_name: String,
}

impl CookieCredentialProvider {
    pub fn new(cookies: &str, cookie_name: &str) -> Self {
        Self {
            cookies: cookies.to_string(),
            cookie_name: cookie_name.to_string(),
        }
    }
}

impl CredentialProviderInterface for CookieCredentialProvider {
    fn token(&self) -> Option<String> {
        get_cookie(&self.cookies, &self.cookie_name)
    }
}
