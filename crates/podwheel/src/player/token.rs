use derive_more::{AsRef, Deref, From, Into};
use std::fmt;
use std::time::SystemTime;

#[derive(Clone, PartialEq, Eq, Hash, Deref, From, Into, AsRef)]
pub struct AccessToken(String);

crate::impl_string_newtype!(AccessToken);

impl fmt::Debug for AccessToken {
    // never leak token material into logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(…{} chars)", self.0.len())
    }
}

/// What a caller needs the token for; each purpose has its own preference
/// order across the two credential sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    /// Library reads (playlists, profile): the Web API token has the scopes.
    DataAccess,
    /// Transport commands: the SDK session is the reliable path.
    PlaybackControl,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Full,
    SdkOnly,
    WebApiOnly,
    Unauthorized,
}

/// The two credentials the service hands out, arbitrated by a fixed priority
/// order per purpose. Pure policy: no refresh, no I/O.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    pub sdk: Option<AccessToken>,
    pub web_api: Option<AccessToken>,
    pub web_api_expires_at: Option<SystemTime>,
}

impl TokenSet {
    pub fn status(&self, now: SystemTime) -> AuthStatus {
        match (self.sdk.is_some(), self.web_api_token_valid(now)) {
            (true, true) => AuthStatus::Full,
            (true, false) => AuthStatus::SdkOnly,
            (false, true) => AuthStatus::WebApiOnly,
            (false, false) => AuthStatus::Unauthorized,
        }
    }

    /// Ordered fallback: the preferred source first, the other one as a
    /// degraded substitute, `None` when neither is usable.
    pub fn select(&self, purpose: TokenPurpose, now: SystemTime) -> Option<&AccessToken> {
        let web = if self.web_api_token_valid(now) {
            self.web_api.as_ref()
        } else {
            None
        };
        match purpose {
            TokenPurpose::DataAccess => web.or(self.sdk.as_ref()),
            TokenPurpose::PlaybackControl => self.sdk.as_ref().or(web),
            TokenPurpose::Any => web.or(self.sdk.as_ref()),
        }
    }

    fn web_api_token_valid(&self, now: SystemTime) -> bool {
        if self.web_api.is_none() {
            return false;
        }
        match self.web_api_expires_at {
            Some(expiry) => now < expiry,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn tokens(sdk: bool, web: bool) -> TokenSet {
        TokenSet {
            sdk: sdk.then(|| AccessToken::new("sdk-token")),
            web_api: web.then(|| AccessToken::new("web-token")),
            web_api_expires_at: None,
        }
    }

    #[test]
    fn test_data_access_prefers_web_api() {
        let now = SystemTime::UNIX_EPOCH;
        let set = tokens(true, true);
        assert_eq!(
            set.select(TokenPurpose::DataAccess, now),
            Some(&AccessToken::new("web-token"))
        );
        // degraded fallback when the web token is missing
        let set = tokens(true, false);
        assert_eq!(
            set.select(TokenPurpose::DataAccess, now),
            Some(&AccessToken::new("sdk-token"))
        );
    }

    #[test]
    fn test_playback_control_prefers_sdk() {
        let now = SystemTime::UNIX_EPOCH;
        let set = tokens(true, true);
        assert_eq!(
            set.select(TokenPurpose::PlaybackControl, now),
            Some(&AccessToken::new("sdk-token"))
        );
        let set = tokens(false, true);
        assert_eq!(
            set.select(TokenPurpose::PlaybackControl, now),
            Some(&AccessToken::new("web-token"))
        );
        assert_eq!(tokens(false, false).select(TokenPurpose::Any, now), None);
    }

    #[test]
    fn test_expired_web_api_token_is_skipped() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1000);
        let set = TokenSet {
            sdk: Some(AccessToken::new("sdk-token")),
            web_api: Some(AccessToken::new("web-token")),
            web_api_expires_at: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(500)),
        };
        assert_eq!(
            set.select(TokenPurpose::DataAccess, now),
            Some(&AccessToken::new("sdk-token"))
        );
        assert_eq!(set.status(now), AuthStatus::SdkOnly);
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AccessToken::new("super-secret-token");
        assert!(!format!("{token:?}").contains("secret"));
    }
}
