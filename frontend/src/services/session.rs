use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Deserialize;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

/// Credential handed to the client by the login flow. The token is opaque
/// to this crate apart from reading the user id out of its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
    username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenClaims {
    id: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: Option<String>) -> Self {
        Self {
            token: token.into(),
            username,
        }
    }

    /// Read the session the login page left in local storage
    pub fn from_local_storage() -> Option<Self> {
        use gloo::storage::{LocalStorage, Storage};

        let storage = LocalStorage::raw();
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        if token.trim().is_empty() {
            return None;
        }
        let username = storage.get_item(USERNAME_KEY).ok().flatten();
        Some(Self::new(token, username))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// User id carried in the token payload, used as the trainee filter
    pub fn trainee_id(&self) -> Option<String> {
        let payload = self.token.split('.').nth(1)?;
        let bytes = Base64UrlUnpadded::decode_vec(payload.trim_end_matches('=')).ok()?;
        serde_json::from_slice::<TokenClaims>(&bytes)
            .ok()
            .map(|claims| claims.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#),
            Base64UrlUnpadded::encode_string(payload.as_bytes())
        )
    }

    #[test]
    fn test_trainee_id_from_payload() {
        let session = Session::new(
            token_with_payload(r#"{"id":"64b7f1a2c3","role":"trainee","iat":1700000000}"#),
            Some("dana".to_string()),
        );
        assert_eq!(session.trainee_id().as_deref(), Some("64b7f1a2c3"));
        assert_eq!(session.username(), Some("dana"));
    }

    #[test]
    fn test_trainee_id_missing_for_malformed_tokens() {
        assert_eq!(Session::new("not-a-jwt", None).trainee_id(), None);
        assert_eq!(Session::new("a.!!!.c", None).trainee_id(), None);
        assert_eq!(Session::new(token_with_payload(r#"{"sub":"x"}"#), None).trainee_id(), None);
    }

    #[test]
    fn test_authorization_header() {
        let session = Session::new("abc.def.ghi", None);
        assert_eq!(session.authorization_header(), "Bearer abc.def.ghi");
    }
}
