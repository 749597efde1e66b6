use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::UserProfile;

use super::{DEFAULT_SUPABASE_ANON_KEY, DEFAULT_SUPABASE_URL};

const ACCESS_TOKEN_KEY: &str = "gtfit.access_token";

/// Client for the remote auth collaborator (GoTrue-shaped REST).
///
/// The access token lives in browser local storage so a page reload keeps
/// the session. Failures are passed through as the collaborator's message;
/// there are no retries.
#[derive(Clone, PartialEq)]
pub struct AuthClient {
    base_url: String,
    api_key: String,
}

impl AuthClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_SUPABASE_URL.to_string(),
            api_key: DEFAULT_SUPABASE_ANON_KEY.to_string(),
        }
    }

    pub fn with_config(base_url: String, api_key: String) -> Self {
        Self { base_url, api_key }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, String> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let body = PasswordGrant { email, password };

        let response = Request::post(&url)
            .header("apikey", &self.api_key)
            .json(&body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        self.read_session(response).await
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserProfile, String> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        let body = SignUpRequest {
            email,
            password,
            data: SignUpMetadata { name },
        };

        let response = Request::post(&url)
            .header("apikey", &self.api_key)
            .json(&body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        self.read_session(response).await
    }

    /// Current authenticated identity, or `None` when signed out. A stale
    /// token is cleared and treated as signed out, not as an error.
    pub async fn current_user(&self) -> Result<Option<UserProfile>, String> {
        let Some(token) = stored_access_token() else {
            return Ok(None);
        };

        let url = format!("{}/auth/v1/user", self.base_url);
        let response = Request::get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            let user: AuthUser = response
                .json()
                .await
                .map_err(|e| format!("Failed to parse identity: {}", e))?;
            Ok(Some(user.into_profile()))
        } else {
            LocalStorage::delete(ACCESS_TOKEN_KEY);
            Ok(None)
        }
    }

    /// Revoke the session. Remote revocation is best effort; the local
    /// session is cleared regardless.
    pub async fn sign_out(&self) -> Result<(), String> {
        if let Some(token) = stored_access_token() {
            let url = format!("{}/auth/v1/logout", self.base_url);
            let _ = Request::post(&url)
                .header("apikey", &self.api_key)
                .header("Authorization", &format!("Bearer {}", token))
                .send()
                .await;
        }
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        Ok(())
    }

    async fn read_session(&self, response: gloo::net::http::Response) -> Result<UserProfile, String> {
        if response.ok() {
            let session: SessionResponse = response
                .json()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))?;
            LocalStorage::set(ACCESS_TOKEN_KEY, &session.access_token)
                .map_err(|e| format!("Failed to store session: {}", e))?;
            Ok(session.user.into_profile())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(error_message(&body))
        }
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Bearer token for storage requests, shared with [`super::api::ApiClient`].
pub fn stored_access_token() -> Option<String> {
    LocalStorage::get(ACCESS_TOKEN_KEY).ok()
}

/// The auth provider reports failures as JSON with one of several message
/// fields depending on the endpoint; fall back to the raw body.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    if body.is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    }
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
    access_token: String,
    user: AuthUser,
}

/// Loosely-typed user object from the collaborator, narrowed to
/// [`UserProfile`] immediately at this boundary.
#[derive(Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Default, Deserialize)]
struct UserMetadata {
    name: Option<String>,
}

impl AuthUser {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email,
            display_name: self.user_metadata.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_known_fields() {
        assert_eq!(
            error_message(r#"{"error_description": "Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(
            error_message(r#"{"msg": "Email not confirmed"}"#),
            "Email not confirmed"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("service unavailable"), "service unavailable");
        assert_eq!(error_message(""), "Unknown error");
        // JSON without a recognized message field.
        assert_eq!(error_message(r#"{"code": 429}"#), r#"{"code": 429}"#);
    }

    #[test]
    fn test_auth_user_narrows_to_profile() {
        let raw = r#"{
            "id": "u1",
            "aud": "authenticated",
            "email": "a@b.com",
            "user_metadata": {"name": "Ana", "avatar_url": "x"}
        }"#;
        let user: AuthUser = serde_json::from_str(raw).unwrap();
        let profile = user.into_profile();

        assert_eq!(profile.id, "u1");
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.display_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_auth_user_tolerates_missing_metadata() {
        let user: AuthUser = serde_json::from_str(r#"{"id": "u2"}"#).unwrap();
        let profile = user.into_profile();

        assert_eq!(profile.email, "");
        assert_eq!(profile.display_name, None);
    }
}
