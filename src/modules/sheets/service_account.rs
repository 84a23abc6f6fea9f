use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::core::config::GoogleSheetsConfig;

const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for each signed assertion
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Claims of the self-signed service account assertion
#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Response from the OAuth2 token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(rename = "token_type", default)]
    pub _token_type: String,
}

/// Cached token with expiration tracking
struct TokenCache {
    token: TokenResponse,
    fetched_at: Instant,
}

/// Exchanges signed service account assertions for access tokens, with caching
pub struct ServiceAccountTokenManager {
    service_account_email: String,
    private_key: String,
    token_uri: String,
    client: reqwest::Client,
    cache: Arc<RwLock<Option<TokenCache>>>,
    /// Refresh token this many seconds before expiration
    refresh_margin: Duration,
}

impl ServiceAccountTokenManager {
    pub fn new(config: &GoogleSheetsConfig, client: reqwest::Client) -> Self {
        Self {
            service_account_email: config.service_account_email.clone(),
            private_key: config.private_key.clone(),
            token_uri: config.token_uri.clone(),
            client,
            cache: Arc::new(RwLock::new(None)),
            refresh_margin: Duration::from_secs(60),
        }
    }

    /// Get a valid access token, fetching a new one if necessary
    pub async fn get_access_token(&self) -> Result<String, TokenError> {
        {
            let cache = self.cache.read().await;
            if let Some(ref cached) = *cache {
                let elapsed = cached.fetched_at.elapsed();
                let expires_in = Duration::from_secs(cached.token.expires_in);

                if elapsed + self.refresh_margin < expires_in {
                    tracing::debug!(
                        "Using cached service account token (expires in {} seconds)",
                        (expires_in - elapsed).as_secs()
                    );
                    return Ok(cached.token.access_token.clone());
                }
            }
        }

        self.fetch_token().await
    }

    /// Build the RS256 assertion presented to the token endpoint
    pub fn build_assertion(&self) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: self.service_account_email.clone(),
            scope: GoogleSheetsConfig::SPREADSHEETS_SCOPE.to_string(),
            aud: self.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .map_err(|e| TokenError::InvalidKey(e.to_string()))?;

        encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| TokenError::SigningError(e.to_string()))
    }

    async fn fetch_token(&self) -> Result<String, TokenError> {
        tracing::debug!(
            "Fetching new service account token from {}",
            self.token_uri
        );

        let assertion = self.build_assertion()?;

        let response = self
            .client
            .post(&self.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| TokenError::FetchError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TokenError::FetchError(format!(
                "Token request failed: HTTP {} - {}",
                status, body
            )));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| TokenError::ParseError(e.to_string()))?;

        tracing::info!(
            "Fetched new service account token, expires in {} seconds",
            token_response.expires_in
        );

        let access_token = token_response.access_token.clone();

        let mut cache = self.cache.write().await;
        *cache = Some(TokenCache {
            token: token_response,
            fetched_at: Instant::now(),
        });

        Ok(access_token)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid service account private key: {0}")]
    InvalidKey(String),

    #[error("Failed to sign assertion: {0}")]
    SigningError(String),

    #[error("Failed to fetch token: {0}")]
    FetchError(String),

    #[error("Failed to parse token response: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, routing::post, Form, Json, Router};
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TEST_PRIVATE_KEY: &str = include_str!("testdata/service_account_key.pem");
    const TEST_PUBLIC_KEY: &str = include_str!("testdata/service_account_pub.pem");
    const TEST_EMAIL: &str = "survey-writer@test-project.iam.gserviceaccount.com";

    fn test_config(token_uri: &str, private_key: &str) -> GoogleSheetsConfig {
        GoogleSheetsConfig {
            service_account_email: TEST_EMAIL.to_string(),
            private_key: private_key.to_string(),
            spreadsheet_id: "sheet-id".to_string(),
            token_uri: token_uri.to_string(),
            api_base_url: "http://127.0.0.1:9".to_string(),
        }
    }

    async fn issue_token(
        State(hits): State<Arc<AtomicUsize>>,
        Form(form): Form<HashMap<String, String>>,
    ) -> Json<serde_json::Value> {
        hits.fetch_add(1, Ordering::SeqCst);
        assert_eq!(form.get("grant_type").map(String::as_str), Some(JWT_BEARER_GRANT_TYPE));
        assert!(form.contains_key("assertion"));
        Json(json!({
            "access_token": "ya29.test-token",
            "expires_in": 3599,
            "token_type": "Bearer"
        }))
    }

    async fn spawn_token_endpoint() -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/token", post(issue_token))
            .with_state(Arc::clone(&hits));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/token", addr), hits)
    }

    #[test]
    fn test_assertion_is_signed_with_service_account_key() {
        let token_uri = "https://oauth2.googleapis.com/token";
        let manager = ServiceAccountTokenManager::new(
            &test_config(token_uri, TEST_PRIVATE_KEY),
            reqwest::Client::new(),
        );

        let assertion = manager.build_assertion().unwrap();

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[token_uri]);
        validation.set_issuer(&[TEST_EMAIL]);
        let decoded = decode::<AssertionClaims>(
            &assertion,
            &DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap(),
            &validation,
        )
        .unwrap();

        assert_eq!(decoded.claims.scope, GoogleSheetsConfig::SPREADSHEETS_SCOPE);
        assert_eq!(decoded.claims.exp - decoded.claims.iat, ASSERTION_LIFETIME_SECS);
    }

    #[test]
    fn test_invalid_private_key_is_rejected() {
        let manager = ServiceAccountTokenManager::new(
            &test_config("https://oauth2.googleapis.com/token", "not a pem"),
            reqwest::Client::new(),
        );

        assert!(matches!(
            manager.build_assertion(),
            Err(TokenError::InvalidKey(_))
        ));
    }

    #[tokio::test]
    async fn test_token_is_fetched_once_and_cached() {
        let (token_uri, hits) = spawn_token_endpoint().await;
        let manager = ServiceAccountTokenManager::new(
            &test_config(&token_uri, TEST_PRIVATE_KEY),
            reqwest::Client::new(),
        );

        assert_eq!(manager.get_access_token().await.unwrap(), "ya29.test-token");
        assert_eq!(manager.get_access_token().await.unwrap(), "ya29.test-token");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unreachable_token_endpoint() {
        let manager = ServiceAccountTokenManager::new(
            &test_config("http://127.0.0.1:9/token", TEST_PRIVATE_KEY),
            reqwest::Client::new(),
        );

        assert!(matches!(
            manager.get_access_token().await,
            Err(TokenError::FetchError(_))
        ));
    }
}
