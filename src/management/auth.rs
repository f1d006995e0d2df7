use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{config, errors::FetchError, types::Token};

pub struct TokenManager {
    token: Option<Token>,
    client_id: String,
    client_secret: String,
    token_url: String,
}

impl TokenManager {
    pub fn new(client_id: String, client_secret: String, token_url: String) -> Self {
        TokenManager {
            token: None,
            client_id,
            client_secret,
            token_url,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            config::spotify_client_id(),
            config::spotify_client_secret(),
            config::spotify_apitoken_url(),
        )
    }

    pub async fn get_valid_token(&mut self) -> Result<String, FetchError> {
        if self.needs_refresh() {
            self.token = Some(self.request_token().await?);
        }

        Ok(self
            .token
            .as_ref()
            .map(|token| token.access_token.clone())
            .unwrap_or_default())
    }

    fn needs_refresh(&self) -> bool {
        match &self.token {
            Some(token) => {
                let now = Utc::now().timestamp() as u64;
                now >= token.obtained_at + token.expires_in - 240
            }
            None => true,
        }
    }

    async fn request_token(&self) -> Result<Token, FetchError> {
        let credentials = STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));

        let client = Client::new();
        let response = client
            .post(&self.token_url)
            .header("Authorization", format!("Basic {}", credentials))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Api(response.status()));
        }

        let json: serde_json::Value = response.json().await?;

        Ok(Token {
            access_token: json["access_token"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}
