use async_trait::async_trait;
use serde_json::json;

/// Remote phone-verification API. The trait keeps the outbound call
/// swappable in tests.
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Ask the upstream API about a phone number and return its JSON body
    /// as-is.
    async fn check(&self, phone: &str) -> anyhow::Result<serde_json::Value>;
}

pub struct HttpLookupClient {
    http: reqwest::Client,
    api_url: String,
    access_token: String,
}

impl HttpLookupClient {
    pub fn new(api_url: &str, access_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.to_string(),
            access_token: access_token.to_string(),
        }
    }
}

#[async_trait]
impl LookupClient for HttpLookupClient {
    async fn check(&self, phone: &str) -> anyhow::Result<serde_json::Value> {
        let response = self
            .http
            .post(&self.api_url)
            .json(&json!({
                "access_token": self.access_token,
                "phone": phone,
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
