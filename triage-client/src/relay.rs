use crate::ClientError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Result of `POST /analyze-skin`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinAnalysis {
    pub condition: String,
    pub severity: String,
    pub recommendation: String,
    pub facility_type: String,
    pub map_url: String,
}

/// Result of `POST /analyze-symptoms`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub analysis: String,
    pub facility_type: String,
    pub map_url: String,
}

#[derive(Serialize)]
struct SkinRequest<'a> {
    image: &'a str,
    address: &'a str,
}

#[derive(Serialize)]
struct SymptomRequest<'a> {
    symptoms: &'a str,
    address: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the relay endpoints.
#[derive(Clone)]
pub struct RelayClient {
    base_url: String,
    bearer_token: Option<String>,
    http: Client,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
            http: Client::new(),
        }
    }

    /// Send `Authorization: Bearer <token>` on every call, for relays that
    /// sit behind a gateway requiring a publishable key.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn analyze_skin(
        &self,
        image_data_uri: &str,
        address: &str,
    ) -> Result<SkinAnalysis, ClientError> {
        self.post(
            "/analyze-skin",
            &SkinRequest {
                image: image_data_uri,
                address,
            },
        )
        .await
    }

    pub async fn analyze_symptoms(
        &self,
        symptoms: &str,
        address: &str,
    ) -> Result<SymptomAnalysis, ClientError> {
        self.post("/analyze-symptoms", &SymptomRequest { symptoms, address })
            .await
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to send POST request to {}: {}", url, e);
            ClientError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            tracing::warn!(status = status.as_u16(), %message, "Relay call failed");
            return Err(ClientError::Relay {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
