//! Thin HTTP client shared by every provider and model backend
//!
//! Wraps `reqwest::Client` with a user agent, a request timeout and uniform
//! error mapping. There is deliberately no retry loop: a failed call is
//! reported once and the caller degrades.

use crate::shared::config::Settings;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct JsonClient {
    client: Client,
    user_agent: String,
    provider_name: String,
}

impl JsonClient {
    pub fn new(provider_name: &str, user_agent: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
            provider_name: provider_name.to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        Self::new("HTTP", &settings.user_agent, settings.http_timeout)
    }

    /// Same connection pool, different name in logs and errors
    pub fn named(&self, provider_name: &str) -> Self {
        Self {
            client: self.client.clone(),
            user_agent: self.user_agent.clone(),
            provider_name: provider_name.to_string(),
        }
    }

    /// Make a GET request and return the raw body
    pub async fn get_text(&self, url: &str, headers: &[(&str, &str)]) -> AppResult<String> {
        let request = self.request(Method::GET, url, headers);
        let response = self.send(request, url).await?;
        self.read_text(response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<T>(&self, url: &str, body: &Value, headers: &[(&str, &str)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, url, headers).json(body);
        let response = self.send(request, url).await?;
        let text = self.read_text(response).await?;
        parse_json(&self.provider_name, &text)
    }

    fn request(&self, method: Method, url: &str, headers: &[(&str, &str)]) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, url)
            .header("User-Agent", &self.user_agent);

        if !headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("accept")) {
            builder = builder.header("Accept", "application/json");
        }
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> AppResult<Response> {
        LogContext::api_call(&self.provider_name, strip_query(url), "started", None);
        let started = Instant::now();

        let response = request.send().await.map_err(|e| {
            AppError::ExternalServiceError(format!(
                "{} API request failed: {}",
                self.provider_name,
                e.without_url()
            ))
        })?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            strip_query(url),
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "{} API returned 404 for {}",
                self.provider_name,
                strip_query(url)
            )));
        }
        if !status.is_success() {
            return Err(AppError::ApiError(format!(
                "{} API returned error: {}",
                self.provider_name, status
            )));
        }
        Ok(response)
    }

    async fn read_text(&self, response: Response) -> AppResult<String> {
        response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name,
                e.without_url()
            ))
        })
    }

    /// Get provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

/// Decode a JSON body, quoting the start of the payload on failure
pub fn parse_json<T>(provider_name: &str, text: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text).map_err(|e| {
        AppError::SerializationError(format!(
            "Failed to parse {} response: {}. Response: {}",
            provider_name,
            e,
            crate::shared::utils::text::truncate_chars(text, 200)
        ))
    })
}

/// Log the endpoint without its query values
fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        name: String,
    }

    #[test]
    fn test_client_creation() {
        let client = JsonClient::new("NHL", "test-agent", Duration::from_secs(5)).unwrap();
        assert_eq!(client.provider_name(), "NHL");
        assert_eq!(client.named("MLB").provider_name(), "MLB");
    }

    #[test]
    fn test_parse_json_reports_provider_and_body() {
        let ok: Payload = parse_json("NHL", r#"{"name":"Flyers"}"#).unwrap();
        assert_eq!(ok.name, "Flyers");

        let err = parse_json::<Payload>("NHL", "<html>gateway timeout</html>").unwrap_err();
        match err {
            AppError::SerializationError(msg) => {
                assert!(msg.contains("NHL"));
                assert!(msg.contains("gateway timeout"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_strip_query() {
        assert_eq!(
            strip_query("https://example.com/v1/models:generate?key=secret"),
            "https://example.com/v1/models:generate"
        );
        assert_eq!(strip_query("https://example.com/a"), "https://example.com/a");
    }
}
