//! Passthrough client for the external weather service.
//!
//! No retries: a failed upstream call surfaces directly as an upstream
//! error, distinct from our own server errors.

use serde_json::Value;

use crate::domain::DomainError;

pub async fn fetch_weather(url: &str) -> Result<Value, DomainError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .map_err(|e| DomainError::Upstream(e.to_string()))?;

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| DomainError::Upstream(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(DomainError::Upstream(format!(
            "upstream returned {}",
            resp.status()
        )));
    }

    resp.json::<Value>()
        .await
        .map_err(|e| DomainError::Upstream(e.to_string()))
}
