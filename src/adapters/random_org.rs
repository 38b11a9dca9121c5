use std::time::Duration;

use crate::domain::ports::RandomSource;
use crate::utils::error::{ArenaError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Random source backed by an HTTP endpoint returning one decimal fraction
/// as plain text.
#[derive(Debug, Clone)]
pub struct RandomOrgSource {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl RandomOrgSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    fn classify(&self, err: reqwest::Error) -> ArenaError {
        if err.is_timeout() {
            ArenaError::RandomTimeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            ArenaError::RandomTransport(err)
        }
    }
}

#[async_trait]
impl RandomSource for RandomOrgSource {
    async fn sample(&self) -> Result<f64> {
        tracing::debug!(endpoint = %self.endpoint, "requesting random sample");

        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?
            .error_for_status()
            .map_err(ArenaError::RandomTransport)?;

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let payload = body.trim();
        payload.parse::<f64>().map_err(|_| ArenaError::RandomParse {
            payload: payload.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source_for(server: &MockServer, timeout: Duration) -> RandomOrgSource {
        RandomOrgSource::new(server.url("/decimal-fractions/"), timeout)
    }

    #[tokio::test]
    async fn test_sample_parses_decimal_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/decimal-fractions/");
            then.status(200).body("0.42\n");
        });

        let source = source_for(&server, DEFAULT_TIMEOUT);
        let value = source.sample().await.unwrap();

        mock.assert();
        assert!((value - 0.42).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_sample_rejects_non_numeric_payload() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/decimal-fractions/");
            then.status(200).body("invalid_response");
        });

        let source = source_for(&server, DEFAULT_TIMEOUT);
        let err = source.sample().await.unwrap_err();

        assert!(
            matches!(err, ArenaError::RandomParse { ref payload } if payload == "invalid_response")
        );
    }

    #[tokio::test]
    async fn test_sample_maps_server_error_to_transport() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/decimal-fractions/");
            then.status(500);
        });

        let source = source_for(&server, DEFAULT_TIMEOUT);
        let err = source.sample().await.unwrap_err();

        assert!(matches!(err, ArenaError::RandomTransport(_)));
    }

    #[tokio::test]
    async fn test_sample_maps_deadline_to_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/decimal-fractions/");
            then.status(200)
                .body("0.13")
                .delay(Duration::from_millis(500));
        });

        let source = source_for(&server, Duration::from_millis(50));
        let err = source.sample().await.unwrap_err();

        assert!(matches!(err, ArenaError::RandomTimeout { .. }));
    }
}
