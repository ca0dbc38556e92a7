//! EmailJS Client
//!
//! Sends a templated email through the EmailJS REST API. The request
//! carries the service, template and public key plus the template
//! variables; a 2xx response means EmailJS accepted the email.

use giftbox_common::config::EmailJsConfig;
use giftbox_common::delivery::{DeliveryFailure, DeliveryReceipt, TemplateParams};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("request to EmailJS failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("EmailJS rejected the email (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl From<DeliveryError> for DeliveryFailure {
    fn from(err: DeliveryError) -> Self {
        DeliveryFailure::new(err.to_string())
    }
}

/// JSON body expected by `/api/v1.0/email/send`
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

pub struct EmailJsClient {
    http: Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self, DeliveryError> {
        let http = Client::builder()
            .user_agent(concat!("giftbox/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: Client, config: EmailJsConfig) -> Self {
        Self { http, config }
    }

    /// Send one email. Resolves once EmailJS answers.
    pub async fn send(&self, params: &TemplateParams) -> Result<DeliveryReceipt, DeliveryError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
            access_token: self.config.private_key.as_deref(),
        };

        debug!(endpoint = %self.config.endpoint, "posting email to EmailJS");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(DeliveryReceipt {
            status: status.as_u16(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const SEND_PATH: &str = "/api/v1.0/email/send";

    fn config(server: &mockito::Server) -> EmailJsConfig {
        EmailJsConfig {
            public_key: "pk_test".to_string(),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            private_key: None,
            endpoint: format!("{}{}", server.url(), SEND_PATH),
        }
    }

    fn params() -> TemplateParams {
        TemplateParams {
            to_email: "x@y.com".to_string(),
            from_name: "Sam".to_string(),
            message: "Sending you love and warm wishes! 💝".to_string(),
            gifts: "🌹 Rose, 🎂 Cake".to_string(),
        }
    }

    #[tokio::test]
    async fn send_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", SEND_PATH)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "pk_test",
                "template_params": {
                    "to_email": "x@y.com",
                    "from_name": "Sam",
                    "message": "Sending you love and warm wishes! 💝",
                    "gifts": "🌹 Rose, 🎂 Cake"
                }
            })))
            .with_status(200)
            .with_body("OK")
            .create_async()
            .await;

        let client = EmailJsClient::new(config(&server)).unwrap();
        let receipt = client.send(&params()).await.unwrap();

        assert_eq!(receipt, DeliveryReceipt { status: 200, text: "OK".to_string() });
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_includes_access_token_when_configured() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", SEND_PATH)
            .match_body(Matcher::PartialJson(serde_json::json!({
                "accessToken": "private_test"
            })))
            .with_status(200)
            .with_body("OK")
            .create_async()
            .await;

        let mut config = config(&server);
        config.private_key = Some("private_test".to_string());
        let client = EmailJsClient::new(config).unwrap();

        client.send(&params()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", SEND_PATH)
            .with_status(400)
            .with_body("The template ID is invalid")
            .create_async()
            .await;

        let client = EmailJsClient::new(config(&server)).unwrap();
        let err = client.send(&params()).await.unwrap_err();

        match &err {
            DeliveryError::Rejected { status, body } => {
                assert_eq!(*status, 400);
                assert_eq!(body, "The template ID is invalid");
            }
            other => panic!("Expected Rejected, got {other:?}"),
        }

        let failure = DeliveryFailure::from(err);
        assert!(failure.reason.contains("HTTP 400"));
    }

    #[tokio::test]
    async fn send_network_failure() {
        let config = EmailJsConfig {
            endpoint: "http://127.0.0.1:1/api/v1.0/email/send".to_string(),
            ..EmailJsConfig::default()
        };

        let client = EmailJsClient::new(config).unwrap();
        let err = client.send(&params()).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Http(_)));
    }
}
