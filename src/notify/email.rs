use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Serialize)]
pub struct OutboundEmail<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("email service not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("email service returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub async fn send(
    client: &Client,
    api_key: Option<&str>,
    email: &OutboundEmail<'_>,
) -> Result<(), NotifyError> {
    let api_key = api_key.ok_or(NotifyError::NotConfigured)?;

    let response = client
        .post(RESEND_API_URL)
        .bearer_auth(api_key)
        .json(email)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(NotifyError::Api { status, body });
    }

    let message_id = serde_json::from_str::<SendResponse>(&body)
        .ok()
        .and_then(|r| r.id)
        .unwrap_or_default();
    info!("email sent to {} (message id {})", email.to, message_id);

    Ok(())
}
