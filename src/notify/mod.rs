mod email;
mod webhook;

pub use email::{NotifyError, OutboundEmail};

use reqwest::Client;
use std::time::Duration;
use tracing::error;

use crate::config::Config;
use crate::pipeline::SubmissionOutcome;
use crate::templates;
use crate::validate::WaitlistSubmission;

const WELCOME_FROM: &str = "BalaBite AI <hello@waitlist.balabite.ai>";
const ADMIN_FROM: &str = "BalaBite Waitlist <notifications@waitlist.balabite.ai>";
const WELCOME_SUBJECT: &str = "WELCOME TO THE FUTURE OF DINING";

/// Sends the three independent signup notifications. Every channel catches
/// its own failure; callers only see a per-channel bool.
#[derive(Clone)]
pub struct Notifier {
    client: Client,
    resend_api_key: Option<String>,
    admin_email: String,
    slack_webhook_url: Option<String>,
}

impl Notifier {
    pub fn from_config(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            resend_api_key: config.resend_api_key.clone(),
            admin_email: config.admin_email.clone(),
            slack_webhook_url: config.slack_webhook_url.clone(),
        }
    }

    pub async fn send_welcome(&self, submission: &WaitlistSubmission) -> bool {
        let html = templates::welcome_email(submission);
        let outbound = OutboundEmail {
            from: WELCOME_FROM,
            to: &submission.email,
            subject: WELCOME_SUBJECT,
            html: &html,
        };
        match email::send(&self.client, self.resend_api_key.as_deref(), &outbound).await {
            Ok(()) => true,
            Err(e) => {
                error!("welcome email to {} failed: {}", submission.email, e);
                false
            }
        }
    }

    pub async fn send_admin_alert(
        &self,
        submission: &WaitlistSubmission,
        submission_id: &str,
    ) -> bool {
        let subject = format!("New Waitlist Signup: {}", submission.restaurant_name);
        let html = templates::admin_notification(submission, submission_id);
        let outbound = OutboundEmail {
            from: ADMIN_FROM,
            to: &self.admin_email,
            subject: &subject,
            html: &html,
        };
        match email::send(&self.client, self.resend_api_key.as_deref(), &outbound).await {
            Ok(()) => true,
            Err(e) => {
                error!("admin alert for {} failed: {}", submission.restaurant_name, e);
                false
            }
        }
    }

    /// Posts the condensed summary to the team channel, only when a webhook
    /// is configured. The outcome of this post is logged and discarded.
    pub async fn post_chat_summary(
        &self,
        submission: &WaitlistSubmission,
        outcome: &SubmissionOutcome,
    ) {
        let Some(url) = self.slack_webhook_url.as_deref() else {
            return;
        };
        let text = webhook::summary_text(submission, outcome);
        if let Err(e) = webhook::post_summary(&self.client, url, &text).await {
            error!("chat webhook notification failed: {}", e);
        }
    }
}
