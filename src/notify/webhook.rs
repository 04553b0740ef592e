use reqwest::Client;
use serde_json::json;

use crate::pipeline::SubmissionOutcome;
use crate::validate::WaitlistSubmission;

pub async fn post_summary(client: &Client, webhook_url: &str, text: &str) -> reqwest::Result<()> {
    client
        .post(webhook_url)
        .json(&json!({ "text": text }))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// Condensed one-message signup summary for the team channel, marking each
/// sink with its outcome.
pub fn summary_text(submission: &WaitlistSubmission, outcome: &SubmissionOutcome) -> String {
    format!(
        "🎉 *New Waitlist Signup*\n\
         *Restaurant:* {}\n\
         *Owner:* {}\n\
         *Location:* {}\n\
         *Type:* {}\n\
         *Email:* {}\n\
         *Phone:* {}\n\
         *Storage:* {} | {} | *Emails:* {} | {}",
        submission.restaurant_name,
        submission.owner_name,
        submission.location,
        submission.restaurant_type,
        submission.email,
        submission.phone,
        mark("Database", outcome.database),
        mark("File Backup", outcome.file_backup),
        mark("Welcome", outcome.welcome_email),
        mark("Admin", outcome.admin_email),
    )
}

fn mark(label: &str, ok: bool) -> String {
    format!("{} {}", label, if ok { "✅" } else { "❌" })
}
