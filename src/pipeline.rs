use serde::Serialize;
use tracing::{error, info};

use crate::state::AppState;
use crate::storage;
use crate::validate::{self, RawSubmission, ValidationErrors};

/// Per-sink result of one submission. Sinks are independent; a `false` here
/// is already logged server-side and never aborted the others.
#[derive(Debug, Serialize)]
pub struct SubmissionOutcome {
    pub file_backup: bool,
    pub database: bool,
    pub welcome_email: bool,
    pub admin_email: bool,
    pub id: String,
}

/// Runs one submission through validation and the sink fan-out. Validation
/// failure is terminal and performs zero side effects; everything after it is
/// best-effort and always runs to completion.
pub async fn process_submission(
    state: &AppState,
    raw: &RawSubmission,
) -> Result<SubmissionOutcome, ValidationErrors> {
    let submission = validate::validate(raw)?;

    let mut submission_id = storage::generate_submission_id();

    // The file backup goes first: it is the record of last resort when the
    // store and email service are both down.
    let file_backup =
        match storage::save_submission_to_file(&state.config.backup_dir, &submission) {
            Ok(path) => {
                info!("file backup written to {}", path.display());
                true
            }
            Err(e) => {
                error!("file backup failed: {}", e);
                false
            }
        };

    let database = match state.store.insert_submission(&submission).await {
        Ok(id) => {
            submission_id = id.to_string();
            true
        }
        Err(e) => {
            error!("all waitlist insert attempts failed: {}", e);
            false
        }
    };

    let welcome_email = state.notifier.send_welcome(&submission).await;
    let admin_email = state
        .notifier
        .send_admin_alert(&submission, &submission_id)
        .await;

    let outcome = SubmissionOutcome {
        file_backup,
        database,
        welcome_email,
        admin_email,
        id: submission_id,
    };

    state.notifier.post_chat_summary(&submission, &outcome).await;

    Ok(outcome)
}
