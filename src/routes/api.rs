use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::pipeline;
use crate::state::AppState;
use crate::validate::{self, RawSubmission};

/// Fixed offset added to the stored row count for display; also the
/// fallback value when the store is unreachable.
const DISPLAY_COUNT_BASE: i64 = 120;

pub async fn join_waitlist(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<RawSubmission>,
) -> impl IntoResponse {
    match pipeline::process_submission(&state, &raw).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Successfully joined the waitlist",
                "storage": {
                    "database": outcome.database,
                    "fileBackup": outcome.file_backup,
                },
                "emails": {
                    "welcome": outcome.welcome_email,
                    "admin": outcome.admin_email,
                },
                "id": outcome.id,
            })),
        ),
        Err(details) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Validation failed",
                "details": details,
            })),
        ),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GuestSignup {
    #[serde(default)]
    pub email: Option<String>,
}

pub async fn join_guest_waitlist(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GuestSignup>,
) -> impl IntoResponse {
    let email = body.email.as_deref().unwrap_or("").trim().to_string();
    if !validate::is_valid_email(&email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid email address" })),
        );
    }

    // A failed lookup falls through to the insert, which reports its own
    // error; a duplicate is a success, not a second record.
    match state.store.find_guest_entry(&email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::OK,
                Json(json!({ "message": "You're already on our waitlist!" })),
            );
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!("guest waitlist lookup failed: {}", e);
        }
    }

    match state.store.insert_guest_entry(&email).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Successfully joined the guest app waitlist!" })),
        ),
        Err(e) => {
            tracing::error!("guest waitlist insert failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to join waitlist" })),
            )
        }
    }
}

pub async fn restaurant_count(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let count = match state.store.count_waitlist().await {
        Ok(count) => count + DISPLAY_COUNT_BASE,
        Err(e) => {
            tracing::error!("restaurant count query failed: {}", e);
            DISPLAY_COUNT_BASE
        }
    };
    Json(json!({ "count": count }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::Store;
    use crate::notify::Notifier;

    fn offline_state(backup_dir: std::path::PathBuf) -> Arc<AppState> {
        let config = Arc::new(Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: None,
            database_service_url: None,
            resend_api_key: None,
            admin_email: "admin@balabite.ai".to_string(),
            slack_webhook_url: None,
            backup_dir,
        });
        Arc::new(AppState {
            store: Store::from_config(&config),
            notifier: Notifier::from_config(&config),
            config,
        })
    }

    #[tokio::test]
    async fn invalid_submission_gets_a_400() {
        let dir = tempfile::tempdir().unwrap();
        let state = offline_state(dir.path().join("backups"));

        let raw = RawSubmission {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        let response = join_waitlist(State(state), Json(raw)).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn guest_signup_rejects_bad_email() {
        let dir = tempfile::tempdir().unwrap();
        let state = offline_state(dir.path().join("backups"));

        let body = GuestSignup {
            email: Some("nope".to_string()),
        };
        let response = join_guest_waitlist(State(state), Json(body))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn count_falls_back_when_store_is_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let state = offline_state(dir.path().join("backups"));

        let response = restaurant_count(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["count"], DISPLAY_COUNT_BASE);
    }
}
