use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct GuestWaitlistRow {
    pub id: i64,
    pub email: String,
    pub signed_up_at: DateTime<Utc>,
}
