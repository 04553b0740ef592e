mod models;

pub use models::*;

use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::validate::WaitlistSubmission;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Why one credential tier could not produce a row.
#[derive(Debug, thiserror::Error)]
pub enum TierError {
    #[error("credentials not configured")]
    NotConfigured,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Both tiers failed; carries each tier's own failure reason.
#[derive(Debug, thiserror::Error)]
#[error("waitlist store unavailable (anon: {anon}; service: {service})")]
pub struct StoreUnavailable {
    pub anon: TierError,
    pub service: TierError,
}

/// Client for the durable waitlist store. Public-facing inserts go through
/// the restricted anon role first; the service role is the escape hatch and
/// the only tier allowed to read.
#[derive(Clone)]
pub struct Store {
    anon: Option<PgPool>,
    service: Option<PgPool>,
}

impl Store {
    pub fn from_config(config: &Config) -> Self {
        Self {
            anon: config.database_url.as_deref().and_then(|url| connect_tier(url, "anon")),
            service: config
                .database_service_url
                .as_deref()
                .and_then(|url| connect_tier(url, "service")),
        }
    }

    /// Applies the embedded schema when the service tier is configured.
    /// Startup never fails on a dead store; inserts will report it later.
    pub async fn run_startup_migrations(&self) {
        if let Some(pool) = &self.service {
            if let Err(e) = MIGRATOR.run(pool).await {
                tracing::warn!("startup schema migration failed: {}", e);
            }
        }
    }

    /// Ordered two-step attempt: anon tier first, then the service tier
    /// (after re-ensuring the schema) exactly once. Returns the
    /// store-assigned row id from whichever tier succeeded.
    pub async fn insert_submission(
        &self,
        submission: &WaitlistSubmission,
    ) -> Result<i64, StoreUnavailable> {
        let anon = match &self.anon {
            Some(pool) => match insert_waitlist_row(pool, submission).await {
                Ok(id) => return Ok(id),
                Err(e) => {
                    tracing::error!("anon-tier waitlist insert failed: {}", e);
                    TierError::Database(e)
                }
            },
            None => TierError::NotConfigured,
        };

        let service = match &self.service {
            Some(pool) => {
                if let Err(e) = MIGRATOR.run(pool).await {
                    tracing::warn!("waitlist schema check failed: {}", e);
                }
                match insert_waitlist_row(pool, submission).await {
                    Ok(id) => return Ok(id),
                    Err(e) => {
                        tracing::error!("service-tier waitlist insert failed: {}", e);
                        TierError::Database(e)
                    }
                }
            }
            None => TierError::NotConfigured,
        };

        Err(StoreUnavailable { anon, service })
    }

    pub async fn find_guest_entry(
        &self,
        email: &str,
    ) -> Result<Option<GuestWaitlistRow>, TierError> {
        let pool = self.service_pool()?;
        let entry = sqlx::query_as::<_, GuestWaitlistRow>(
            "SELECT id, email, signed_up_at FROM guest_waitlist WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;
        Ok(entry)
    }

    pub async fn insert_guest_entry(&self, email: &str) -> Result<(), TierError> {
        let pool = self.service_pool()?;
        sqlx::query("INSERT INTO guest_waitlist (email, signed_up_at) VALUES ($1, $2)")
            .bind(email)
            .bind(Utc::now())
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn count_waitlist(&self) -> Result<i64, TierError> {
        let pool = self.service_pool()?;
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM waitlist")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    fn service_pool(&self) -> Result<&PgPool, TierError> {
        self.service.as_ref().ok_or(TierError::NotConfigured)
    }
}

fn connect_tier(url: &str, tier: &str) -> Option<PgPool> {
    match PgPoolOptions::new().max_connections(5).connect_lazy(url) {
        Ok(pool) => Some(pool),
        Err(e) => {
            tracing::error!("invalid {} database url: {}", tier, e);
            None
        }
    }
}

async fn insert_waitlist_row(
    pool: &PgPool,
    submission: &WaitlistSubmission,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO waitlist
            (restaurant_name, owner_name, email, phone, restaurant_type, location, message, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'new')
        RETURNING id
        "#,
    )
    .bind(&submission.restaurant_name)
    .bind(&submission.owner_name)
    .bind(&submission.email)
    .bind(&submission.phone)
    .bind(&submission.restaurant_type)
    .bind(&submission.location)
    .bind(&submission.message)
    .fetch_one(pool)
    .await
}
