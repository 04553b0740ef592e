use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Low-privilege ("anon") connection string, used for public-facing inserts.
    pub database_url: Option<String>,
    /// Elevated ("service") connection string, used as fallback and for admin reads.
    pub database_service_url: Option<String>,
    pub resend_api_key: Option<String>,
    pub admin_email: String,
    pub slack_webhook_url: Option<String>,
    pub backup_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").ok();
        let database_service_url = std::env::var("DATABASE_SERVICE_URL").ok();
        if database_url.is_none() && database_service_url.is_none() {
            tracing::warn!(
                "no database credentials configured; submissions will only reach the file backup"
            );
        }

        let resend_api_key = std::env::var("RESEND_API_KEY").ok();
        if resend_api_key.is_none() {
            tracing::warn!("RESEND_API_KEY not set; outbound email is disabled");
        }

        let admin_email = std::env::var("ADMIN_EMAIL")
            .unwrap_or_else(|_| "admin@balabite.ai".to_string());

        let slack_webhook_url = std::env::var("SLACK_WEBHOOK_URL").ok();

        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let backup_dir = base_dir.join(
            std::env::var("BACKUP_DIR").unwrap_or_else(|_| "waitlist-data".to_string()),
        );

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse()
            .unwrap_or(5001);

        Ok(Self {
            host,
            port,
            database_url,
            database_service_url,
            resend_api_key,
            admin_email,
            slack_webhook_url,
            backup_dir,
        })
    }
}
