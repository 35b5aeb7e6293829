use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Set when `JWT_SECRET` was absent and a per-process secret was generated.
    pub ephemeral_jwt_secret: bool,
    pub access_token_ttl_minutes: i64,
    pub host: IpAddr,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_upload_size: usize,
    pub log_level: String,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite://stitch.db?mode=rwc");

        let (jwt_secret, ephemeral_jwt_secret) = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => (secret, false),
            _ => (random_secret(), true),
        };

        let access_token_ttl_minutes: i64 = env_or("ACCESS_TOKEN_TTL_MINUTES", "30")
            .parse()
            .map_err(|e| format!("Invalid ACCESS_TOKEN_TTL_MINUTES: {e}"))?;

        let host: IpAddr = env_or("STITCH_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid STITCH_HOST: {e}"))?;

        let port: u16 = env_or("STITCH_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid STITCH_PORT: {e}"))?;

        let upload_dir = PathBuf::from(env_or("STITCH_UPLOAD_DIR", "uploads"));

        let max_upload_size: usize = env_or("STITCH_MAX_UPLOAD_SIZE", "10485760")
            .parse()
            .map_err(|e| format!("Invalid STITCH_MAX_UPLOAD_SIZE: {e}"))?;

        let log_level = env_or("STITCH_LOG_LEVEL", "info");

        let timeout_secs: u64 = env_or("AI_TIMEOUT_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid AI_TIMEOUT_SECS: {e}"))?;

        let gemini = GeminiConfig {
            api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
                .filter(|k| !k.is_empty()),
            model: env_or("GEMINI_MODEL", "gemini-flash-latest"),
            base_url: env_or(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com/v1beta",
            ),
            timeout_secs,
        };

        Ok(Config {
            database_url,
            jwt_secret,
            ephemeral_jwt_secret,
            access_token_ttl_minutes,
            host,
            port,
            upload_dir,
            max_upload_size,
            log_level,
            gemini,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn random_secret() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}
