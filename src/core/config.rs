use dotenv::dotenv;
use jsonwebtoken::Algorithm;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub access_token_expire_minutes: i64,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Loads the configuration from environment variables.
    /// Calls dotenv() automatically.
    ///
    /// A missing `JWT_SECRET` is a hard error: starting with a baked-in
    /// fallback secret would make every deployment sign with the same key.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env file".to_string())?;

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set; refusing to start without a signing secret".to_string())?;

        let jwt_algorithm = env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string());
        let jwt_algorithm = Algorithm::from_str(&jwt_algorithm)
            .map_err(|_| format!("Invalid JWT_ALGORITHM: unknown algorithm '{jwt_algorithm}'"))?;
        if !matches!(
            jwt_algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err("Invalid JWT_ALGORITHM: only HMAC algorithms are supported".to_string());
        }

        let access_token_expire_minutes = env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<i64>()
            .ok()
            .filter(|minutes| *minutes > 0)
            .ok_or_else(|| {
                "Invalid ACCESS_TOKEN_EXPIRE_MINUTES: must be a positive number".to_string()
            })?;

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "16".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN").ok();

        Ok(Config {
            database_url,
            jwt_secret,
            jwt_algorithm,
            access_token_expire_minutes,
            server_host,
            server_port,
            max_connections,
            cors_allowed_origin,
        })
    }

    /// Logs the configuration (hiding the secrets)
    pub fn print_info(&self) {
        tracing::info!("Server Configuration:");
        tracing::info!(
            "  Server Address: {}:{}",
            self.server_host,
            self.server_port
        );
        tracing::info!("  Database: {}", Self::mask_url(&self.database_url));
        tracing::info!("  Max DB Connections: {}", self.max_connections);
        tracing::info!("  Token Algorithm: {:?}", self.jwt_algorithm);
        tracing::info!(
            "  Token Lifetime: {} minutes",
            self.access_token_expire_minutes
        );
        tracing::info!("  JWT Secret: configured ({} bytes)", self.jwt_secret.len());
    }

    /// Masks credentials embedded in the database URL for logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        url.to_string()
    }
}
