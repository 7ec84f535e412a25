use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Insert sample projects into an empty database at startup.
    pub seed_sample_data: bool,
    /// Admin login and write-endpoint guard.
    pub admin: AdminConfig,
    /// JWT signing configuration for admin tokens.
    pub jwt: JwtConfig,
}

/// Admin credentials and enforcement switch.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// When `false`, write endpoints accept requests without a token.
    pub require_auth: bool,
    pub username: String,
    /// Argon2id PHC hash. `None` disables the login endpoint.
    pub password_hash: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `DB_MAX_CONNECTIONS`   | `10`      |
    /// | `SEED_SAMPLE_DATA`     | `false`   |
    /// | `REQUIRE_ADMIN_AUTH`   | `false`   |
    /// | `ADMIN_USERNAME`       | `admin`   |
    /// | `ADMIN_PASSWORD_HASH`  | unset     |
    ///
    /// JWT variables are documented on [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| virasat_db::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let seed_sample_data = env_flag("SEED_SAMPLE_DATA");
        let require_auth = env_flag("REQUIRE_ADMIN_AUTH");

        let admin = AdminConfig {
            require_auth,
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            password_hash: std::env::var("ADMIN_PASSWORD_HASH")
                .ok()
                .filter(|h| !h.is_empty()),
        };

        let jwt = JwtConfig::from_env(require_auth);

        Self {
            host,
            port,
            request_timeout_secs,
            db_max_connections,
            seed_sample_data,
            admin,
            jwt,
        }
    }
}

/// Read a boolean flag. Accepts `1`, `true`, `yes` (any case) as true.
fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
