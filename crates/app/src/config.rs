/// Application configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Versioned base URL of the client-directory backend
    /// (default: `http://localhost:8080/api/v1`).
    pub gateway_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var       | Default                        |
    /// |---------------|--------------------------------|
    /// | `GATEWAY_URL` | `http://localhost:8080/api/v1` |
    pub fn from_env() -> Self {
        let gateway_url = std::env::var("GATEWAY_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api/v1".into());
        Self { gateway_url }
    }
}
