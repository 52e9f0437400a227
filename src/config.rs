use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind the HTTP server to, e.g. "localhost"
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Public base URL used when composing short URLs, e.g. "http://sho.rt"
    /// Must NOT have a trailing slash.
    pub base_url: String,

    /// Reject destinations that do not start with "http".
    /// Set VALIDATE_DESTINATION=false to accept any string.
    pub validate_destination: bool,

    /// Upper bound, in seconds, for draining in-flight requests on shutdown.
    pub shutdown_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables (populated by dotenvy before this is called).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. `from_env` is the
    /// production caller; tests pass a closure over a fixed map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "9090".into())
            .parse::<u16>()
            .context("PORT must be a valid port number (1–65535)")?;

        if port == 0 {
            anyhow::bail!("PORT must be a valid port number (1–65535), got 0");
        }

        let base_url = lookup("BASE_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_owned();

        if base_url.is_empty() {
            anyhow::bail!("BASE_URL must not be empty");
        }

        let validate_destination = match lookup("VALIDATE_DESTINATION") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("VALIDATE_DESTINATION must be a boolean, got '{raw}'"))?,
            None => true,
        };

        let shutdown_timeout_secs = lookup("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse::<u64>()
            .context("SHUTDOWN_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "localhost".into()),
            port,
            base_url,
            validate_destination,
            shutdown_timeout_secs,
        })
    }

    /// `host:port` string handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 9090,
            base_url: "http://localhost:9090".into(),
            validate_destination: true,
            shutdown_timeout_secs: 30,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
