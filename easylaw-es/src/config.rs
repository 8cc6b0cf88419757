use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct EsConfig {
    pub host: String,     // https://localhost:9200
    pub username: String, // elastic
    pub password: String, // changeme

    /// false: accept any server certificate (self-signed dev clusters).
    /// true: verify against `ca_cert`, which must then be set.
    pub verify_certs: bool, // false
    pub ca_cert: Option<PathBuf>, // None

    /// Covers connect, request write and full response read.
    pub timeout_secs: u64, // 30
}

impl Default for EsConfig {
    fn default() -> Self {
        Self {
            host: "https://localhost:9200".to_string(),
            username: "elastic".to_string(),
            password: "changeme".to_string(),
            verify_certs: false,
            ca_cert: None,
            timeout_secs: 30,
        }
    }
}

impl EsConfig {
    /// - ELASTIC_HOST (default https://localhost:9200)
    /// - ELASTIC_USER (default elastic)
    /// - ELASTIC_PASSWORD (default changeme)
    /// - ELASTIC_VERIFY_CERTS (bool, default false)
    /// - ELASTIC_CA_CERT (optional PEM path)
    /// - ELASTIC_TIMEOUT_SECS (default 30)
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(host) = env_non_empty("ELASTIC_HOST") {
            cfg.host = host;
        }
        if let Some(user) = env_non_empty("ELASTIC_USER") {
            cfg.username = user;
        }
        if let Ok(password) = std::env::var("ELASTIC_PASSWORD") {
            cfg.password = password;
        }

        cfg.verify_certs = parse_env_bool("ELASTIC_VERIFY_CERTS", cfg.verify_certs);
        cfg.ca_cert = env_non_empty("ELASTIC_CA_CERT").map(PathBuf::from);
        cfg.timeout_secs = parse_env_u64("ELASTIC_TIMEOUT_SECS", cfg.timeout_secs);

        cfg
    }

    /// Host for log lines; never includes credentials.
    pub fn redacted_host(&self) -> String {
        match url::Url::parse(&self.host) {
            Ok(mut u) => {
                let _ = u.set_password(None);
                let _ = u.set_username("");
                u.to_string()
            }
            Err(_) => "<invalid url>".to_string(),
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| {
            let s = s.trim().to_ascii_lowercase();
            matches!(s.as_str(), "1" | "true" | "yes" | "on")
        })
        .unwrap_or(default)
}
