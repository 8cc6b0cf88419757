#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: String,      // 127.0.0.1:5000
    pub max_per_page: u32, // 100, 0 = unbounded
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: "127.0.0.1:5000".to_string(), max_per_page: 100 }
    }
}

impl ServerConfig {
    /// - EASYLAW_ADDR (default 127.0.0.1:5000)
    /// - EASYLAW_MAX_PER_PAGE (default 100; 0 disables the cap)
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(addr) = std::env::var("EASYLAW_ADDR") {
            let addr = addr.trim();
            if !addr.is_empty() {
                cfg.addr = addr.to_string();
            }
        }
        cfg.max_per_page = env_u32("EASYLAW_MAX_PER_PAGE", cfg.max_per_page);
        cfg
    }
}

fn env_u32(key: &str, default_val: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default_val)
}
