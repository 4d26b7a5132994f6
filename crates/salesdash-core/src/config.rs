/// Runtime configuration, environment-driven.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the sales API, no trailing path.
    pub api_url: String,
    /// Reporting window length in days, ending today.
    pub window_days: u32,
    /// Initial table page size; must be one of [`PAGE_SIZES`].
    pub page_size: usize,
    pub http_timeout_secs: u64,
}

/// Page sizes the table offers. Fixed set, default 10.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let page_size: usize = std::env::var("SALESDASH_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| format!("invalid SALESDASH_PAGE_SIZE: {e}"))?;
        if !PAGE_SIZES.contains(&page_size) {
            return Err(format!(
                "SALESDASH_PAGE_SIZE must be one of {PAGE_SIZES:?}, got {page_size}"
            ));
        }

        Ok(Self {
            api_url: std::env::var("SALESDASH_API_URL")
                .unwrap_or_else(|_| "https://6662e35462966e20ef0a74bb.mockapi.io".to_string()),
            window_days: std::env::var("SALESDASH_WINDOW_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .map_err(|e| format!("invalid SALESDASH_WINDOW_DAYS: {e}"))?,
            page_size,
            http_timeout_secs: std::env::var("SALESDASH_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://6662e35462966e20ef0a74bb.mockapi.io".to_string(),
            window_days: 7,
            page_size: 10,
            http_timeout_secs: 10,
        }
    }
}
