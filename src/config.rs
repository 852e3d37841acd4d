//! Server configuration
//!
//! Everything is driven by environment variables so deployments stay
//! container-friendly. The config is resolved once and cached for the
//! lifetime of the process.

use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Overrides the directory holding bookmarks and the session file.
pub const DATA_DIR_ENV: &str = "CRYPTOHUB_DATA_DIR";

/// When enabled, a demo identity is seeded at startup so the signed-in
/// surfaces can be exercised without the external sign-in flow.
pub const DEMO_USER_ENV: &str = "CRYPTOHUB_DEMO_USER";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub demo_user: bool,
}

impl AppConfig {
    fn from_env() -> Self {
        let data_dir = std::env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());
        let demo_user = std::env::var(DEMO_USER_ENV)
            .map(|v| flag_enabled(&v))
            .unwrap_or(false);

        AppConfig {
            data_dir,
            demo_user,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crypto-insight-hub")
}

fn flag_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn get() -> &'static AppConfig {
    &CONFIG
}
