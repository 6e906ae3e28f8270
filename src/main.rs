use anyhow::Context;
use carehub::config::AppConfig;
use tracing::Level;

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

fn load_bundled_config() {
    for line in BUNDLED_CONFIG.lines() {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            // Only set if not already set (allow env override)
            if std::env::var(key).is_err() {
                // SAFETY: We're setting env vars at startup before any threads are spawned
                unsafe {
                    std::env::set_var(key, value);
                }
            }
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let level = config
        .log_level
        .as_deref()
        .and_then(|raw| raw.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn main() -> anyhow::Result<()> {
    load_dotenv();
    let config = AppConfig::from_env().context("invalid CareHub configuration")?;
    init_tracing(&config);
    tracing::info!(
        auth_configured = config.auth_api_url.is_some(),
        "starting CareHub"
    );

    carehub::ui::install_config(config);
    dioxus::launch(carehub::ui::App);
    Ok(())
}
