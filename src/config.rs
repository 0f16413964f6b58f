use clap::Parser;
use once_cell::sync::Lazy;

/// Certificate number prefix, e.g. CERT-2026-004217.
pub const CERTIFICATE_PREFIX: &str = "CERT";

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,

    #[clap(long, env, default_value_t = true)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env)]
    pub database_url: String,

    #[clap(long, env, default_value = "*")]
    pub cors_allowed_origins: String,

    /// Comma-separated list of demo account emails whose data the
    /// demo-reset endpoint is allowed to wipe.
    #[clap(long, env, default_value = "")]
    pub demo_emails: String,

    #[clap(long, env, default_value_t = false)]
    pub seed_demo_data: bool,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}

impl Config {
    pub fn demo_email_list(&self) -> Vec<String> {
        self.demo_emails
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_demo_emails(demo_emails: &str) -> Config {
        Config {
            port: 8080,
            swagger_enabled: false,
            log_level: "info".to_string(),
            database_url: "postgres://localhost/elearn".to_string(),
            cors_allowed_origins: "*".to_string(),
            demo_emails: demo_emails.to_string(),
            seed_demo_data: false,
            app_env: "test".to_string(),
        }
    }

    #[test]
    fn demo_email_list_splits_and_normalizes() {
        let config = config_with_demo_emails(" Demo@Example.com , student@example.com ,");
        assert_eq!(
            config.demo_email_list(),
            vec!["demo@example.com".to_string(), "student@example.com".to_string()]
        );
    }

    #[test]
    fn demo_email_list_empty_when_unset() {
        let config = config_with_demo_emails("");
        assert!(config.demo_email_list().is_empty());
    }
}
