//! Application settings read from environment variables.

use chrono::Duration;
use log::warn;
use std::str::FromStr;

use crate::tournament::DEFAULT_BONUS_POINTS_PER_MATCH;

const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port for the web server
    pub port: u16,
    /// Password expected in the `X-Admin-Password` header
    pub admin_password: String,
    /// How long a tournament stays available after creation
    pub tournament_ttl_hours: i64,
    /// Bonus points per match when a request does not name a value
    pub bonus_points_per_match: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: 8080,
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            tournament_ttl_hours: 24,
            bonus_points_per_match: DEFAULT_BONUS_POINTS_PER_MATCH,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `PORT`, `ADMIN_PASSWORD`, `TOURNAMENT_TTL_HOURS`
    /// and `BONUS_POINTS_PER_MATCH`, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            warn!("ADMIN_PASSWORD not set, using the default password");
            defaults.admin_password.clone()
        });

        AppConfig {
            port: parse_env_or("PORT", defaults.port),
            admin_password,
            tournament_ttl_hours: parse_env_or("TOURNAMENT_TTL_HOURS", defaults.tournament_ttl_hours),
            bonus_points_per_match: parse_env_or("BONUS_POINTS_PER_MATCH", defaults.bonus_points_per_match),
        }
    }

    /// Overrides the port, e.g. from the command line
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn tournament_ttl(&self) -> Duration {
        Duration::hours(self.tournament_ttl_hours.max(1))
    }
}

fn parse_env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid value for {}: {}", key, value);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bonus_points_per_match, 43);
        assert_eq!(config.tournament_ttl(), Duration::hours(24));
    }

    #[test]
    fn test_with_port() {
        assert_eq!(AppConfig::default().with_port(Some(9000)).port, 9000);
        assert_eq!(AppConfig::default().with_port(None).port, 8080);
    }

    #[test]
    fn test_ttl_at_least_one_hour() {
        let config = AppConfig { tournament_ttl_hours: 0, ..AppConfig::default() };
        assert_eq!(config.tournament_ttl(), Duration::hours(1));
    }

    #[test]
    fn test_parse_env_or_falls_back() {
        assert_eq!(parse_env_or("JASS_TEST_SURELY_UNSET_VAR", 7u32), 7);
    }
}
