use std::fmt;
use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;

/// Bootstrap settings for infrastructure configuration
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    api_prefix: String,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let database_url_spec = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://checkouts.db?mode=rwc")
            .min_length(1);

        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let api_prefix_spec = ConfigSpec::new(env_provider)
            .env_override("API_PREFIX")
            .default_value("/api/v1")
            .validator(ConfigSpec::validate_path_prefix);

        let database_url = database_url_spec.load_setting()?;
        let server_host = host_spec.load_setting()?;
        let port_value = port_spec.load_setting()?;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;
        let api_prefix = api_prefix_spec.load_setting()?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            api_prefix,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Path every resource route is nested under
    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("api_prefix", &self.api_prefix)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;
    use std::collections::HashMap;

    fn create_test_env(vars: HashMap<String, String>) -> Arc<MockEnvironment> {
        Arc::new(MockEnvironment::new(vars))
    }

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env_vars = HashMap::from([
            ("DATABASE_URL".to_string(), "sqlite://test.db".to_string()),
            ("HOST".to_string(), "127.0.0.1".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("API_PREFIX".to_string(), "/api/v2".to_string()),
        ]);
        let settings = BootstrapSettings::from_env_provider(create_test_env(env_vars)).unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_host(), "127.0.0.1");
        assert_eq!(settings.server_port(), 8080);
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert_eq!(settings.api_prefix(), "/api/v2");
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings = BootstrapSettings::from_env_provider(create_test_env(HashMap::new())).unwrap();

        assert_eq!(settings.database_url(), "sqlite://checkouts.db?mode=rwc");
        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 3000);
        assert_eq!(settings.server_address(), "0.0.0.0:3000");
        assert_eq!(settings.api_prefix(), "/api/v1");
    }

    #[test]
    fn test_bootstrap_settings_empty_database_url_fails_validation() {
        let env_vars = HashMap::from([("DATABASE_URL".to_string(), "".to_string())]);

        match BootstrapSettings::from_env_provider(create_test_env(env_vars)) {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "DATABASE_URL");
                assert!(reason.contains("must be at least 1 characters long"));
            }
            other => panic!("Expected InvalidSetting for DATABASE_URL, got: {:?}", other),
        }
    }

    #[test]
    fn test_bootstrap_settings_empty_host_fails_validation() {
        let env_vars = HashMap::from([("HOST".to_string(), "".to_string())]);

        match BootstrapSettings::from_env_provider(create_test_env(env_vars)) {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "HOST");
                assert!(reason.contains("cannot be empty"));
            }
            other => panic!("Expected InvalidSetting for HOST, got: {:?}", other),
        }
    }

    #[test]
    fn test_bootstrap_settings_invalid_port() {
        let env_vars = HashMap::from([("PORT".to_string(), "not_a_number".to_string())]);

        match BootstrapSettings::from_env_provider(create_test_env(env_vars)) {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "PORT");
                assert!(reason.contains("Expected port number between 1 and 65535"));
            }
            other => panic!("Expected InvalidSetting for PORT, got: {:?}", other),
        }
    }

    #[test]
    fn test_bootstrap_settings_zero_port() {
        let env_vars = HashMap::from([("PORT".to_string(), "0".to_string())]);

        match BootstrapSettings::from_env_provider(create_test_env(env_vars)) {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "PORT");
                assert!(reason.contains("outside valid range"));
            }
            _ => panic!("Expected InvalidSetting error for zero PORT"),
        }
    }

    #[test]
    fn test_bootstrap_settings_prefix_without_leading_slash() {
        let env_vars = HashMap::from([("API_PREFIX".to_string(), "api".to_string())]);

        match BootstrapSettings::from_env_provider(create_test_env(env_vars)) {
            Err(ApplicationError::InvalidSetting { setting_name, .. }) => {
                assert_eq!(setting_name, "API_PREFIX");
            }
            other => panic!("Expected InvalidSetting for API_PREFIX, got: {:?}", other),
        }
    }
}
