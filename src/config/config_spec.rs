use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::errors::ApplicationError;

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub env_override: Option<String>,
    pub default_value: Option<String>,
    pub min_length: Option<usize>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Load a setting value
    ///
    /// The environment variable wins over the default. Both are validated.
    pub fn load_setting(&self) -> Result<String, ApplicationError> {
        let setting_name = self.setting_name();

        if let Some(value) = self
            .env_override
            .as_deref()
            .and_then(|env_var| self.env_provider.get_var(env_var))
        {
            self.validate_value(&value, &setting_name)?;
            return Ok(value);
        }

        match &self.default_value {
            Some(value) => {
                self.validate_value(value, &setting_name)?;
                Ok(value.clone())
            }
            None => Err(ApplicationError::InvalidSetting {
                setting_name,
                reason: "Required setting is missing".to_string(),
            }),
        }
    }

    /// Validate a setting value according to the ConfigSpec rules
    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("Value must be at least {} characters long", min_len),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    fn setting_name(&self) -> String {
        self.env_override
            .clone()
            .unwrap_or_else(|| "unnamed_setting".to_string())
    }
}

/// Parsing and validation utilities for configuration values
impl ConfigSpec {
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value.trim().parse::<u16>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected port number (1-65535), got '{}': {}", value, e),
            })?;

        if port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }

    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value.parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    /// Validate a host address (IPv4, bracketed IPv6, or hostname)
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value.starts_with('[') {
            let inner = value.strip_prefix('[').and_then(|v| v.strip_suffix(']'));
            return match inner {
                Some(ipv6) if ipv6.contains(':') => Ok(()),
                _ => Err("Invalid IPv6 address format".to_string()),
            };
        }

        if value.chars().any(char::is_whitespace) {
            return Err("Host address cannot contain whitespace characters".to_string());
        }

        let parts: Vec<&str> = value.split('.').collect();
        if parts.len() == 4 && parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit())) {
            for part in parts {
                if part.parse::<u16>().map_or(true, |octet| octet > 255) {
                    return Err(format!("IPv4 address part must be between 0-255, got {}", part));
                }
            }
        }

        Ok(())
    }

    /// Validate an HTTP path prefix such as "/api/v1"
    pub fn validate_path_prefix(value: &str) -> Result<(), String> {
        if !value.starts_with('/') {
            return Err("Path prefix must start with '/'".to_string());
        }
        if value == "/" {
            return Err("Path prefix must name at least one segment".to_string());
        }
        if value.ends_with('/') {
            return Err("Path prefix must not end with '/'".to_string());
        }
        if value.chars().any(char::is_whitespace) {
            return Err("Path prefix cannot contain whitespace characters".to_string());
        }
        Ok(())
    }
}
