//! Service configuration: TOML file with environment variable overrides.

use serde::Deserialize;
use std::fs;
use tracing::{info, warn};

#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct PermissionsConfig {
    /// Whether the multiply operation is granted. Multiply is the only
    /// permission-gated operation.
    #[serde(default = "default_true")]
    pub allow_multiply: bool,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self { allow_multiply: default_true() }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CalcConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub permissions: PermissionsConfig,
}

impl CalcConfig {
    pub fn load() -> Self {
        let config_path =
            std::env::var("CALC_CONFIG_PATH").unwrap_or_else(|_| "calc.toml".to_string());

        let config_str = fs::read_to_string(&config_path).unwrap_or_else(|_| {
            warn!(
                "Configuration file '{}' not found. Using default configuration.",
                config_path
            );
            // Default config string so a missing file never aborts startup.
            r#"[server]
host = "127.0.0.1"
port = 3000
[permissions]
allow_multiply = true
"#
            .to_string()
        });

        toml::from_str(&config_str).expect("Failed to parse configuration file.")
    }

    pub fn apply_profile(mut self) -> Self {
        info!("Applying environment overrides to configuration.");

        if let Ok(host) = std::env::var("CALC_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("CALC_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                self.server.port = port_num;
            }
        }
        if let Ok(allow) = std::env::var("CALC_ALLOW_MULTIPLY") {
            if let Ok(allow_bool) = allow.parse::<bool>() {
                self.permissions.allow_multiply = allow_bool;
            }
        }

        self
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_true() -> bool {
    true
}
