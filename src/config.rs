use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub blockfrost: BlockfrostConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BlockfrostConfig {
    /// Blockfrost project id. When absent the engine runs entirely on the
    /// deterministic synthetic data source.
    pub project_id: Option<String>,
    #[serde(default = "default_network")]
    pub network: String,
    /// Overrides the per-network endpoint, e.g. for a self-hosted
    /// Blockfrost instance.
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BlockfrostConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            network: default_network(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_network() -> String {
    "mainnet".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_api_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
        }
    }
}

fn default_api_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    8000
}

const KNOWN_NETWORKS: &[&str] = &["mainnet", "preprod", "preview"];

impl Config {
    pub fn load(path: &str) -> eyre::Result<Self> {
        // A missing file is fine: defaults plus the env override are enough
        // to run (synthetic mode needs no configuration at all).
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str::<Config>(&content)
                .map_err(|e| eyre::eyre!("Failed to parse config file '{}': {}", path, e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Config file '{}' not found, using defaults", path);
                Config::default()
            }
            Err(e) => {
                return Err(eyre::eyre!("Failed to read config file '{}': {}", path, e));
            }
        };

        // The env var wins over the file so deployments can keep the
        // credential out of the config. Resolved once, here, so nothing
        // downstream reads the environment.
        if let Ok(project_id) = std::env::var("BLOCKFROST_PROJECT_ID") {
            if !project_id.is_empty() {
                config.blockfrost.project_id = Some(project_id);
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> eyre::Result<()> {
        if !KNOWN_NETWORKS.contains(&self.blockfrost.network.as_str()) {
            return Err(eyre::eyre!(
                "Unknown Cardano network '{}', expected one of {:?}",
                self.blockfrost.network,
                KNOWN_NETWORKS
            ));
        }
        if self.blockfrost.timeout_secs == 0 {
            return Err(eyre::eyre!("blockfrost.timeout_secs must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
[blockfrost]
project_id = "mainnetabc123"
network = "preprod"
timeout_secs = 5

[api]
host = "127.0.0.1"
port = 9000
"#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.blockfrost.project_id.as_deref(),
            Some("mainnetabc123")
        );
        assert_eq!(config.blockfrost.network, "preprod");
        assert_eq!(config.blockfrost.timeout_secs, 5);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 9000);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.blockfrost.project_id.is_none());
        assert_eq!(config.blockfrost.network, "mainnet"); // default
        assert_eq!(config.blockfrost.timeout_secs, 15); // default
        assert_eq!(config.api.port, 8000); // default
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_network() {
        let config = Config {
            blockfrost: BlockfrostConfig {
                project_id: None,
                network: "testnet".to_string(),
                base_url: None,
                timeout_secs: 15,
            },
            api: ApiConfig::default(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = Config {
            blockfrost: BlockfrostConfig {
                project_id: None,
                network: "mainnet".to_string(),
                base_url: None,
                timeout_secs: 0,
            },
            api: ApiConfig::default(),
        };
        assert!(config.validate().is_err());
    }
}
