use {
    crate::house::service,
    anyhow::Result,
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    std::fs,
};

mod server;

// `Options` is a structure definition to provide clean command-line args for the server.
#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction house server service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub config: ConfigOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Config Options")]
#[group(id = "Config")]
pub struct ConfigOptions {
    /// Path to a configuration file containing the auction rules and the houses to create at startup
    #[arg(long = "config")]
    #[arg(env = "AUCTION_HOUSE_CONFIG")]
    #[arg(default_value = "config.yaml")]
    pub config: String,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rules:  RulesConfig,
    /// Auction houses created when the server starts.
    #[serde(default)]
    pub houses: Vec<SeedHouseConfig>,
}

impl Config {
    pub fn load(path: &str) -> Result<Config> {
        let yaml_content = fs::read_to_string(path)?;
        Self::parse(&yaml_content)
    }

    fn parse(yaml_content: &str) -> Result<Config> {
        let config: Config = serde_yaml::from_str(yaml_content)?;
        Ok(config)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RulesConfig {
    /// Reject status updates on DELETED auctions, the same way TERMINATED auctions are frozen.
    #[serde(default = "default_deleted_is_final")]
    pub deleted_is_final: bool,
}

fn default_deleted_is_final() -> bool {
    true
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            deleted_is_final: default_deleted_is_final(),
        }
    }
}

impl From<RulesConfig> for service::Config {
    fn from(rules: RulesConfig) -> Self {
        Self {
            deleted_is_final: rules.deleted_is_final,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SeedHouseConfig {
    pub name:         String,
    pub creator_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
rules:
  deleted_is_final: false
houses:
  - name: Spideo
    creator_name: Elliott
  - name: Drouot
    creator_name: Amrane
"#,
        )
        .unwrap();
        assert!(!config.rules.deleted_is_final);
        assert_eq!(config.houses.len(), 2);
        assert_eq!(config.houses[0].name, "Spideo");
        assert_eq!(config.houses[1].creator_name, "Amrane");
    }

    #[test]
    fn test_parse_defaults() {
        let config = Config::parse("{}").unwrap();
        assert!(config.rules.deleted_is_final);
        assert!(config.houses.is_empty());

        let config = Config::parse("rules: {}").unwrap();
        assert!(config.rules.deleted_is_final);
    }

    #[test]
    fn test_parse_rejects_incomplete_house() {
        assert!(Config::parse("houses:\n  - name: Spideo\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/auction-house/config.yaml").is_err());
    }
}
