pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_ROSTER_FILE: &str = "players.csv";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roster-manager")]
#[command(about = "Terminal baseball team roster manager")]
pub struct CliConfig {
    /// Roster CSV file (overrides the config file)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// CLI 參數與 TOML 設定合併後的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub roster_path: String,
    pub log_filter: Option<String>,
    pub verbose: bool,
}

impl AppConfig {
    /// 優先順序：--file > [roster].file > 預設值
    pub fn resolve(cli: &CliConfig, toml: Option<&TomlConfig>) -> Self {
        let roster_path = cli
            .file
            .clone()
            .or_else(|| toml.map(|t| t.roster_path().to_string()))
            .unwrap_or_else(|| DEFAULT_ROSTER_FILE.to_string());

        let log_filter = toml.and_then(|t| t.log_filter()).map(str::to_string);

        Self {
            roster_path,
            log_filter,
            verbose: cli.verbose,
        }
    }

    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let toml = match &cli.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        if let Some(toml) = &toml {
            toml.validate()?;
        }

        let config = Self::resolve(cli, toml.as_ref());
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for AppConfig {
    fn roster_path(&self) -> &str {
        &self.roster_path
    }

    fn log_filter(&self) -> Option<&str> {
        self.log_filter.as_deref()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("roster_path", &self.roster_path)
    }
}
