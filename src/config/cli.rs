use crate::config::RankerConfig;
use crate::core::filters::MatchMode;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags; anything set here overrides the config file.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "school-ranker")]
#[command(about = "Rank secondary schools by driving time from an origin address")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Origin address distances are measured from
    #[arg(long)]
    pub origin: Option<String>,

    /// Only keep schools in this province
    #[arg(long)]
    pub province: Option<String>,

    /// Only keep schools with an English bilingual program
    #[arg(long)]
    pub bilingual: bool,

    /// Compare names ignoring case, accents and extra whitespace
    #[arg(long)]
    pub lenient: bool,

    /// Maximum number of records requested from the open-data API
    #[arg(long)]
    pub limit: Option<usize>,

    /// Directory the CSV export is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the config file (or defaults), applies flag overrides and fills
    /// credentials from the environment.
    pub fn resolve(&self) -> Result<RankerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                RankerConfig::from_file(path)?
            }
            None => RankerConfig::default(),
        };

        if let Some(origin) = &self.origin {
            config.search.origin = origin.clone();
        }
        if let Some(province) = &self.province {
            config.search.province = Some(province.clone());
        }
        if self.bilingual {
            config.search.bilingual_only = true;
        }
        if self.lenient {
            config.search.match_mode = MatchMode::Lenient;
        }
        if let Some(limit) = self.limit {
            config.source.limit = limit;
        }
        if let Some(output_path) = &self.output_path {
            config.output.path = output_path.clone();
        }
        if self.no_color {
            config.output.colors = Some(false);
        }

        Ok(config.with_env_credentials())
    }
}
