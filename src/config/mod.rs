#[cfg(feature = "cli")]
pub mod cli;
pub mod ranker_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use ranker_config::{OutputConfig, RankerConfig, ResolverConfig, SearchConfig, SourceConfig};
