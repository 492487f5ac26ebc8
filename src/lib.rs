pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::RankerConfig;

pub use adapters::{GoogleMapsClient, LocalStorage, OpenDataClient};
pub use crate::core::{
    etl::{EtlEngine, RunOutcome, RunSummary},
    filters::{FilterCriteria, MatchMode},
    pipeline::SchoolPipeline,
};
pub use utils::error::{RankerError, Result};
