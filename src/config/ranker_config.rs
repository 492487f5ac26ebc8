use crate::core::filters::{FilterCriteria, MatchMode};
use crate::utils::error::{RankerError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SOURCE_ENDPOINT: &str =
    "https://www.juntadeandalucia.es/datosabiertos/portal/api/3/action/datastore_search";
pub const DEFAULT_RESOURCE_ID: &str = "82f92e32-c5ee-4c60-8643-bfb19e130cef";
pub const DEFAULT_DISTANCE_ENDPOINT: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";
pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_ORIGIN: &str = "Calle Costa Rica 49, 18194, Churriana de la Vega, Granada";
pub const DEFAULT_EXPORT_FILENAME: &str = "centros_educativos_ordenados.csv";
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Everything a ranking run needs, handed explicitly to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    pub source: SourceConfig,
    pub resolver: ResolverConfig,
    pub search: SearchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub resource_id: String,
    pub limit: usize,
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SOURCE_ENDPOINT.to_string(),
            resource_id: DEFAULT_RESOURCE_ID.to_string(),
            limit: 3000,
            timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub distance_endpoint: String,
    pub geocode_endpoint: String,
    pub api_key: Option<String>,
    pub language: String,
    pub timeout_seconds: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            distance_endpoint: DEFAULT_DISTANCE_ENDPOINT.to_string(),
            geocode_endpoint: DEFAULT_GEOCODE_ENDPOINT.to_string(),
            api_key: None,
            language: "es".to_string(),
            timeout_seconds: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub origin: String,
    pub province: Option<String>,
    pub bilingual_only: bool,
    pub match_mode: MatchMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            province: None,
            bilingual_only: false,
            match_mode: MatchMode::Strict,
        }
    }
}

impl SearchConfig {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            province: self.province.clone(),
            bilingual_only: self.bilingual_only,
            mode: self.match_mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub filename: String,
    /// `None` means color only when stdout is a terminal.
    pub colors: Option<bool>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: ".".to_string(),
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
            colors: None,
        }
    }
}

impl RankerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| RankerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Fills a missing or unresolved API key from `GOOGLE_MAPS_API_KEY`.
    pub fn with_env_credentials(mut self) -> Self {
        let unresolved = self
            .resolver
            .api_key
            .as_deref()
            .map_or(true, |key| key.trim().is_empty() || key.starts_with("${"));
        if unresolved {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                self.resolver.api_key = Some(key);
            }
        }
        self
    }

    pub fn api_key(&self) -> Result<&str> {
        validation::validate_required_field("resolver.api_key", &self.resolver.api_key)
            .map(String::as_str)
    }

    pub fn export_path(&self) -> String {
        Path::new(&self.output.path)
            .join(&self.output.filename)
            .to_string_lossy()
            .into_owned()
    }
}

impl Validate for RankerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_non_empty_string("source.resource_id", &self.source.resource_id)?;
        validation::validate_positive_number("source.limit", self.source.limit, 1)?;
        validation::validate_range("source.timeout_seconds", self.source.timeout_seconds, 1, 300)?;

        validation::validate_url("resolver.distance_endpoint", &self.resolver.distance_endpoint)?;
        validation::validate_url("resolver.geocode_endpoint", &self.resolver.geocode_endpoint)?;
        validation::validate_range(
            "resolver.timeout_seconds",
            self.resolver.timeout_seconds,
            1,
            300,
        )?;
        let api_key = self.api_key()?;
        validation::validate_non_empty_string("resolver.api_key", api_key)?;
        if api_key.starts_with("${") {
            return Err(RankerError::InvalidConfigValueError {
                field: "resolver.api_key".to_string(),
                value: api_key.to_string(),
                reason: "Environment placeholder was not resolved".to_string(),
            });
        }

        validation::validate_non_empty_string("search.origin", &self.search.origin)?;
        if let Some(province) = &self.search.province {
            validation::validate_non_empty_string("search.province", province)?;
        }

        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_path("output.filename", &self.output.filename)?;

        Ok(())
    }
}
