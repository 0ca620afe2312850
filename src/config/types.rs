// Configuration type definitions

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::search::debouncer::DEFAULT_DEBOUNCE_MS;
use crate::suggest::SuggestionLimits;

/// Simulated lookup latency, gives the loading indicator something to show
pub const DEFAULT_LATENCY_MS: u64 = 300;

/// Search and suggestion tuning
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub latency_ms: u64,
    pub max_suggestions: usize,
    pub per_type_limit: usize,
    pub ai_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let limits = SuggestionLimits::default();
        SearchConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            latency_ms: DEFAULT_LATENCY_MS,
            max_suggestions: limits.max_total,
            per_type_limit: limits.per_type,
            ai_limit: limits.ai,
        }
    }
}

impl SearchConfig {
    pub fn limits(&self) -> SuggestionLimits {
        SuggestionLimits {
            max_total: self.max_suggestions,
            per_type: self.per_type_limit,
            ai: self.ai_limit,
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Catalog source; the built-in catalog when no path is set
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Garage file; the platform data directory when no path is set
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GarageConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub garage: GarageConfig,
}
