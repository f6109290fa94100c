use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::errors::MetricsError;

/// Debounced autosave settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutosaveConfig {
    /// Quiet period after the last edit before a save fires, in
    /// milliseconds.
    #[serde(default = "default_autosave_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_autosave_delay_ms(),
        }
    }
}

fn default_autosave_delay_ms() -> u64 {
    2000
}

/// Budget-variance percentages above which the dashboard escalates the
/// budget risk card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarianceThresholds {
    #[serde(default = "default_high_variance")]
    pub high: f64,

    #[serde(default = "default_medium_variance")]
    pub medium: f64,
}

impl Default for VarianceThresholds {
    fn default() -> Self {
        Self {
            high: default_high_variance(),
            medium: default_medium_variance(),
        }
    }
}

fn default_high_variance() -> f64 {
    20.0
}

fn default_medium_variance() -> f64 {
    10.0
}

impl VarianceThresholds {
    fn validate(&self) -> Result<(), String> {
        if self.high < 0.0 || self.medium < 0.0 {
            return Err("variance thresholds must be non-negative".to_string());
        }
        if self.medium >= self.high {
            return Err(format!(
                "medium variance threshold ({}) must be below the high threshold ({})",
                self.medium, self.high
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitemetricsConfig {
    #[serde(default)]
    pub autosave: AutosaveConfig,

    #[serde(default)]
    pub variance: VarianceThresholds,
}

static CONFIG: OnceLock<SitemetricsConfig> = OnceLock::new();

const CONFIG_FILE_NAME: &str = ".sitemetrics.toml";

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

fn parse_and_validate_config(contents: &str) -> Result<SitemetricsConfig, String> {
    let mut config = toml::from_str::<SitemetricsConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Err(e) = config.variance.validate() {
        eprintln!("Warning: Invalid variance thresholds: {}. Using defaults.", e);
        config.variance = VarianceThresholds::default();
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<SitemetricsConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // "Not found" is the common case while walking ancestors.
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search the current directory and its ancestors for a config file; fall
/// back to defaults when none parses.
pub fn load_config() -> SitemetricsConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            return SitemetricsConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Get the cached configuration.
pub fn get_config() -> &'static SitemetricsConfig {
    CONFIG.get_or_init(load_config)
}

/// Write a default config file into the current directory.
pub fn init_config(force: bool) -> Result<(), MetricsError> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(MetricsError::Config(format!(
            "{} already exists (use --force to overwrite)",
            CONFIG_FILE_NAME
        )));
    }

    let contents = toml::to_string_pretty(&SitemetricsConfig::default())
        .map_err(|e| MetricsError::Config(e.to_string()))?;
    fs::write(&path, contents).map_err(|source| MetricsError::Io { path, source })?;
    Ok(())
}
