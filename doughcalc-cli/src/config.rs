//! Configuration file loading for doughcalc.
//!
//! Discovers and loads `doughcalc.toml` from the working directory (or an explicit path).
//! Merges config file settings with CLI arguments (CLI takes precedence), then checks the
//! result against the same bounds the settings controls have always enforced.

use anyhow::{bail, Context};
use camino::{Utf8Path, Utf8PathBuf};
use doughcalc_types::{Inputs, Starter, Yeast};
use fs_err as fs;
use serde::Deserialize;
use std::ops::RangeInclusive;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "doughcalc.toml";

pub const OVEN_TEMP_RANGE: RangeInclusive<f64> = 0.0..=1000.0;
pub const PIE_COUNT_RANGE: RangeInclusive<u32> = 0..=24;
pub const PIE_SIZE_RANGE: RangeInclusive<f64> = 8.0..=24.0;
pub const NIGHTS_AGING_RANGE: RangeInclusive<u32> = 0..=2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    #[value(alias = "md")]
    #[serde(alias = "md")]
    Markdown,
    Json,
}

/// Top-level configuration from doughcalc.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoughcalcConfig {
    /// Recipe settings used when the matching flag is not given.
    pub defaults: DefaultsConfig,

    pub output: OutputConfig,
}

/// `[defaults]` section of the config. Unset fields fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub oven_temp: Option<f64>,
    pub pie_count: Option<u32>,
    pub pie_size: Option<f64>,
    pub starter: Option<Starter>,
    pub yeast: Option<Yeast>,
    pub nights_aging: Option<u32>,
    pub use_malt: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

/// Discover the doughcalc.toml config file in `dir`.
///
/// Returns `None` if no config file is found.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a doughcalc.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<DoughcalcConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<DoughcalcConfig> {
    let config: DoughcalcConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load the explicit config if given, else discover one in `dir`, else use defaults.
///
/// An explicit path that does not exist is an error; a missing discovered file is not.
pub fn load_or_default(
    explicit: Option<&Utf8Path>,
    dir: &Utf8Path,
) -> anyhow::Result<DoughcalcConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(DoughcalcConfig::default()),
    }
}

/// Recipe settings given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct RecipeOverrides {
    pub oven_temp: Option<f64>,
    pub pie_count: Option<u32>,
    pub pie_size: Option<f64>,
    pub starter: Option<Starter>,
    pub yeast: Option<Yeast>,
    pub nights_aging: Option<u32>,
    pub use_malt: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    pub inputs: Inputs,
    pub format: OutputFormat,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: DoughcalcConfig,
}

impl ConfigMerger {
    /// Create a new merger from a loaded config.
    pub fn new(config: DoughcalcConfig) -> Self {
        Self { config }
    }

    /// Merge with recipe command CLI arguments.
    ///
    /// Each setting resolves CLI flag, then config file, then built-in default. The merged
    /// inputs must lie inside the settings bounds.
    pub fn merge_recipe_args(self, cli: &RecipeOverrides) -> anyhow::Result<MergedConfig> {
        let file = self.config.defaults;
        let builtin = Inputs::default();

        let inputs = Inputs {
            oven_temp: cli.oven_temp.or(file.oven_temp).unwrap_or(builtin.oven_temp),
            pie_count: cli.pie_count.or(file.pie_count).unwrap_or(builtin.pie_count),
            pie_size: cli.pie_size.or(file.pie_size).unwrap_or(builtin.pie_size),
            starter: cli.starter.or(file.starter).unwrap_or(builtin.starter),
            use_malt: cli.use_malt.or(file.use_malt).unwrap_or(builtin.use_malt),
            nights_aging: cli
                .nights_aging
                .or(file.nights_aging)
                .unwrap_or(builtin.nights_aging),
            yeast_type: cli.yeast.or(file.yeast).unwrap_or(builtin.yeast_type),
        };
        check_bounds(&inputs)?;

        let format = cli
            .format
            .or(self.config.output.format)
            .unwrap_or_default();

        Ok(MergedConfig { inputs, format })
    }
}

/// Reject inputs the settings controls could never produce.
pub fn check_bounds(inputs: &Inputs) -> anyhow::Result<()> {
    if !OVEN_TEMP_RANGE.contains(&inputs.oven_temp) {
        bail!(
            "oven_temp {} is outside {}..={}",
            inputs.oven_temp,
            OVEN_TEMP_RANGE.start(),
            OVEN_TEMP_RANGE.end()
        );
    }
    if !PIE_COUNT_RANGE.contains(&inputs.pie_count) {
        bail!(
            "pie_count {} is outside {}..={}",
            inputs.pie_count,
            PIE_COUNT_RANGE.start(),
            PIE_COUNT_RANGE.end()
        );
    }
    if !PIE_SIZE_RANGE.contains(&inputs.pie_size) {
        bail!(
            "pie_size {} is outside {}..={}",
            inputs.pie_size,
            PIE_SIZE_RANGE.start(),
            PIE_SIZE_RANGE.end()
        );
    }
    if !NIGHTS_AGING_RANGE.contains(&inputs.nights_aging) {
        bail!(
            "nights_aging {} is outside {}..={}",
            inputs.nights_aging,
            NIGHTS_AGING_RANGE.start(),
            NIGHTS_AGING_RANGE.end()
        );
    }
    Ok(())
}
