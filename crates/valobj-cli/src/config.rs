//! Configuration file loading for the valobj CLI.
//!
//! The configuration file is TOML with one `[codegen]` section mapping to
//! [`CodegenConfig`]. An explicit `--config` path wins; otherwise the
//! platform configuration directory is probed for `valobj.toml`, and when
//! nothing is found the defaults apply.

use std::fs;
use std::path::PathBuf;

use log::debug;
use serde::Deserialize;

use valobj::ValobjError;
use valobj::config::CodegenConfig;

use crate::CliError;

#[derive(Debug, Default, Deserialize)]
struct CliConfig {
    #[serde(default)]
    codegen: CodegenConfig,
}

/// Loads the effective codegen configuration.
pub(crate) fn load_config(explicit: Option<&String>) -> Result<CodegenConfig, CliError> {
    let path = match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => default_config_path(),
    };
    let Some(path) = path else {
        return Ok(CodegenConfig::default());
    };

    debug!(config_path:? = path; "Loading configuration file");
    let content = fs::read_to_string(&path).map_err(ValobjError::from)?;
    let config: CliConfig = toml::from_str(&content)?;
    Ok(config.codegen)
}

/// The platform default configuration path, when the file exists.
fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "valobj")
        .map(|dirs| dirs.config_dir().join("valobj.toml"))
        .filter(|path| path.exists())
}
