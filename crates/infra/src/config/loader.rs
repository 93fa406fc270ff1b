//! Configuration loader
//!
//! Loads the SLA configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If nothing is set there, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports TOML and JSON formats (detected by file extension)
//!
//! ## Environment Variables
//! - `SLA_CONFIG`: the configuration document itself, inline TOML
//! - `SLA_CONFIG_PATH`: path to a TOML or JSON config file
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./sla.toml` or `./sla.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent directory

use std::path::{Path, PathBuf};

use sla_domain::{Result, SlaConfig, SlaError};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If neither variable
/// is set, falls back to probing for a config file.
///
/// # Errors
/// Returns `SlaError::Config` if:
/// - Configuration cannot be loaded from either source
/// - The document fails to parse
pub fn load() -> Result<SlaConfig> {
    match load_from_env()? {
        Some(config) => {
            tracing::info!("SLA configuration loaded from environment");
            Ok(config)
        }
        None => {
            tracing::debug!("no SLA configuration in environment, trying files");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Returns `Ok(None)` when neither `SLA_CONFIG` nor `SLA_CONFIG_PATH` is
/// set, so [`load`] can fall back to file probing.
///
/// # Errors
/// Returns `SlaError::Config` if a variable is set but its content does
/// not parse.
pub fn load_from_env() -> Result<Option<SlaConfig>> {
    if let Ok(inline) = std::env::var("SLA_CONFIG") {
        let config = toml::from_str(&inline)
            .map_err(|e| SlaError::Config(format!("invalid SLA_CONFIG: {e}")))?;
        return Ok(Some(config));
    }
    if let Ok(path) = std::env::var("SLA_CONFIG_PATH") {
        return load_from_file(Some(Path::new(&path))).map(Some);
    }
    Ok(None)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the locations listed in the module
/// documentation and uses the first file that exists.
///
/// # Errors
/// Returns `SlaError::Config` if:
/// - The file does not exist (when a path is specified)
/// - No config file is found (when probing)
/// - The file fails to parse
pub fn load_from_file(path: Option<&Path>) -> Result<SlaConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths()
            .into_iter()
            .find(|candidate| candidate.exists())
            .ok_or_else(|| SlaError::Config("no SLA config file found".to_string()))?,
    };

    tracing::debug!(path = %path.display(), "loading SLA configuration file");
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| SlaError::Config(format!("cannot read {}: {e}", path.display())))?;
    parse_config(&path, &contents)
}

fn parse_config(path: &Path, contents: &str) -> Result<SlaConfig> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(contents)
            .map_err(|e| SlaError::Config(format!("invalid TOML in {}: {e}", path.display()))),
        Some("json") => serde_json::from_str(contents)
            .map_err(|e| SlaError::Config(format!("invalid JSON in {}: {e}", path.display()))),
        other => Err(SlaError::Config(format!(
            "unsupported config extension {other:?} for {}",
            path.display()
        ))),
    }
}

fn probe_config_paths() -> Vec<PathBuf> {
    let names = ["sla.toml", "sla.json", "config.toml", "config.json"];
    let mut paths = Vec::new();
    for name in names {
        paths.push(PathBuf::from(name));
    }
    for name in names {
        paths.push(Path::new("..").join(name));
    }
    paths
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::Weekday;
    use sla_domain::Priority;

    use super::*;

    const SAMPLE_TOML: &str = r#"
        [[schedule]]
        day = "monday"
        start = "09:00:00"
        end = "17:00:00"

        [targets]
        urgent = 1800
    "#;

    const SAMPLE_JSON: &str = r#"{
        "schedule": [{"day": "monday", "start": "09:00:00", "end": "17:00:00"}],
        "holidays": ["2026-12-25"],
        "targets": {"high": 3600}
    }"#;

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SAMPLE_TOML.as_bytes()).unwrap();

        let config = load_from_file(Some(file.path())).unwrap();
        let (schedule, _, targets) = config.build().unwrap();
        assert!(schedule.window_for(Weekday::Mon).is_some());
        assert_eq!(targets.target_for(Priority::Urgent), Some(1800));
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();

        let config = load_from_file(Some(file.path())).unwrap();
        let (_, holidays, targets) = config.build().unwrap();
        assert_eq!(holidays.len(), 1);
        assert_eq!(targets.target_for(Priority::High), Some(3600));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"schedule: []").unwrap();

        let err = load_from_file(Some(file.path())).unwrap_err();
        assert!(matches!(err, SlaError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_from_file(Some(Path::new("/nonexistent/sla.toml"))).unwrap_err();
        assert!(matches!(err, SlaError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(b"[[schedule]\nday=").unwrap();

        let err = load_from_file(Some(file.path())).unwrap_err();
        assert!(matches!(err, SlaError::Config(_)));
    }
}
