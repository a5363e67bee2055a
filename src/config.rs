// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::features::JoinPolicy;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "snapdash.yaml";

/// Runtime settings. Every field has a default, so an empty YAML file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub geography: String,
    pub api_key: Option<String>,
    pub cache_dir: PathBuf,
    pub output: PathBuf,
    pub regions_file: Option<PathBuf>,
    pub strict_regions: bool,
    pub max_retries: u32,
    pub backoff_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://api.census.gov/data/2020/acs/acs5".into(),
            geography: "state:*".into(),
            api_key: None,
            cache_dir: PathBuf::from("cache"),
            output: PathBuf::from("dashboard.html"),
            regions_file: None,
            strict_regions: false,
            max_retries: 3,
            backoff_ms: 500,
        }
    }
}

impl Config {
    /// Load from `path`, or from `snapdash.yaml` if it exists, then apply env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                debug!("no config file, using defaults");
                Self::default()
            }
        };
        cfg.apply_env(|k| env::var(k).ok());
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
        let cfg = Self::from_yaml(&text).with_context(|| format!("parsing config {:?}", path))?;
        info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Overrides from `CENSUS_API_KEY`, `SNAPDASH_CACHE_DIR` and `SNAPDASH_STRICT_REGIONS`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("CENSUS_API_KEY").filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(dir) = lookup("SNAPDASH_CACHE_DIR").filter(|d| !d.is_empty()) {
            self.cache_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup("SNAPDASH_STRICT_REGIONS") {
            self.strict_regions = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
    }

    pub fn join_policy(&self) -> JoinPolicy {
        if self.strict_regions {
            JoinPolicy::Strict
        } else {
            JoinPolicy::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_yaml_gives_defaults() {
        let cfg = Config::from_yaml("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.join_policy(), JoinPolicy::Lenient);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let cfg = Config::from_yaml("strict_regions: true\nmax_retries: 5\n").unwrap();
        assert!(cfg.strict_regions);
        assert_eq!(cfg.max_retries, 5);
        assert_eq!(cfg.geography, "state:*");
        assert_eq!(cfg.join_policy(), JoinPolicy::Strict);
    }

    #[test]
    fn env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CENSUS_API_KEY", "abc123"),
            ("SNAPDASH_CACHE_DIR", "/tmp/snap"),
            ("SNAPDASH_STRICT_REGIONS", "TRUE"),
        ]
        .into_iter()
        .collect();

        let mut cfg = Config::default();
        cfg.apply_env(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.api_key.as_deref(), Some("abc123"));
        assert_eq!(cfg.cache_dir, PathBuf::from("/tmp/snap"));
        assert!(cfg.strict_regions);
    }

    #[test]
    fn from_file_reads_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapdash.yaml");
        fs::write(&path, "output: out/dash.html\ngeography: \"state:42\"\n").unwrap();
        let cfg = Config::from_file(&path).unwrap();
        assert_eq!(cfg.output, PathBuf::from("out/dash.html"));
        assert_eq!(cfg.geography, "state:42");
    }
}
