//! Definition loading from TOML files.
//!
//! A definitions directory holds `patterns.toml` and `regions.toml`. Either
//! file may be missing, in which case the defaults compiled into this crate
//! are used instead.

use crate::{
    definition::{validate_regions, PatternDefinitions, PatternsFile, RegionDefinitions, RegionsFile},
    error::{PatternError, Result},
};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the tier pattern definitions.
pub const PATTERNS_FILE: &str = "patterns.toml";

/// File name of the region table.
pub const REGIONS_FILE: &str = "regions.toml";

const EMBEDDED_PATTERNS: &str = include_str!("../defaults/patterns.toml");
const EMBEDDED_REGIONS: &str = include_str!("../defaults/regions.toml");

/// Loader for pattern and region definitions.
#[derive(Debug, Clone)]
pub struct DefinitionLoader {
    /// Directory containing definition files, `None` for embedded defaults only
    definitions_dir: Option<PathBuf>,
}

impl DefinitionLoader {
    /// Create a new loader reading from the given directory.
    ///
    /// # Errors
    /// Returns error if the directory doesn't exist.
    pub fn new(definitions_dir: impl Into<PathBuf>) -> Result<Self> {
        let definitions_dir = definitions_dir.into();

        if !definitions_dir.is_dir() {
            return Err(PatternError::DirectoryNotFound {
                path: definitions_dir.display().to_string(),
            });
        }

        Ok(Self {
            definitions_dir: Some(definitions_dir),
        })
    }

    /// Create a loader that only serves the embedded defaults.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            definitions_dir: None,
        }
    }

    /// Create a loader from the first existing default location.
    ///
    /// Looks for a `config/` directory next to the executable, then one level
    /// above it, then in the working directory, then the user settings
    /// directory. Falls back to the embedded defaults when none exists.
    #[must_use]
    pub fn discover(user_config_dir: Option<&Path>) -> Self {
        let mut candidates = Vec::new();

        if let Ok(exe) = std::env::current_exe() {
            if let Some(exe_dir) = exe.parent() {
                candidates.push(exe_dir.join("config"));
                candidates.push(exe_dir.join("..").join("config"));
            }
        }
        candidates.push(PathBuf::from("config"));
        if let Some(dir) = user_config_dir {
            candidates.push(dir.to_path_buf());
        }

        Self::first_existing(&candidates)
    }

    /// Pick the first candidate directory that holds at least one definitions file.
    fn first_existing(candidates: &[PathBuf]) -> Self {
        for dir in candidates {
            if dir.join(PATTERNS_FILE).is_file() || dir.join(REGIONS_FILE).is_file() {
                debug!(dir = %dir.display(), "found definitions directory");
                return Self {
                    definitions_dir: Some(dir.clone()),
                };
            }
        }

        debug!("no definitions directory found, using embedded defaults");
        Self::embedded()
    }

    /// The directory this loader reads from, if any.
    #[must_use]
    pub fn definitions_dir(&self) -> Option<&Path> {
        self.definitions_dir.as_deref()
    }

    /// Load and validate the tier pattern definitions.
    pub fn load_patterns(&self) -> Result<PatternDefinitions> {
        let file: PatternsFile = self.load_file(PATTERNS_FILE, EMBEDDED_PATTERNS)?;
        file.patterns.validate()?;

        info!(
            vip = file.patterns.vip.len(),
            platinum = file.patterns.platinum.len(),
            notable = file.patterns.notable.len(),
            "loaded tier patterns"
        );

        Ok(file.patterns)
    }

    /// Load and validate the region table.
    pub fn load_regions(&self) -> Result<RegionDefinitions> {
        let file: RegionsFile = self.load_file(REGIONS_FILE, EMBEDDED_REGIONS)?;
        validate_regions(&file.regions)?;

        info!(count = file.regions.len(), "loaded region table");

        Ok(file.regions)
    }

    /// Read `name` from the definitions directory, or parse the embedded copy.
    fn load_file<T: DeserializeOwned>(&self, name: &str, embedded: &str) -> Result<T> {
        if let Some(dir) = &self.definitions_dir {
            let path = dir.join(name);
            if path.is_file() {
                return Self::load_from_path(&path);
            }
            debug!(path = %path.display(), "definitions file missing, using embedded copy");
        }

        toml::from_str(embedded).map_err(|e| PatternError::ParseError {
            path: format!("<embedded>/{name}"),
            source: e,
        })
    }

    /// Load a definitions file from a specific path.
    fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let contents = std::fs::read_to_string(path).map_err(|e| PatternError::LoadError {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        debug!(path = %path.display(), "loading definitions file");

        toml::from_str(&contents).map_err(|e| PatternError::ParseError {
            path: path.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_loader_new_with_existing_dir() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let loader = DefinitionLoader::new(temp_dir.path());
        assert!(loader.is_ok());
    }

    #[test]
    fn test_loader_new_with_nonexistent_dir() {
        let loader = DefinitionLoader::new("/nonexistent/path/to/definitions");
        assert!(matches!(
            loader,
            Err(PatternError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_embedded_defaults_are_valid() {
        let loader = DefinitionLoader::embedded();
        let patterns = loader.load_patterns().expect("embedded patterns");
        assert!(!patterns.vip.is_empty());
        assert!(!patterns.platinum.is_empty());
        assert!(!patterns.notable.is_empty());

        let regions = loader.load_regions().expect("embedded regions");
        assert!(regions.contains_key("default"));
        assert!(regions.contains_key("Canada"));
    }

    #[test]
    fn test_directory_file_overrides_embedded() {
        let temp_dir = TempDir::new().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join(PATTERNS_FILE),
            "[patterns]\nvip = ['8675309$']\n",
        )
        .expect("write patterns file");

        let loader = DefinitionLoader::new(temp_dir.path()).expect("create loader");
        let patterns = loader.load_patterns().expect("load patterns");
        assert_eq!(patterns.vip, vec!["8675309$".to_string()]);
        assert!(patterns.platinum.is_empty());

        // regions.toml is absent, so the embedded table is used
        let regions = loader.load_regions().expect("load regions");
        assert!(regions.contains_key("default"));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let temp_dir = TempDir::new().expect("create temp dir");
        std::fs::write(temp_dir.path().join(REGIONS_FILE), "invalid toml content [[[")
            .expect("write invalid file");

        let loader = DefinitionLoader::new(temp_dir.path()).expect("create loader");
        let err = loader.load_regions().expect_err("invalid regions");
        assert!(matches!(err, PatternError::ParseError { .. }));
        assert!(err.to_string().contains(REGIONS_FILE));
    }

    #[test]
    fn test_first_existing_skips_empty_dirs() {
        let empty = TempDir::new().expect("create temp dir");
        let populated = TempDir::new().expect("create temp dir");
        std::fs::write(
            populated.path().join(REGIONS_FILE),
            "[regions]\ndefault = [\"808\"]\n",
        )
        .expect("write regions file");

        let loader = DefinitionLoader::first_existing(&[
            empty.path().to_path_buf(),
            populated.path().to_path_buf(),
        ]);
        assert_eq!(loader.definitions_dir(), Some(populated.path()));
    }

    #[test]
    fn test_first_existing_falls_back_to_embedded() {
        let empty = TempDir::new().expect("create temp dir");
        let loader = DefinitionLoader::first_existing(&[empty.path().to_path_buf()]);
        assert!(loader.definitions_dir().is_none());
    }
}
