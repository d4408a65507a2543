//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{MAX_LINE_NUMBER_WIDTH, MAX_TAB_WIDTH, MIN_SPLIT_COLUMN_WIDTH};
use crate::error::{PatchviewError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PatchviewError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PatchviewError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config if the file exists, otherwise fall back to defaults.
    ///
    /// A file that exists but is invalid is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            PatchviewError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PatchviewError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `split_column_width` must be at least 10
    /// - `line_number_width` must be between 1 and 10
    /// - `tab_width` must be between 1 and 16
    /// - `download_filename` must be non-empty
    /// - `pager`, when set, must be a non-empty, parseable command line
    /// - every `ignore_globs` entry must be a valid glob
    pub fn validate(&self) -> Result<()> {
        if self.split_column_width < MIN_SPLIT_COLUMN_WIDTH {
            return Err(invalid(format!(
                "split_column_width must be at least {} (found {})",
                MIN_SPLIT_COLUMN_WIDTH, self.split_column_width
            )));
        }

        if self.line_number_width == 0 || self.line_number_width > MAX_LINE_NUMBER_WIDTH {
            return Err(invalid(format!(
                "line_number_width must be between 1 and {} (found {})",
                MAX_LINE_NUMBER_WIDTH, self.line_number_width
            )));
        }

        if self.tab_width == 0 || self.tab_width > MAX_TAB_WIDTH {
            return Err(invalid(format!(
                "tab_width must be between 1 and {} (found {})",
                MAX_TAB_WIDTH, self.tab_width
            )));
        }

        if self.download_filename.trim().is_empty() {
            return Err(invalid("download_filename must be non-empty".to_string()));
        }

        if self.pager.is_some() {
            self.pager_command()?;
        }

        self.ignore_globset()?;

        Ok(())
    }

    /// Split the configured pager into program and arguments.
    ///
    /// Returns `Ok(None)` when no pager is configured.
    pub fn pager_command(&self) -> Result<Option<Vec<String>>> {
        let Some(pager) = &self.pager else {
            return Ok(None);
        };

        let args = shell_words::split(pager).map_err(|e| {
            invalid(format!(
                "failed to parse pager command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                pager, e
            ))
        })?;

        if args.is_empty() {
            return Err(invalid("pager command is empty".to_string()));
        }

        Ok(Some(args))
    }

    /// Compile `ignore_globs` into a matcher.
    pub fn ignore_globset(&self) -> Result<GlobSet> {
        build_globset(&self.ignore_globs, "ignore_globs")
    }
}

/// Compile a list of glob patterns, naming `origin` in any error.
pub fn build_globset(patterns: &[String], origin: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            PatchviewError::UserError(format!(
                "invalid glob '{}' in {}: {}",
                pattern, origin, e
            ))
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| {
        PatchviewError::UserError(format!("failed to compile {}: {}", origin, e))
    })
}

fn invalid(message: String) -> PatchviewError {
    PatchviewError::UserError(format!("config validation failed: {}", message))
}
