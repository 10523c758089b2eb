// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Conversion configuration

use crate::io::{MeshStyle, DEFAULT_EXTENSION};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no config is given.
pub const CONFIG_FILE: &str = "stl2pov.toml";

/// What to do with facets whose normal has zero length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Write them like any other facet, only count them
    #[default]
    Keep,
    /// Leave them out of the output
    Skip,
}

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Kind of POV-Ray object to emit
    pub style: MeshStyle,
    /// Directory for the include files; the working directory if unset
    pub output_dir: Option<PathBuf>,
    /// Extension of the include files
    pub extension: String,
    /// Handling of degenerate facets
    pub degenerate: DegeneratePolicy,
    /// Verbose output
    pub verbose: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            style: MeshStyle::Inline,
            output_dir: None,
            extension: DEFAULT_EXTENSION.to_string(),
            degenerate: DegeneratePolicy::Keep,
            verbose: false,
        }
    }
}

impl ConvertConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: ConvertConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `stl2pov.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `STL2POV_*` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(style) = lookup("STL2POV_STYLE") {
            self.style = style
                .parse()
                .with_context(|| format!("Invalid STL2POV_STYLE: {}", style))?;
        }

        if let Some(output_dir) = lookup("STL2POV_OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(output_dir));
        }

        if let Some(skip) = lookup("STL2POV_SKIP_DEGENERATE") {
            self.degenerate = if parse_flag("STL2POV_SKIP_DEGENERATE", &skip)? {
                DegeneratePolicy::Skip
            } else {
                DegeneratePolicy::Keep
            };
        }

        if let Some(verbose) = lookup("STL2POV_VERBOSE") {
            self.verbose = parse_flag("STL2POV_VERBOSE", &verbose)?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("Invalid {}: {}", key, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::default();
        assert_eq!(config.style, MeshStyle::Inline);
        assert_eq!(config.extension, ".inc");
        assert_eq!(config.degenerate, DegeneratePolicy::Keep);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_partial_toml() -> Result<()> {
        let config: ConvertConfig = toml::from_str("style = \"mesh2\"\ndegenerate = \"skip\"\n")?;
        assert_eq!(config.style, MeshStyle::Indexed);
        assert_eq!(config.degenerate, DegeneratePolicy::Skip);
        assert_eq!(config.extension, ".inc");
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        let config = ConvertConfig {
            style: MeshStyle::Indexed,
            output_dir: Some(PathBuf::from("renders")),
            ..ConvertConfig::default()
        };

        config.save(&path)?;
        assert_eq!(ConvertConfig::from_file(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = [
            ("STL2POV_STYLE", "mesh2"),
            ("STL2POV_OUTPUT_DIR", "/tmp/pov"),
            ("STL2POV_SKIP_DEGENERATE", "yes"),
        ]
        .into_iter()
        .collect();

        let mut config = ConvertConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()))?;

        assert_eq!(config.style, MeshStyle::Indexed);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/pov")));
        assert_eq!(config.degenerate, DegeneratePolicy::Skip);
        Ok(())
    }

    #[test]
    fn test_boolean_overrides_share_parsing() -> Result<()> {
        let mut config = ConvertConfig::default();
        config.apply_overrides(|key| match key {
            "STL2POV_VERBOSE" => Some("1".to_string()),
            "STL2POV_SKIP_DEGENERATE" => Some("True".to_string()),
            _ => None,
        })?;
        assert!(config.verbose);
        assert_eq!(config.degenerate, DegeneratePolicy::Skip);

        config.apply_overrides(|key| match key {
            "STL2POV_VERBOSE" => Some("no".to_string()),
            "STL2POV_SKIP_DEGENERATE" => Some("off".to_string()),
            _ => None,
        })?;
        assert!(!config.verbose);
        assert_eq!(config.degenerate, DegeneratePolicy::Keep);

        let mut config = ConvertConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "STL2POV_VERBOSE").then(|| "loud".to_string())
        });
        assert!(result.unwrap_err().to_string().contains("STL2POV_VERBOSE"));
        Ok(())
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let mut config = ConvertConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "STL2POV_STYLE").then(|| "mesh9".to_string())
        });
        assert!(result.is_err());
    }
}
