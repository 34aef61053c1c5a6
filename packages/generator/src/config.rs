//! Generator Configuration
//!
//! Immutable settings shared by every file of one generation run: the feature
//! switches and the import replacement table.

use crate::error::ConfigError;
use crate::features::{FeatureOptions, Features};
use crate::golang::libs::DEFAULT_THRIFT_LIB;
use crate::golang::replacement::ImportReplacement;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Option that swaps the thrift runtime for another import path.
pub const THRIFT_IMPORT_PATH_OPTION: &str = "thrift_import_path";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "RawGeneratorConfig")]
pub struct GeneratorConfig {
    pub features: Features,
    pub import_replace: Arc<ImportReplacement>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGeneratorConfig {
    #[serde(default)]
    features: FeatureOptions,
    #[serde(default)]
    import_replace: HashMap<String, String>,
    #[serde(default)]
    thrift_import_path: Option<String>,
}

impl TryFrom<RawGeneratorConfig> for GeneratorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGeneratorConfig) -> Result<Self, Self::Error> {
        let mut import_replace = ImportReplacement::try_from(raw.import_replace)?;
        if let Some(path) = raw.thrift_import_path {
            import_replace.insert(DEFAULT_THRIFT_LIB, path)?;
        }
        Ok(GeneratorConfig::new(raw.features.into(), import_replace))
    }
}

impl GeneratorConfig {
    pub fn new(features: Features, import_replace: ImportReplacement) -> Self {
        Self {
            features,
            import_replace: Arc::new(import_replace),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read generator config {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid generator config {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Builds a configuration from command line style options
    /// (`gen_deep_equal`, `keep_unknown_fields=false`, `thrift_import_path=...`).
    pub fn from_options<'a, I>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut features = Features::empty();
        let mut import_replace = ImportReplacement::new();
        for option in options {
            match option.split_once('=') {
                Some((name, path)) if name.trim() == THRIFT_IMPORT_PATH_OPTION => {
                    import_replace.insert(DEFAULT_THRIFT_LIB, path.trim())?;
                }
                _ => features.apply_option(option)?,
            }
        }
        Ok(GeneratorConfig::new(features, import_replace))
    }
}
