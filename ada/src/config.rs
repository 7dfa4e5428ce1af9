// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::AdaVersion;

pub const CONFIG_FILE_NAME: &str = "ada-viewer.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub lexer: ConfigSectionLexer,
}

impl ConfigRoot {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads the configuration file that lives next to `source_file`, falling
    /// back to the defaults when there is none.
    pub fn for_source_file(source_file: &Path) -> Result<Self, ConfigError> {
        let Some(path) = source_file.parent().map(|dir| dir.join(CONFIG_FILE_NAME)) else {
            return Ok(Self::default());
        };

        if !path.is_file() {
            log::debug!("No configuration at {}", path.display());
            return Ok(Self::default());
        }

        log::debug!("Reading configuration from {}", path.display());
        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLexer {
    /// Keywords of later revisions are reported, never reclassified.
    pub ada_version: AdaVersion,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
