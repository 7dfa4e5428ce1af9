// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use ada::{ConfigRoot, SourceText};
use anyhow::{Context, Result};
use log::{debug, warn};

use crate::logger::Logger;

const ADA_EXTENSIONS: [&str; 2] = ["adb", "ads"];

/// A source file together with the configuration that applies to it.
pub struct Document {
    pub source: SourceText,
    pub config: ConfigRoot,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self> {
        if !has_ada_extension(path) {
            warn!("{} is not an Ada source file (expected .adb or .ads)", path.display());
        }

        let config = ConfigRoot::for_source_file(path)
            .with_context(|| format!("configuration for {}", path.display()))?;

        if config.log.debug {
            Logger::enable_debug();
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        debug!("Loaded {} ({} bytes)", path.display(), contents.len());

        Ok(Self {
            source: SourceText::with_path(path, contents),
            config,
        })
    }

    pub fn path(&self) -> &Path {
        self.source.path().unwrap_or(Path::new("<input>"))
    }
}

pub fn has_ada_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ADA_EXTENSIONS.iter().any(|ada| ext.eq_ignore_ascii_case(ada)))
}
