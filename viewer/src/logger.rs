// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{LevelFilter, Log, Metadata, Record};

pub(crate) struct Logger;

impl Logger {
    pub fn initialize(verbose: bool) {
        let logger = Box::leak(Box::new(Logger));

        log::set_max_level(Self::level(verbose));
        if let Err(e) = log::set_logger(logger) {
            eprintln!("Could not install logger: {e}");
            return;
        }

        log::debug!("Logger installed");
    }

    /// Raises the level when the configuration asks for debug output.
    pub fn enable_debug() {
        if log::max_level() < LevelFilter::Debug {
            log::set_max_level(LevelFilter::Debug);
            log::debug!("Debug logging enabled by configuration");
        }
    }

    const fn level(verbose: bool) -> LevelFilter {
        if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!("[{}] {}: {}", record.level(), record.file().unwrap_or_default(), record.args());
    }

    fn flush(&self) {}
}
