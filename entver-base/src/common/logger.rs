// Copyright 2025 OPPO.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::Level;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

static LOGGER: OnceCell<()> = OnceCell::new();

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    Stdout,
    #[default]
    Stderr,
}

/// Log output configuration, usually the `[log]` section of a config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConf {
    pub level: String,
    pub target: LogTarget,
    pub display_thread: bool,
    pub display_position: bool,
}

impl LogConf {
    /// Falls back to INFO when the configured level is not a valid tracing level.
    pub fn max_level(&self) -> Level {
        Level::from_str(self.level.trim()).unwrap_or(Level::INFO)
    }
}

impl Default for LogConf {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            target: LogTarget::Stderr,
            display_thread: false,
            display_position: false,
        }
    }
}

pub struct Logger;

impl Logger {
    /// Install the global subscriber. Only the first call in a process has any effect.
    pub fn init(conf: LogConf) {
        LOGGER.get_or_init(|| Self::install(&conf));
    }

    #[allow(clippy::should_implement_trait)]
    pub fn default() {
        Self::init(LogConf::default())
    }

    pub fn is_initialized() -> bool {
        LOGGER.get().is_some()
    }

    fn install(conf: &LogConf) {
        let level = conf.max_level();
        let writer = match conf.target {
            LogTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        };

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(writer)
            .with_thread_names(conf.display_thread)
            .with_file(conf.display_position)
            .with_line_number(conf.display_position)
            .finish();

        // Another subscriber may already be installed, e.g. by a test harness.
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            return;
        }
        if !Self::bridge_log(level) {
            tracing::warn!("a log logger is already installed, log records are not forwarded");
        }
    }

    /// Forward `log` records to tracing. Returns false when another `log` logger
    /// already owns the global slot.
    fn bridge_log(level: Level) -> bool {
        LogTracer::init_with_filter(Self::log_filter(level)).is_ok()
    }

    fn log_filter(level: Level) -> log::LevelFilter {
        log::LevelFilter::from_str(level.as_str()).unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level() {
        let mut conf = LogConf::default();
        assert_eq!(conf.max_level(), Level::INFO);

        conf.level = "DEBUG".to_string();
        assert_eq!(conf.max_level(), Level::DEBUG);

        conf.level = "verbose".to_string();
        assert_eq!(conf.max_level(), Level::INFO);
    }

    #[test]
    fn test_init_once() {
        Logger::default();
        Logger::init(LogConf {
            level: "trace".to_string(),
            ..Default::default()
        });
        assert!(Logger::is_initialized());
        log::info!("logger initialized");

        // The bridge took the global log slot, so a second one is refused.
        assert!(log::max_level() >= log::LevelFilter::Info);
        assert!(!Logger::bridge_log(Level::INFO));
    }
}
