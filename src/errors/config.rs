// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading installer settings.

use std::path::PathBuf;

/// Errors that can occur while reading a settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("Failed to read settings from {}", path.display())]
    Io {
        /// Path of the settings file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or is missing required keys.
    #[error("Invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create an `Io` error for a settings path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}
