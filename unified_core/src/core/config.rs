// Copyright 2025 eraflo
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

//! Engine configuration.
//!
//! Configuration is a plain serde tree loaded from a JSON file. Every field
//! has a default, so a partial file (or none at all) is always usable.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::math::Color;

/// Window creation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial client-area width in logical pixels.
    pub width: u32,
    /// Initial client-area height in logical pixels.
    pub height: u32,
    pub resizable: bool,
    pub maximized: bool,
    /// Keeps the window above ordinary windows.
    pub always_on_top: bool,
    /// Synchronizes presentation with the display refresh rate.
    pub vsync: bool,
}

impl Default for WindowConfig {
    /// A floating, fixed-size 800x600 window without vsync.
    fn default() -> Self {
        Self {
            title: "Unified".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            maximized: false,
            always_on_top: true,
            vsync: false,
        }
    }
}

/// Top-level engine settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window: WindowConfig,
    /// Color the frame is cleared to every redraw.
    pub clear_color: Color,
}

impl EngineConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// Fields missing from the file fall back to their defaults; a file
    /// that cannot be read or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Writes this configuration to a JSON file, pretty-printed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, text)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        log::info!("Saved engine config to {}", path.display());
        Ok(())
    }
}
