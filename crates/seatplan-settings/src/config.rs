//! Configuration and settings management for SeatPlan
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Canvas size
//! - Seat metrics (size, pitch, row spacing, anchor convention)
//! - Seat styling
//! - Bulk import policy and per-section overrides
//! - Layout storage

use crate::error::{ConfigError, SettingsError, SettingsResult};
use seatplan_core::{Anchor, OverflowPolicy, Placement};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Drawable area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1040.0,
            height: 600.0,
        }
    }
}

/// Seat geometry and spacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    /// Edge length of the square seat footprint
    pub seat_size: f64,
    /// Grid unit used for seat pitch
    pub grid_size: f64,
    /// Extra gap added to the grid unit between adjacent seats
    pub seat_gap: f64,
    /// Vertical distance between consecutive rows
    pub row_pitch: f64,
    /// Vertical position of the first row and of single seats
    pub start_y: f64,
    /// Vertical position of the first imported row
    pub top_margin: f64,
    /// Which point of a seat its position refers to
    pub anchor: Anchor,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            seat_size: 30.0,
            grid_size: 34.0,
            seat_gap: 4.0,
            row_pitch: 45.0,
            start_y: 150.0,
            top_margin: 50.0,
            anchor: Anchor::Center,
        }
    }
}

/// Seat appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Seat fill as `#RRGGBB`
    pub seat_fill: String,
    /// Label text color as `#RRGGBB`
    pub label_color: String,
    /// Label font size
    pub font_size: f64,
    /// Seat corner radius
    pub corner_radius: f64,
    /// Opacity applied to section colors on import (0.0 - 1.0)
    pub section_alpha: f64,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            seat_fill: "#4CAF50".to_string(),
            label_color: "#FFFFFF".to_string(),
            font_size: 14.0,
            corner_radius: 5.0,
            section_alpha: 0.7,
        }
    }
}

/// Overrides for one named section of a bulk seat table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionSettings {
    /// Horizontal placement; inferred from the section name when absent
    #[serde(default)]
    pub placement: Option<Placement>,
    /// Section color as `#RRGGBB`; the seat fill when absent
    #[serde(default)]
    pub color: Option<String>,
}

/// Bulk import behavior
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Handling of seats that land outside the canvas
    pub overflow: OverflowPolicy,
    /// Per-section overrides keyed by section name
    pub sections: BTreeMap<String, SectionSettings>,
}

/// Layout storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Name the layout is saved under
    pub layout_key: String,
    /// Directory layout files are written to
    pub output_directory: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            layout_key: "theatre-layout".to_string(),
            output_directory: dirs::document_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas size
    pub canvas: CanvasSettings,
    /// Seat metrics
    pub metrics: MetricsSettings,
    /// Seat styling
    pub style: StyleSettings,
    /// Bulk import policy
    pub import: ImportSettings,
    /// Layout storage
    pub storage: StorageSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat pitch shared by row generation and alignment
    pub fn pitch(&self) -> f64 {
        self.metrics.grid_size + self.metrics.seat_gap
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(
                    ConfigError::UnsupportedFormat(other.unwrap_or_default().to_string()).into(),
                )
            }
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(
                    ConfigError::UnsupportedFormat(other.unwrap_or_default().to_string()).into(),
                )
            }
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        positive("canvas.width", self.canvas.width)?;
        positive("canvas.height", self.canvas.height)?;
        positive("metrics.seat_size", self.metrics.seat_size)?;
        positive("metrics.grid_size", self.metrics.grid_size)?;
        positive("metrics.row_pitch", self.metrics.row_pitch)?;
        positive("style.font_size", self.style.font_size)?;

        if !self.metrics.seat_gap.is_finite() || self.metrics.seat_gap < 0.0 {
            return Err(out_of_range("metrics.seat_gap", self.metrics.seat_gap));
        }
        if self.metrics.seat_size > self.canvas.width || self.metrics.seat_size > self.canvas.height
        {
            return Err(SettingsError::InvalidSetting {
                key: "metrics.seat_size".to_string(),
                reason: "seat does not fit on the canvas".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.style.section_alpha) {
            return Err(out_of_range("style.section_alpha", self.style.section_alpha));
        }
        for (key, value) in [
            ("metrics.start_y", self.metrics.start_y),
            ("metrics.top_margin", self.metrics.top_margin),
            ("style.corner_radius", self.style.corner_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(out_of_range(key, value));
            }
        }

        hex_color("style.seat_fill", &self.style.seat_fill)?;
        hex_color("style.label_color", &self.style.label_color)?;
        for (name, section) in &self.import.sections {
            if let Some(color) = &section.color {
                hex_color(&format!("import.sections.{}.color", name), color)?;
            }
        }

        if self.storage.layout_key.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "storage.layout_key".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn out_of_range(key: &str, value: f64) -> SettingsError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}

fn positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(key, value))
    }
}

fn hex_color(key: &str, value: &str) -> SettingsResult<()> {
    let digits = value.strip_prefix('#').unwrap_or_default();
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidColor {
            key: key.to_string(),
            value: value.to_string(),
        }
        .into())
    }
}
