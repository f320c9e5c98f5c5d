//! SeatPlan Settings Crate
//!
//! Handles editor configuration: canvas size, seat metrics, seat styling,
//! bulk-import policy and where layouts are stored.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{
    CanvasSettings, Config, ImportSettings, MetricsSettings, SectionSettings, StorageSettings,
    StyleSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
