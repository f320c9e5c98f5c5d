//! # SeatPlan
//!
//! A layout editor engine for theatre and venue seating charts:
//! - Single seats and whole rows with automatic `A1`, `A2`, ... numbering
//! - Bulk import of sectioned seat tables with aisle-aware placement
//! - Drag constraints that keep every seat on the canvas
//! - Horizontal and vertical alignment of a multi-selection
//! - Rename, delete, clear, save and load of layouts
//!
//! ## Architecture
//!
//! SeatPlan is organized as a workspace with multiple crates:
//!
//! 1. **seatplan-core** - Geometry, clamping, errors, event bus
//! 2. **seatplan-designer** - Seats, layout generation, alignment, editor session
//! 3. **seatplan-settings** - Configuration files and persistence
//! 4. **seatplan** - Command-line driver that integrates all crates

use anyhow::Context;

pub use seatplan_core;
pub use seatplan_designer as designer;
pub use seatplan_settings as settings;

pub use seatplan_core::{
    event_bus, Anchor, AppEvent, Axis, CanvasBounds, EventBus, EventFilter, LayoutError,
    OverflowPolicy, Placement, Point, StorageError,
};

pub use seatplan_designer::{
    ActionOutcome, Color, Dialog, DialogOutcome, EditorOptions, EditorSession, FileLayoutStore,
    HeadlessScene, ImportOptions, LayoutDocument, LayoutMetrics, LayoutStore, LogDialog,
    MemoryLayoutStore, Scene, SeatStyle, SectionStyle,
};

pub use seatplan_settings::{Config, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Builds editor options from a loaded configuration.
///
/// Fails when a configured color is not `#RRGGBB`.
pub fn editor_options_from_config(config: &Config) -> anyhow::Result<EditorOptions> {
    let bounds = CanvasBounds::new(config.canvas.width, config.canvas.height);

    let metrics = LayoutMetrics {
        seat_size: config.metrics.seat_size,
        grid_size: config.metrics.grid_size,
        seat_gap: config.metrics.seat_gap,
        row_pitch: config.metrics.row_pitch,
        start_y: config.metrics.start_y,
        top_margin: config.metrics.top_margin,
        anchor: config.metrics.anchor,
    };

    let style = SeatStyle {
        fill: Color::from_hex(&config.style.seat_fill).context("style.seat_fill")?,
        label_color: Color::from_hex(&config.style.label_color).context("style.label_color")?,
        font_size: config.style.font_size,
        corner_radius: config.style.corner_radius,
    };

    let mut options = EditorOptions::new(bounds, metrics, style);
    options.layout_key = config.storage.layout_key.clone();
    options.import = ImportOptions {
        overflow: config.import.overflow,
        section_alpha: config.style.section_alpha,
        sections: config
            .import
            .sections
            .iter()
            .map(|(name, section)| -> anyhow::Result<(String, SectionStyle)> {
                let color = section
                    .color
                    .as_deref()
                    .map(Color::from_hex)
                    .transpose()
                    .with_context(|| format!("import.sections.{}.color", name))?;
                Ok((
                    name.clone(),
                    SectionStyle {
                        placement: section.placement,
                        color,
                    },
                ))
            })
            .collect::<anyhow::Result<_>>()?,
    };

    Ok(options)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("logging already initialized")?;

    Ok(())
}
