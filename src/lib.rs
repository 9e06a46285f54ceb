//! Conway's Game of Life simulator
//!
//! The core is the Life engine: grid state, neighbor counting, and the
//! generation-advance transition. Playback scheduling, preset patterns, and
//! terminal rendering sit around it as thin collaborators.

pub mod config;
pub mod error;
pub mod life;
pub mod playback;
pub mod utils;

pub use config::Settings;
pub use error::GridError;
pub use life::{Grid, LifeEngine};
pub use playback::{Pattern, PlaybackDriver};

use anyhow::{Context, Result};

/// Build an engine from settings, optionally seeded with a named preset.
pub fn build_engine(settings: &Settings, pattern: Option<&str>) -> Result<LifeEngine> {
    let mut engine = LifeEngine::new(settings.grid.width, settings.grid.height);

    if let Some(name) = pattern {
        let preset = playback::patterns::find(name)
            .with_context(|| format!("Unknown pattern '{}'", name))?;
        playback::patterns::apply(&mut engine, preset).with_context(|| {
            format!(
                "Pattern '{}' does not fit a {}x{} grid",
                preset.name,
                settings.grid.width,
                settings.grid.height
            )
        })?;
    }

    Ok(engine)
}
