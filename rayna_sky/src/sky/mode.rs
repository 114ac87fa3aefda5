use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;
use valuable::Valuable;

/// How the renderer should produce the sky
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize, Valuable)]
pub enum SkyMode {
    /// Simulated sky, lit by the sun model
    #[default]
    Simulated,
    /// Panoramic skymap, covering the sky above the horizon
    Skymap,
    /// Colour gradient
    Gradient,
    /// Six-sided skybox
    Skybox,
}

/// Human-readable name for a sky mode, for display in user interfaces
pub fn label(mode: SkyMode) -> &'static str {
    match mode {
        SkyMode::Simulated => "Simulated",
        SkyMode::Skymap => "Panoramic Skymap (above horizon)",
        SkyMode::Gradient => "Color Gradient",
        SkyMode::Skybox => "Skybox",
    }
}
