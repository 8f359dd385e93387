//! Engine configuration
//!
//! Defaults reproduce the backdrop's reference motion exactly; every
//! knob here is host opt-in. Loadable from JSON so a headless host can
//! ship a config file next to its binary.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do about the particle field's accumulated jitter drift.
///
/// The reference behavior adds jitter every tick with no decay, so
/// positions drift without bound over long sessions. That drift is part
/// of the look; `Preserve` keeps it. `Recenter` wraps coordinates that
/// leave the field cube back to the opposite face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DriftPolicy {
    #[default]
    Preserve,
    Recenter,
}

/// Particle field parameters
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleFieldConfig {
    /// Number of particles; fixed for the field's lifetime
    pub count: usize,
    /// Edge length of the centered spawn cube
    pub extent: f32,
    /// Per-tick jitter amplitude
    pub jitter_amplitude: f32,
    pub drift: DriftPolicy,
}

impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self {
            count: 3000,
            extent: 25.0,
            jitter_amplitude: 0.001,
            drift: DriftPolicy::Preserve,
        }
    }
}

/// Top-level engine configuration
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub particles: ParticleFieldConfig,
    /// First-order camera smoothing factor per tick
    pub camera_smoothing: f32,
    /// Seed for particle placement; random when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            particles: ParticleFieldConfig::default(),
            camera_smoothing: 0.02,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file
    pub fn from_json_file(path: &Path) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !(self.particles.extent > 0.0) {
            return Err(EngineError::Config(format!(
                "field extent must be positive, got {}",
                self.particles.extent
            )));
        }
        if !(self.camera_smoothing > 0.0 && self.camera_smoothing <= 1.0) {
            return Err(EngineError::Config(format!(
                "camera smoothing must be in (0, 1], got {}",
                self.camera_smoothing
            )));
        }
        Ok(())
    }
}
