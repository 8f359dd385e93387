//! Particle field state
//!
//! A fixed population of points suggesting a drifting star field. The
//! position buffer is allocated once and mutated in place every tick;
//! no particle is ever added or removed. The whole-field orientation is
//! a pure function of `(elapsed, pointer)` recomputed each tick, so it
//! cannot accumulate error; the per-particle jitter is accumulative and
//! drifts without bound unless the host opts into recentering.

use crate::config::{DriftPolicy, ParticleFieldConfig};
use crate::pointer::PointerState;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Rigid rotation applied to the whole field
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOrientation {
    /// Rotation about the x axis (radians)
    pub pitch: f32,
    /// Rotation about the y axis (radians)
    pub yaw: f32,
}

impl FieldOrientation {
    /// Orientation for a given tick; stateless by construction.
    pub fn at(elapsed: f32, pointer: PointerState) -> Self {
        Self {
            pitch: elapsed * 0.05 + pointer.y * 0.0005,
            yaw: elapsed * 0.08 + pointer.x * 0.0005,
        }
    }
}

/// Owned, exclusively-mutated particle position arena
#[derive(Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    orientation: FieldOrientation,
    /// Set whenever positions changed since the renderer last consumed
    /// the buffer
    dirty: bool,
    config: ParticleFieldConfig,
}

impl ParticleField {
    /// Allocate the field: `count` positions uniform in a cube of edge
    /// `extent` centered at the origin. Happens exactly once per field
    /// lifetime.
    pub fn new(config: ParticleFieldConfig, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let half = config.extent * 0.5;

        let positions = (0..config.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                )
            })
            .collect();

        Self {
            positions,
            orientation: FieldOrientation::default(),
            dirty: false,
            config,
        }
    }

    /// Step the field by one tick.
    pub fn advance(&mut self, elapsed: f32, pointer: PointerState) {
        self.orientation = FieldOrientation::at(elapsed, pointer);

        let amplitude = self.config.jitter_amplitude;
        for (i, position) in self.positions.iter_mut().enumerate() {
            let phase = elapsed + i as f32;
            position.x += phase.sin() * amplitude;
            position.y += phase.cos() * amplitude;
        }

        if self.config.drift == DriftPolicy::Recenter {
            let extent = self.config.extent;
            for position in &mut self.positions {
                position.x = wrap_centered(position.x, extent);
                position.y = wrap_centered(position.y, extent);
            }
        }

        self.dirty = true;
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn orientation(&self) -> FieldOrientation {
        self.orientation
    }

    /// True when the buffer changed since the last [`mark_clean`] call,
    /// i.e. the renderer must re-upload it.
    ///
    /// [`mark_clean`]: ParticleField::mark_clean
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Wrap `value` into `[-extent/2, extent/2]`.
fn wrap_centered(value: f32, extent: f32) -> f32 {
    let half = extent * 0.5;
    (value + half).rem_euclid(extent) - half
}
