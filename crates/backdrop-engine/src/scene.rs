//! Scene composition
//!
//! [`SceneComposer`] is the only type external collaborators touch. It
//! is built from a section identifier, owns every animated component,
//! and per render tick fans the `(elapsed, pointer)` pair out to all of
//! them, yielding a [`SceneFrame`] for the rendering collaborator. The
//! particle buffer crosses the boundary by reference; everything else
//! is copied into the frame.

use crate::bodies::{BodyInstance, BodyParams, OrbitingBody};
use crate::camera::{CameraPose, CameraRig};
use crate::config::EngineConfig;
use crate::particles::{FieldOrientation, ParticleField};
use crate::pointer::{PointerEvent, PointerState, PointerTracker};
use glam::Vec3;
use serde::Serialize;

/// One light in the fixed rig
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Light {
    Ambient { intensity: f32 },
    Point { position: Vec3, intensity: f32, color: u32 },
    Spot { position: Vec3, intensity: f32, color: u32 },
}

/// The backdrop's fixed lighting; static data carried in every frame
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LightRig {
    pub lights: [Light; 4],
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            lights: [
                Light::Ambient { intensity: 0.3 },
                Light::Point {
                    position: Vec3::new(10.0, 10.0, 10.0),
                    intensity: 1.0,
                    color: 0xFFFFFF,
                },
                Light::Point {
                    position: Vec3::new(-10.0, -10.0, -10.0),
                    intensity: 0.5,
                    color: 0x8B5CF6,
                },
                Light::Spot {
                    position: Vec3::new(0.0, 10.0, 0.0),
                    intensity: 0.8,
                    color: 0x06B6D4,
                },
            ],
        }
    }
}

/// Particle material pass-through values
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ParticleMaterial {
    pub color: u32,
    pub size: f32,
    pub transparent: bool,
    pub additive_blending: bool,
    pub depth_write: bool,
}

impl Default for ParticleMaterial {
    fn default() -> Self {
        Self {
            color: 0x8B5CF6,
            size: 0.015,
            transparent: true,
            additive_blending: true,
            depth_write: false,
        }
    }
}

/// Particle buffer view handed to the renderer
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ParticleView<'a> {
    pub positions: &'a [Vec3],
    pub orientation: FieldOrientation,
    /// True when the buffer changed and must be re-uploaded
    pub dirty: bool,
    pub material: ParticleMaterial,
}

/// Everything a rendering collaborator needs for one tick
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SceneFrame<'a> {
    pub elapsed: f32,
    pub pointer: PointerState,
    pub particles: ParticleView<'a>,
    pub bodies: [BodyInstance; 3],
    pub camera: CameraPose,
    pub lights: LightRig,
}

/// Owns and drives all animated components for one mounted section
pub struct SceneComposer {
    tracker: PointerTracker,
    field: ParticleField,
    bodies: [OrbitingBody; 3],
    camera: CameraRig,
}

impl SceneComposer {
    /// Build the scene for a section. An unrecognized identifier gets
    /// the default camera vantage, never an error.
    pub fn new(section_id: &str) -> Self {
        Self::with_config(section_id, EngineConfig::default())
    }

    pub fn with_config(section_id: &str, config: EngineConfig) -> Self {
        tracing::debug!(section = section_id, "composing scene");

        let bodies = BodyParams::standard_set().map(OrbitingBody::new);
        Self {
            tracker: PointerTracker::new(),
            field: ParticleField::new(config.particles, config.seed),
            bodies,
            camera: CameraRig::for_section(section_id, config.camera_smoothing),
        }
    }

    /// Feed one raw pointer event. Event-triggered, not tick-triggered:
    /// may run any number of times between two `advance` calls, and
    /// only the last value is consulted.
    pub fn pointer_moved(&mut self, event: PointerEvent) {
        self.tracker.on_pointer_move(event);
    }

    pub fn pointer(&self) -> PointerState {
        self.tracker.state()
    }

    /// Run one tick and yield the composed frame.
    ///
    /// `elapsed` is monotonic seconds since engine start, supplied by
    /// the host scheduler; the engine never reads a clock.
    pub fn advance(&mut self, elapsed: f32) -> SceneFrame<'_> {
        let pointer = self.tracker.state();

        self.field.advance(elapsed, pointer);
        self.camera.advance(pointer);

        let bodies = self.bodies.map(|body| BodyInstance {
            kind: body.params().kind,
            pose: body.pose_at(elapsed, pointer),
            material: body.params().material,
            float: body.params().float,
        });

        SceneFrame {
            elapsed,
            pointer,
            particles: ParticleView {
                positions: self.field.positions(),
                orientation: self.field.orientation(),
                dirty: self.field.is_dirty(),
                material: ParticleMaterial::default(),
            },
            bodies,
            camera: self.camera.pose(),
            lights: LightRig::default(),
        }
    }

    /// Renderer acknowledgment that the particle buffer was consumed.
    pub fn mark_particles_clean(&mut self) {
        self.field.mark_clean();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyKind;

    #[test]
    fn test_frame_composition() {
        let mut composer = SceneComposer::new("hero");
        let frame = composer.advance(0.5);

        assert_eq!(frame.particles.positions.len(), 3000);
        assert!(frame.particles.dirty);
        assert_eq!(frame.bodies.len(), 3);
        assert_eq!(frame.bodies[0].kind, BodyKind::Sphere);
        assert_eq!(frame.camera.target, Vec3::ZERO);
        assert_eq!(frame.elapsed, 0.5);
    }

    #[test]
    fn test_pointer_feeds_into_next_tick() {
        let mut composer = SceneComposer::new("hero");
        composer.pointer_moved(PointerEvent {
            client_x: 800.0,
            client_y: 0.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        });

        let frame = composer.advance(1.0);
        assert_eq!(frame.pointer, PointerState { x: 1.0, y: 1.0 });
        // Sphere rotation picks up the pointer term.
        assert!((frame.bodies[0].pose.rotation.x - (1.0 * 0.3 + 0.002)).abs() < 1e-6);
    }

    #[test]
    fn test_camera_integrates_across_ticks() {
        let mut composer = SceneComposer::new("about");
        let first = composer.advance(0.0).camera.position;
        let second = composer.advance(1.0 / 60.0).camera.position;
        assert!(second.x < first.x, "camera eases toward the center target");
        assert_eq!(second.z, 6.0);
    }

    #[test]
    fn test_section_selects_vantage() {
        let frame_pos = |id: &str| SceneComposer::new(id).advance(0.0).camera.position;
        // One tick of easing from the preset toward (0,0); z is untouched.
        assert_eq!(frame_pos("skills").z, 7.0);
        assert_eq!(frame_pos("nonsense").z, 5.0);
    }

    #[test]
    fn test_mark_clean_clears_dirty_until_next_tick() {
        let mut composer = SceneComposer::new("hero");
        composer.advance(0.1);
        composer.mark_particles_clean();
        let frame = composer.advance(0.2);
        assert!(frame.particles.dirty, "each tick re-dirties the buffer");
    }

    #[test]
    fn test_frame_serializes() {
        let mut composer = SceneComposer::with_config(
            "hero",
            EngineConfig {
                seed: Some(1),
                ..EngineConfig::default()
            },
        );
        let frame = composer.advance(0.25);
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"elapsed\":0.25"));
        assert!(json.contains("\"bodies\""));
    }
}
