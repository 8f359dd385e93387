//! Orbiting solid bodies
//!
//! Three procedural solids (sphere, box, torus) animated on independent
//! periodic schedules. A body's pose is a pure function of
//! `(elapsed, pointer)` plus its fixed parameters, so it is fully
//! reproducible and restartable from any elapsed-time value. Material
//! distortion and float/bob parameters are opaque to the engine and
//! ride along for the rendering collaborator.

use crate::pointer::PointerState;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Which procedural primitive a body renders as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Sphere,
    Box,
    Torus,
}

impl BodyKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Box => "box",
            Self::Torus => "torus",
        }
    }

    pub fn all() -> &'static [BodyKind] {
        &[Self::Sphere, Self::Box, Self::Torus]
    }
}

/// Surface descriptor passed through to the renderer untouched
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// sRGB hex color, e.g. `0x3B82F6`
    pub color: u32,
    /// Distortion amplitude (renderer-defined units)
    pub distort: f32,
    /// Distortion animation speed
    pub distort_speed: f32,
    pub roughness: f32,
    pub metalness: f32,
}

/// Gentle float/bob layered on top of the pose by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

/// Fixed per-body configuration, assigned at creation and never mutated
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BodyParams {
    pub kind: BodyKind,
    pub base_position: Vec3,
    pub material: Material,
    pub float: FloatParams,
}

impl BodyParams {
    /// The backdrop's three bodies.
    pub fn standard_set() -> [BodyParams; 3] {
        [
            BodyParams {
                kind: BodyKind::Sphere,
                base_position: Vec3::new(-4.0, 2.0, 0.0),
                material: Material {
                    color: 0x3B82F6,
                    distort: 0.3,
                    distort_speed: 2.0,
                    roughness: 0.2,
                    metalness: 0.8,
                },
                float: FloatParams {
                    speed: 2.0,
                    rotation_intensity: 1.5,
                    float_intensity: 3.0,
                },
            },
            BodyParams {
                kind: BodyKind::Box,
                base_position: Vec3::new(4.0, -2.0, -2.0),
                material: Material {
                    color: 0x06B6D4,
                    distort: 0.4,
                    distort_speed: 1.5,
                    roughness: 0.1,
                    metalness: 0.9,
                },
                float: FloatParams {
                    speed: 1.8,
                    rotation_intensity: 2.0,
                    float_intensity: 2.0,
                },
            },
            BodyParams {
                kind: BodyKind::Torus,
                base_position: Vec3::new(0.0, 3.0, -3.0),
                material: Material {
                    color: 0x8B5CF6,
                    distort: 0.2,
                    distort_speed: 3.0,
                    roughness: 0.3,
                    metalness: 0.7,
                },
                float: FloatParams {
                    speed: 2.2,
                    rotation_intensity: 1.0,
                    float_intensity: 2.5,
                },
            },
        ]
    }
}

/// Rotation (Euler, radians) + translation for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyPose {
    pub rotation: Vec3,
    pub position: Vec3,
}

/// One animated body: fixed parameters plus the pose function
#[derive(Clone, Copy, Debug)]
pub struct OrbitingBody {
    params: BodyParams,
}

impl OrbitingBody {
    pub fn new(params: BodyParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BodyParams {
        &self.params
    }

    /// Pose at a given tick. Pure: no accumulated state.
    pub fn pose_at(&self, elapsed: f32, pointer: PointerState) -> BodyPose {
        let base = self.params.base_position;
        match self.params.kind {
            BodyKind::Sphere => BodyPose {
                rotation: Vec3::new(
                    elapsed * 0.3 + pointer.y * 0.002,
                    elapsed * 0.2 + pointer.x * 0.002,
                    0.0,
                ),
                position: Vec3::new(base.x, elapsed.sin() * 0.5 + base.y, base.z),
            },
            BodyKind::Box => BodyPose {
                rotation: Vec3::new(
                    elapsed * 0.4 - pointer.y * 0.003,
                    0.0,
                    elapsed * 0.3 - pointer.x * 0.003,
                ),
                position: Vec3::new((elapsed * 0.5).cos() * 2.0 + base.x, base.y, base.z),
            },
            BodyKind::Torus => BodyPose {
                rotation: Vec3::new(
                    elapsed * 0.2 + pointer.x * 0.001,
                    elapsed * 0.5 + pointer.y * 0.001,
                    0.0,
                ),
                position: Vec3::new(base.x, base.y, (elapsed * 0.8).sin() * 2.0 + base.z),
            },
        }
    }
}

/// Instantiated body state for one composed frame
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BodyInstance {
    pub kind: BodyKind,
    pub pose: BodyPose,
    pub material: Material,
    pub float: FloatParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_is_deterministic() {
        let pointer = PointerState { x: 0.3, y: -0.7 };
        for params in BodyParams::standard_set() {
            let body = OrbitingBody::new(params);
            assert_eq!(body.pose_at(12.5, pointer), body.pose_at(12.5, pointer));
        }
    }

    #[test]
    fn test_sphere_pose_values() {
        let body = OrbitingBody::new(BodyParams::standard_set()[0]);
        let pointer = PointerState { x: 1.0, y: -1.0 };
        let pose = body.pose_at(0.0, pointer);

        assert!((pose.rotation.x - (-0.002)).abs() < 1e-7);
        assert!((pose.rotation.y - 0.002).abs() < 1e-7);
        // sin(0)*0.5 + 2 = 2
        assert_eq!(pose.position, Vec3::new(-4.0, 2.0, 0.0));
    }

    #[test]
    fn test_box_pose_values() {
        let body = OrbitingBody::new(BodyParams::standard_set()[1]);
        let pose = body.pose_at(0.0, PointerState::default());

        // cos(0)*2 + 4 = 6; pointer at center contributes nothing
        assert_eq!(pose.position, Vec3::new(6.0, -2.0, -2.0));
        assert_eq!(pose.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_torus_pose_values() {
        let body = OrbitingBody::new(BodyParams::standard_set()[2]);
        let elapsed = 2.0;
        let pose = body.pose_at(elapsed, PointerState { x: 0.5, y: 0.5 });

        assert!((pose.rotation.x - (elapsed * 0.2 + 0.0005)).abs() < 1e-6);
        assert!((pose.rotation.y - (elapsed * 0.5 + 0.0005)).abs() < 1e-6);
        assert!((pose.position.z - ((elapsed * 0.8).sin() * 2.0 - 3.0)).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_sign_conventions() {
        // Sphere follows the pointer, box counters it.
        let pointer = PointerState { x: 1.0, y: 1.0 };
        let sphere = OrbitingBody::new(BodyParams::standard_set()[0]);
        let boxy = OrbitingBody::new(BodyParams::standard_set()[1]);

        assert!(sphere.pose_at(0.0, pointer).rotation.x > 0.0);
        assert!(boxy.pose_at(0.0, pointer).rotation.x < 0.0);
    }

    #[test]
    fn test_standard_set_covers_all_kinds() {
        let kinds: Vec<_> = BodyParams::standard_set().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![BodyKind::Sphere, BodyKind::Box, BodyKind::Torus]);
    }
}
