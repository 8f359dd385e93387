//! Damped camera tracking
//!
//! The camera starts at a section-selected vantage and eases toward a
//! pointer-derived target with first-order exponential smoothing: each
//! tick moves a fixed fraction of the remaining distance, so it
//! converges monotonically without overshoot and never quite arrives.
//! Depth stays at the section preset; only x/y track the pointer.

use crate::pointer::PointerState;
use crate::section::camera_preset_for;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How far the pointer displaces the camera target, per normalized unit
const POINTER_TRACK_SCALE: f32 = 0.5;

/// Camera state for one composed frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    /// Look-at target; recomputed every tick, always the world origin
    pub target: Vec3,
    /// Vertical field of view (degrees)
    pub fov_deg: f32,
}

/// Integrated camera position with critically-damped pointer tracking
#[derive(Debug)]
pub struct CameraRig {
    position: Vec3,
    /// Per-tick smoothing factor in (0, 1]
    smoothing: f32,
}

impl CameraRig {
    /// Create at the vantage preset for `section_id` (soft fallback for
    /// unrecognized identifiers).
    pub fn for_section(section_id: &str, smoothing: f32) -> Self {
        Self {
            position: camera_preset_for(section_id),
            smoothing,
        }
    }

    /// Step toward the pointer-derived target. The z component is left
    /// at the section preset; look-at is pinned to the origin.
    pub fn advance(&mut self, pointer: PointerState) {
        let target_x = pointer.x * POINTER_TRACK_SCALE;
        let target_y = -pointer.y * POINTER_TRACK_SCALE;

        self.position.x += (target_x - self.position.x) * self.smoothing;
        self.position.y += (target_y - self.position.y) * self.smoothing;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: Vec3::ZERO,
            fov_deg: 75.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_presets_seed_position() {
        assert_eq!(
            CameraRig::for_section("about", 0.02).position(),
            Vec3::new(2.0, 1.0, 6.0)
        );
        assert_eq!(
            CameraRig::for_section("xyz", 0.02).position(),
            Vec3::new(0.0, 0.0, 5.0)
        );
    }

    #[test]
    fn test_converges_to_center_without_overshoot() {
        // Pointer pinned at center: target is (0, 0), so from the
        // "about" vantage the camera should slide toward (0, 0, 6)
        // monotonically on each axis.
        let mut rig = CameraRig::for_section("about", 0.02);
        let pointer = PointerState::default();

        let mut prev = rig.position();
        for _ in 0..4000 {
            rig.advance(pointer);
            let position = rig.position();
            assert!(position.x >= 0.0 && position.x <= prev.x, "x overshot");
            assert!(position.y >= 0.0 && position.y <= prev.y, "y overshot");
            prev = position;
        }

        assert!(prev.x.abs() < 1e-3);
        assert!(prev.y.abs() < 1e-3);
        assert_eq!(prev.z, 6.0, "depth is fixed by the section preset");
    }

    #[test]
    fn test_hero_center_settles_at_preset() {
        let mut rig = CameraRig::for_section("hero", 0.02);
        for _ in 0..1000 {
            rig.advance(PointerState::default());
        }
        let position = rig.position();
        assert!(position.distance(Vec3::new(0.0, 0.0, 5.0)) < 1e-4);
    }

    #[test]
    fn test_tracks_pointer_offset() {
        let mut rig = CameraRig::for_section("hero", 0.02);
        let pointer = PointerState { x: 1.0, y: 1.0 };
        for _ in 0..2000 {
            rig.advance(pointer);
        }
        let position = rig.position();
        assert!((position.x - 0.5).abs() < 1e-3);
        assert!((position.y + 0.5).abs() < 1e-3, "y target is inverted");
    }

    #[test]
    fn test_pose_looks_at_origin() {
        let rig = CameraRig::for_section("projects", 0.02);
        let pose = rig.pose();
        assert_eq!(pose.target, Vec3::ZERO);
        assert_eq!(pose.fov_deg, 75.0);
        assert_eq!(pose.position, Vec3::new(1.0, -1.0, 8.0));
    }
}
