//! Pointer-reactive 3D backdrop animation engine
//!
//! The engine owns a fixed particle field, three procedurally animated
//! solid bodies, and a damped camera, all stepped by an external host:
//! one `advance(elapsed)` call per display frame plus `pointer_moved`
//! events whenever the host's pointer moves. Each advance yields a
//! [`SceneFrame`] describing everything a rendering collaborator needs;
//! the engine itself never rasterizes.

pub mod bodies;
pub mod camera;
pub mod config;
pub mod error;
pub mod mesh;
pub mod particles;
pub mod pointer;
pub mod scene;
pub mod section;


pub use bodies::{BodyInstance, BodyKind, BodyParams, BodyPose, FloatParams, Material};
pub use camera::{CameraPose, CameraRig};
pub use config::{DriftPolicy, EngineConfig, ParticleFieldConfig};
pub use error::{EngineError, EngineResult};
pub use mesh::{primitive_mesh, Mesh};
pub use particles::{FieldOrientation, ParticleField};
pub use pointer::{PointerEvent, PointerState, PointerTracker};
pub use scene::{Light, LightRig, ParticleMaterial, ParticleView, SceneComposer, SceneFrame};
pub use section::Section;
