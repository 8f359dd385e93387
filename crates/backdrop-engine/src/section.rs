//! Section identifiers and camera vantage presets
//!
//! A section is a named content region of the host page; its identifier
//! selects where the camera starts. Identifiers are free text: anything
//! unrecognized falls back to the default vantage rather than erroring.

use glam::Vec3;

/// Default camera vantage, shared by `hero`, `contact` and any
/// unrecognized section identifier
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Named content section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Parse a section identifier; `None` for anything unrecognized.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "hero" => Some(Self::Hero),
            "about" => Some(Self::About),
            "skills" => Some(Self::Skills),
            "projects" => Some(Self::Projects),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Initial camera position for this section
    pub fn camera_preset(&self) -> Vec3 {
        match self {
            Self::Hero => Vec3::new(0.0, 0.0, 5.0),
            Self::About => Vec3::new(2.0, 1.0, 6.0),
            Self::Skills => Vec3::new(-2.0, 2.0, 7.0),
            Self::Projects => Vec3::new(1.0, -1.0, 8.0),
            Self::Contact => Vec3::new(0.0, 0.0, 5.0),
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Self::Hero,
            Self::About,
            Self::Skills,
            Self::Projects,
            Self::Contact,
        ]
    }
}

/// Camera preset for a free-text section identifier, with soft fallback
pub fn camera_preset_for(id: &str) -> Vec3 {
    Section::parse(id)
        .map(|s| s.camera_preset())
        .unwrap_or(DEFAULT_CAMERA_POSITION)
}
