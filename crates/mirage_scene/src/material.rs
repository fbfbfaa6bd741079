//! Surface materials referenced by name from figure blocks.

use mirage_math::Vec3;

/// Shading model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialKind {
    #[default]
    Diffuse,
    Emissive,
    Reflect,
    Glass,
    Transparent,
    Negative,
}

impl MaterialKind {
    /// Name as written in scene files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Diffuse => "diffuse",
            Self::Emissive => "emissive",
            Self::Reflect => "reflect",
            Self::Glass => "glass",
            Self::Transparent => "transparent",
            Self::Negative => "negative",
        }
    }

    /// Look up a kind by its scene-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "diffuse" => Self::Diffuse,
            "emissive" => Self::Emissive,
            "reflect" => Self::Reflect,
            "glass" => Self::Glass,
            "transparent" => Self::Transparent,
            "negative" => Self::Negative,
            _ => return None,
        })
    }
}

/// A named surface description.
///
/// Figure blocks refer to materials by name, so every material declared in
/// a scene file must carry one.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,

    pub kind: MaterialKind,

    /// Base color (RGB, 0-1)
    pub color: Vec3,

    /// Roughness factor (0=smooth, 1=rough)
    pub roughness: f32,

    /// Emission strength for emissive materials.
    pub emission: f32,

    /// Index of refraction for glass-like materials.
    pub ior: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: MaterialKind::Diffuse,
            color: Vec3::new(0.8, 0.8, 0.8),
            roughness: 0.5,
            emission: 0.0,
            ior: 1.5,
        }
    }
}

impl Material {
    /// Create a material with a name and kind, defaults elsewhere.
    pub fn new(name: impl Into<String>, kind: MaterialKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    /// Check if this material contributes light.
    pub fn is_emissive(&self) -> bool {
        self.kind == MaterialKind::Emissive && self.emission > 0.0
    }
}
