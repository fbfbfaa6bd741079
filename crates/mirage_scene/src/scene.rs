//! The scene aggregate: everything a scene file declares.
//!
//! `Scene` doubles as the parse context: while figure blocks are parsed,
//! material and texture references are resolved against the entries already
//! registered here. Resolution happens at parse time and is never deferred,
//! so declarations must precede the figures that use them.

use mirage_math::Vec3;

use crate::figure::Figure;
use crate::material::Material;
use crate::texture::Texture;

/// Index of a material in [`Scene::materials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialId(pub usize);

/// Index of a texture in [`Scene::textures`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureId(pub usize);

/// Camera settings from the scene header.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,

    /// Euler angles in degrees.
    pub angles: Vec3,

    /// Vertical field of view in degrees.
    pub fov: f32,

    pub exposure: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            angles: Vec3::ZERO,
            fov: 60.0,
            exposure: 1.0,
        }
    }
}

/// A parsed scene: camera, named materials and textures, and figures.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub camera: Camera,

    pub materials: Vec<Material>,

    pub textures: Vec<Texture>,

    pub figures: Vec<Figure>,

    /// Optional external model file loaded alongside the figures.
    pub external_object: Option<String>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a material name against the registered materials.
    pub fn find_material(&self, name: &str) -> Option<MaterialId> {
        self.materials
            .iter()
            .position(|m| m.name == name)
            .map(MaterialId)
    }

    /// Resolve a texture name against the registered textures.
    pub fn find_texture(&self, name: &str) -> Option<TextureId> {
        self.textures
            .iter()
            .position(|t| t.name == name)
            .map(TextureId)
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn texture(&self, id: TextureId) -> &Texture {
        &self.textures[id.0]
    }
}
