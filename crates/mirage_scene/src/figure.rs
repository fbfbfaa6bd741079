//! The figure record: one geometric primitive's parsed attributes.

use mirage_math::Vec3;

use crate::scene::{MaterialId, TextureId};

/// Primitive kinds understood by the tracer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FigureKind {
    #[default]
    Sphere,
    Plane,
    Cube,
    Cylinder,
    Cone,
    Torus,
    Disc,
    Triangle,
    Skybox,
    Mandelbulb,
    Julia,
    Ellipsoid,
    Paraboloid,
    Hyperboloid,
    Mebius,
    Pyramid,
    Tetrahedron,
}

impl FigureKind {
    /// Canonical name as written in scene files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Plane => "plane",
            Self::Cube => "cube",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Torus => "torus",
            Self::Disc => "disc",
            Self::Triangle => "triangle",
            Self::Skybox => "skybox",
            Self::Mandelbulb => "mandelbulb",
            Self::Julia => "julia",
            Self::Ellipsoid => "ellipsoid",
            Self::Paraboloid => "paraboloid",
            Self::Hyperboloid => "hyperboloid",
            Self::Mebius => "mebius",
            Self::Pyramid => "pyramid",
            Self::Tetrahedron => "tetrahedron",
        }
    }

    /// Look up a kind by its scene-file name.
    ///
    /// Accepts the legacy spellings `julia_fract` and `parabolid` that older
    /// scene files still carry.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sphere" => Self::Sphere,
            "plane" => Self::Plane,
            "cube" => Self::Cube,
            "cylinder" => Self::Cylinder,
            "cone" => Self::Cone,
            "torus" => Self::Torus,
            "disc" => Self::Disc,
            "triangle" => Self::Triangle,
            "skybox" => Self::Skybox,
            "mandelbulb" => Self::Mandelbulb,
            "julia" | "julia_fract" => Self::Julia,
            "ellipsoid" => Self::Ellipsoid,
            "paraboloid" | "parabolid" => Self::Paraboloid,
            "hyperboloid" => Self::Hyperboloid,
            "mebius" => Self::Mebius,
            "pyramid" => Self::Pyramid,
            "tetrahedron" => Self::Tetrahedron,

            _ => return None,
        })
    }
}

/// A renderable primitive's parsed attribute record.
///
/// A figure starts out with every field at its default and a parsed block
/// overwrites only the fields it names; absence is not an error. What the
/// shared slots mean depends on the kind: `axis` holds a plane or disc
/// normal but a second center for cylinders and cones, `radius` doubles as
/// the opening angle of a cone, and the triangle's vertices arrive through
/// `position`/`axis`/`axis2`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    pub kind: FigureKind,

    pub position: Vec3,

    /// Orientation or second center, depending on kind.
    pub axis: Vec3,

    /// Third center or axis, depending on kind.
    pub axis2: Vec3,

    /// Emitted light color.
    pub emission: Vec3,

    /// Surface color.
    pub color: Vec3,

    /// Primary radius; also the cone opening angle in degrees.
    pub radius: f32,

    /// Secondary radius (torus tube, cylinder cap).
    pub radius2: f32,

    pub specular: f32,

    pub scale: f32,

    /// Material reference, resolved at parse time.
    pub material: Option<MaterialId>,

    /// Texture reference, resolved at parse time.
    pub texture: Option<TextureId>,
}
