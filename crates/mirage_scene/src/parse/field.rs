//! The figure field dispatch table.
//!
//! Maps each recognized field name to a typed destination slot. The table
//! is built once from two parallel columns (names and slots) that must stay
//! index-aligned; construction checks the alignment rather than trusting it.

use std::sync::LazyLock;

use mirage_math::Vec3;
use thiserror::Error;

use crate::figure::{Figure, FigureKind};
use crate::scene::{MaterialId, Scene, TextureId};

use super::cursor::Cursor;
use super::value::{self, ValueError};

/// A typed destination slot: each variant pairs one value grammar with the
/// figure field it writes.
#[derive(Debug, Clone, Copy)]
pub enum FieldSlot {
    Scalar(fn(&mut Figure, f32)),
    Vec3(fn(&mut Figure, Vec3)),
    Kind(fn(&mut Figure, FigureKind)),
    Material(fn(&mut Figure, MaterialId)),
    Texture(fn(&mut Figure, TextureId)),
}

impl FieldSlot {
    /// Parse the next value literal and write it into `figure`.
    ///
    /// Reference slots resolve names against `scene`; nothing here inserts
    /// into it.
    pub(crate) fn parse_into(
        &self,
        cur: &mut Cursor,
        figure: &mut Figure,
        scene: &Scene,
    ) -> Result<(), ValueError> {
        match self {
            FieldSlot::Scalar(set) => set(figure, value::scalar(cur)?),
            FieldSlot::Vec3(set) => set(figure, value::vec3(cur)?),
            FieldSlot::Kind(set) => set(figure, value::figure_kind(cur)?),
            FieldSlot::Material(set) => set(figure, value::material_ref(cur, scene)?),
            FieldSlot::Texture(set) => set(figure, value::texture_ref(cur, scene)?),
        }
        Ok(())
    }
}

/// One dispatch-table entry.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub slot: FieldSlot,
}

/// Invariant violations caught while building a table.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("field table columns disagree: {names} names, {slots} slots")]
    ColumnMismatch { names: usize, slots: usize },

    #[error("field table repeats name \"{0}\"")]
    DuplicateName(&'static str),
}

/// Exact-match lookup from field name to descriptor.
#[derive(Debug)]
pub struct FieldTable {
    entries: Vec<FieldDescriptor>,
}

impl FieldTable {
    /// Zip parallel name/slot columns into a table.
    ///
    /// Position `i` of both columns must describe the same logical field;
    /// mismatched lengths and repeated names are rejected.
    pub fn from_columns(
        names: &[&'static str],
        slots: Vec<FieldSlot>,
    ) -> Result<Self, TableError> {
        if names.len() != slots.len() {
            return Err(TableError::ColumnMismatch {
                names: names.len(),
                slots: slots.len(),
            });
        }
        let mut entries: Vec<FieldDescriptor> = Vec::with_capacity(names.len());
        for (&name, slot) in names.iter().zip(slots) {
            if entries.iter().any(|e| e.name == name) {
                return Err(TableError::DuplicateName(name));
            }
            entries.push(FieldDescriptor { name, slot });
        }
        Ok(Self { entries })
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&FieldDescriptor> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Field names recognized inside a figure block, in table order.
const FIGURE_FIELD_NAMES: &[&str] = &[
    "type", "center", "center2", "normal", "emission", "radius", "angle",
    "color", "material", "radius2", "specular", "texture", "scale", "center3",
];

fn figure_field_slots() -> Vec<FieldSlot> {
    vec![
        FieldSlot::Kind(|f, v| f.kind = v),
        FieldSlot::Vec3(|f, v| f.position = v),
        FieldSlot::Vec3(|f, v| f.axis = v),
        FieldSlot::Vec3(|f, v| f.axis = v),
        FieldSlot::Vec3(|f, v| f.emission = v),
        FieldSlot::Scalar(|f, v| f.radius = v),
        // "angle" shares the radius slot; which one a kind reads is decided
        // by the renderer (cones treat it as their opening angle).
        FieldSlot::Scalar(|f, v| f.radius = v),
        FieldSlot::Vec3(|f, v| f.color = v),
        FieldSlot::Material(|f, v| f.material = Some(v)),
        FieldSlot::Scalar(|f, v| f.radius2 = v),
        FieldSlot::Scalar(|f, v| f.specular = v),
        FieldSlot::Texture(|f, v| f.texture = Some(v)),
        FieldSlot::Scalar(|f, v| f.scale = v),
        FieldSlot::Vec3(|f, v| f.axis2 = v),
    ]
}

/// The figure dispatch table, built once on first use.
pub fn figure_fields() -> &'static FieldTable {
    static TABLE: LazyLock<FieldTable> = LazyLock::new(|| {
        FieldTable::from_columns(FIGURE_FIELD_NAMES, figure_field_slots())
            .expect("figure field columns must stay aligned")
    });
    &TABLE
}
