//! Mirage scene description - records and parser for the tracer's scene format.
//!
//! This crate provides:
//!
//! - **Scene records**: `Scene`, `Figure`, `Material`, `Texture`, `Camera`
//! - **Parsing**: a hand-written cursor parser for the brace-delimited
//!   scene text, with a typed dispatch table for figure fields
//! - **Loading**: `load_scene` for reading scene files from disk
//!
//! # Example
//!
//! ```ignore
//! use mirage_scene::load_scene;
//!
//! let scene = load_scene("scenes/room.sc")?;
//! println!("Loaded {} figures, {} materials",
//!     scene.figures.len(),
//!     scene.materials.len());
//! ```

pub mod figure;
pub mod loader;
pub mod material;
pub mod parse;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use figure::{Figure, FigureKind};
pub use loader::{load_scene, LoadError, LoadResult};
pub use material::{Material, MaterialKind};
pub use parse::{parse_figure, parse_scene, ParseError, ParseResult};
pub use scene::{Camera, MaterialId, Scene, TextureId};
pub use texture::Texture;
