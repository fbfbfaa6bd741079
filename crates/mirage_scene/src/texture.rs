//! Named texture entries.
//!
//! The scene carries textures as name/path pairs only; decoding pixels and
//! uploading them is the renderer's concern.

/// A named texture referenced from figure blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub name: String,

    /// Image file path, relative to the scene file.
    pub path: String,
}

impl Texture {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
