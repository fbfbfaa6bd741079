//! Scene file loading.
//!
//! Thin wrapper over [`parse_scene`](crate::parse::parse_scene) that reads
//! the file and annotates parse failures with the file path, so callers can
//! report `path: line N: ...` diagnostics and decide whether to abort.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::parse::{parse_scene, ParseError};
use crate::scene::Scene;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene file from disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let scene = parse_scene(&contents).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    log::info!(
        "Loaded scene: {} figures, {} materials, {} textures",
        scene.figures.len(),
        scene.materials.len(),
        scene.textures.len()
    );

    Ok(scene)
}
