// Re-export glam for convenience
pub use glam::*;
