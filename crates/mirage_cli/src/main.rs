// Scene checker: parse scene files and report what they contain.
// Run with: cargo run --bin mirage_cli -- <scene.sc> [more.sc ...]

use std::env;

use anyhow::{bail, Result};
use mirage_scene::{load_scene, Scene};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <scene.sc> [more.sc ...]", args[0]);
        std::process::exit(1);
    }

    let mut failures = 0usize;
    for path in &args[1..] {
        println!("Loading scene: {}", path);
        match load_scene(path) {
            Ok(scene) => print_summary(&scene),
            Err(err) => {
                eprintln!("error: {}", err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} scene file(s) failed to load", failures);
    }
    Ok(())
}

fn print_summary(scene: &Scene) {
    println!(
        "  camera at ({:.2}, {:.2}, {:.2}), fov {:.1}",
        scene.camera.position.x,
        scene.camera.position.y,
        scene.camera.position.z,
        scene.camera.fov
    );

    println!("  {} material(s)", scene.materials.len());
    for mat in &scene.materials {
        println!("    {} ({})", mat.name, mat.kind.name());
    }

    println!("  {} texture(s)", scene.textures.len());
    for tex in &scene.textures {
        println!("    {} -> {}", tex.name, tex.path);
    }

    println!("  {} figure(s)", scene.figures.len());
    for fig in &scene.figures {
        let material = fig
            .material
            .map(|id| scene.material(id).name.as_str())
            .unwrap_or("-");
        println!(
            "    {} at ({:.2}, {:.2}, {:.2}), material {}",
            fig.kind.name(),
            fig.position.x,
            fig.position.y,
            fig.position.z,
            material
        );
    }

    if let Some(path) = &scene.external_object {
        println!("  external object: {}", path);
    }
}
