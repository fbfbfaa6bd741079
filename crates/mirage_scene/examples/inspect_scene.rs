//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/room.sc

use std::env;

use mirage_scene::load_scene;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-file>");
        return;
    }

    let path = &args[1];

    match load_scene(path) {
        Ok(scene) => {
            println!("Figures: {}", scene.figures.len());
            println!("Materials: {}", scene.materials.len());
            println!("Textures: {}", scene.textures.len());

            for fig in &scene.figures {
                println!(
                    "  {} at ({:.2}, {:.2}, {:.2})",
                    fig.kind.name(),
                    fig.position.x,
                    fig.position.y,
                    fig.position.z
                );
            }
        }
        Err(err) => {
            eprintln!("Failed to load scene: {}", err);
            std::process::exit(1);
        }
    }
}
