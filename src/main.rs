//! Card Engine main entry point.
//!
//! A composite-sprite rendering demo written in Rust using:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window and the ECS world with its resources
//!    (config, frame time, texture store, viewport pair)
//! 2. Generate placeholder textures and spawn the demo card
//! 3. Run the fixed-tick loop (default 20 FPS, configurable):
//!    - advance frame time, run the update schedule
//!    - refresh the screen viewport from the window size
//!    - render all layered entities through the viewport pair
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;

use cardengine::game;
use cardengine::resources::frametime::FrameTime;
use cardengine::resources::gameconfig::GameConfig;
use cardengine::resources::layerviewport::LayerViewport;
use cardengine::resources::screenviewport::ScreenViewport;
use cardengine::resources::texturestore::TextureStore;
use cardengine::systems::render::render_pass;
use cardengine::systems::time::advance_frame_time;

/// Card Engine 2D
#[derive(Parser)]
#[command(version, about = "Composite layered-sprite rendering demo")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        // A missing file just keeps the defaults; an existing but broken
        // one should not be ignored silently.
        if config.config_path.exists() {
            log::warn!(
                "Running on default config, could not load {}: {e}",
                config.config_path.display()
            );
        }
    }

    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title("Card Engine");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(FrameTime::default());

    let mut store = TextureStore::new();
    game::load_textures(&mut rl, &thread, &mut store).expect("Failed to build demo textures");
    world.insert_resource(store);

    world.insert_resource(LayerViewport::new(
        400.0,
        300.0,
        config.world_width,
        config.world_height,
    ));
    world.insert_resource(ScreenViewport::full_window(
        rl.get_screen_width(),
        rl.get_screen_height(),
    ));
    world.insert_resource(config);

    game::spawn_card(&mut world).expect("Failed to assemble demo card");

    let mut update = Schedule::default();
    update.add_systems(game::update_cards);
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        advance_frame_time(&mut world, dt);

        update.run(&mut world);
        world.clear_trackers(); // Clear changed components for next frame

        // The owning screen supplies the viewport pair each frame; here the
        // screen side simply tracks the window.
        {
            let mut screen_vp = world.resource_mut::<ScreenViewport>();
            *screen_vp = ScreenViewport::full_window(rl.get_screen_width(), rl.get_screen_height());
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::DARKGREEN);
        if let Err(e) = render_pass(&mut world, &mut d) {
            log::error!("render pass skipped: {e}");
        }
    }
}
