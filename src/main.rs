//! Scrollcam headless driver.
//!
//! Runs the compositor over a scene for a fixed number of frames and writes
//! the last composited frame to a PNG file.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (if present) and apply command line overrides
//! 2. Load the scene JSON, or use the built-in demo scene
//! 3. Build the ECS world: animations, camera, map image, entities
//! 4. Per frame: advance time, run demo gameplay, step animations, follow
//!    the player with the camera, composite the frame
//! 5. Save the camera buffer
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 240 --debug --output frame.png
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;

use scrollcam::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use scrollcam::game::{self, SceneData};
use scrollcam::resources::camera::Camera;
use scrollcam::resources::gameconfig::GameConfig;
use scrollcam::resources::videofilter::VideoFilter;
use scrollcam::systems::animation::animation_step_system;
use scrollcam::systems::camerafollow::camera_follow_system;
use scrollcam::systems::render::render_system;
use scrollcam::systems::time::update_world_time;

/// Fixed simulation step, in seconds.
const FRAME_DT: f32 = 1.0 / 60.0;

/// Scrollcam: composite game frames headlessly.
#[derive(Parser)]
#[command(version, about = "Render frames of a side-scrolling scene to PNG")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Scene JSON file. Uses the built-in demo scene when omitted.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Where to write the last frame.
    #[arg(long, value_name = "PATH", default_value = "frame.png")]
    output: PathBuf,

    /// Enable the debug overlays regardless of the config file.
    #[arg(long)]
    debug: bool,

    /// Toggle the debug overlays at this frame.
    #[arg(long, value_name = "FRAME")]
    toggle_debug_at: Option<u64>,

    /// Post-composite filter: none, negative, grayscale, hsl_grayscale.
    #[arg(long, value_name = "NAME")]
    filter: Option<VideoFilter>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::info!("{}; using defaults", e);
    }
    if cli.debug {
        config.debug_overlays = true;
    }
    if let Some(filter) = cli.filter {
        config.filter = filter;
    }

    let scene = match &cli.scene {
        Some(path) => match SceneData::load_from_file(path) {
            Ok(scene) => scene,
            Err(e) => {
                log::error!("Cannot load scene {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => SceneData::demo(),
    };

    let mut world = World::new();
    if let Err(e) = game::setup(&mut world, &scene, &config) {
        log::error!("Scene setup failed: {}", e);
        return ExitCode::FAILURE;
    }
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            game::update,
            animation_step_system,
            camera_follow_system,
            render_system,
        )
            .chain(),
    );

    for frame in 0..cli.frames {
        if cli.toggle_debug_at == Some(frame) {
            world.trigger(SwitchDebugEvent {});
        }
        update_world_time(&mut world, FRAME_DT);
        update.run(&mut world);
    }

    let Some(camera) = world.remove_resource::<Camera>() else {
        log::error!("Camera resource disappeared");
        return ExitCode::FAILURE;
    };
    let result = match camera.buffer() {
        Some(buffer) => buffer.save_png(&cli.output),
        None => {
            log::error!("Camera was never initialized");
            return ExitCode::FAILURE;
        }
    };
    camera.destroy();

    match result {
        Ok(()) => {
            log::info!("Wrote {} frames, last one to {}", cli.frames, cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to write {}: {}", cli.output.display(), e);
            ExitCode::FAILURE
        }
    }
}
