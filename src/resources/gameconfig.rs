//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! vsync = true
//! target_fps = 20
//!
//! [world]
//! width = 800
//! height = 600
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
/// The simulation targets 20 ticks per second unless configured otherwise.
const DEFAULT_TARGET_FPS: u32 = 20;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_WORLD_WIDTH: f32 = 800.0;
const DEFAULT_WORLD_HEIGHT: f32 = 600.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, the tick rate, and the world-unit size of the
/// layer viewport. Loaded once at startup; missing file or keys keep the
/// defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames (and update ticks) per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Layer viewport width in world units.
    pub world_width: f32,
    /// Layer viewport height in world units.
    pub world_height: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [world] section
        if let Some(width) = config.getfloat("world", "width").ok().flatten() {
            self.world_width = width as f32;
        }
        if let Some(height) = config.getfloat("world", "height").ok().flatten() {
            self.world_height = height as f32;
        }

        info!(
            "Loaded config: {}x{} window, {}x{} world units, fps={}, vsync={}",
            self.window_width,
            self.window_height,
            self.world_width,
            self.world_height,
            self.target_fps,
            self.vsync
        );

        Ok(())
    }
}
