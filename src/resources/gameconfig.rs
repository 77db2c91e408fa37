//! Game configuration loaded from an INI file.
//!
//! Manages gameplay tunables loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [playfield]
//! width = 1024
//! height = 768
//!
//! [game]
//! fps = 30
//!
//! [ship]
//! max_speed = 6
//! launch_offset_x = 18
//! launch_offset_y = -20
//! bottom_margin = 5
//!
//! [projectile]
//! step = 10
//! ```

use configparser::ini::Ini;
use glam::Vec2;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::projectile::PROJECTILE_STEP;
use crate::components::ship::{BOTTOM_MARGIN, LAUNCH_OFFSET, MAX_SPEED, ShipSettings};
use crate::error::CoreError;
use crate::resources::playfield::Playfield;

/// Default safe values for startup
const DEFAULT_PLAYFIELD_WIDTH: u32 = 1024;
const DEFAULT_PLAYFIELD_HEIGHT: u32 = 768;
const DEFAULT_FPS: u32 = 30;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration, read once by the host at startup.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Playfield width in pixels.
    pub playfield_width: u32,
    /// Playfield height in pixels.
    pub playfield_height: u32,
    /// Ticks per second the host should run at.
    pub fps: u32,
    /// Ship top speed in pixels per tick.
    pub max_speed: i32,
    /// Shot launch point relative to the ship's top-left corner.
    pub launch_offset: Vec2,
    /// Gap between ship and bottom edge.
    pub bottom_margin: f32,
    /// Pixels a projectile climbs per tick.
    pub projectile_step: f32,
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
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: DEFAULT_PLAYFIELD_HEIGHT,
            fps: DEFAULT_FPS,
            max_speed: MAX_SPEED,
            launch_offset: LAUNCH_OFFSET,
            bottom_margin: BOTTOM_MARGIN,
            projectile_step: PROJECTILE_STEP,
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
    pub fn load_from_file(&mut self) -> Result<(), CoreError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| CoreError::Config(format!("failed to load config file: {}", e)))?;

        // [playfield] section
        if let Some(width) = config.getuint("playfield", "width").ok().flatten() {
            self.playfield_width = width as u32;
        }
        if let Some(height) = config.getuint("playfield", "height").ok().flatten() {
            self.playfield_height = height as u32;
        }

        // [game] section
        if let Some(fps) = config.getuint("game", "fps").ok().flatten() {
            if fps == 0 {
                warn!("Ignoring fps = 0 in {:?}", self.config_path);
            } else {
                self.fps = fps as u32;
            }
        }

        // [ship] section
        if let Some(speed) = config.getint("ship", "max_speed").ok().flatten() {
            match i32::try_from(speed.unsigned_abs()) {
                Ok(speed) => self.max_speed = speed,
                Err(_) => warn!(
                    "Ignoring out of range max_speed = {} in {:?}",
                    speed, self.config_path
                ),
            }
        }
        if let Some(x) = config.getfloat("ship", "launch_offset_x").ok().flatten() {
            self.launch_offset.x = x as f32;
        }
        if let Some(y) = config.getfloat("ship", "launch_offset_y").ok().flatten() {
            self.launch_offset.y = y as f32;
        }
        if let Some(margin) = config.getfloat("ship", "bottom_margin").ok().flatten() {
            self.bottom_margin = margin as f32;
        }

        // [projectile] section
        if let Some(step) = config.getfloat("projectile", "step").ok().flatten() {
            self.projectile_step = step as f32;
        }

        info!(
            "Loaded config: {}x{} playfield, fps={}, max_speed={}, projectile_step={}",
            self.playfield_width,
            self.playfield_height,
            self.fps,
            self.max_speed,
            self.projectile_step
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), CoreError> {
        let mut config = Ini::new();

        config.set("playfield", "width", Some(self.playfield_width.to_string()));
        config.set("playfield", "height", Some(self.playfield_height.to_string()));

        config.set("game", "fps", Some(self.fps.to_string()));

        config.set("ship", "max_speed", Some(self.max_speed.to_string()));
        config.set("ship", "launch_offset_x", Some(self.launch_offset.x.to_string()));
        config.set("ship", "launch_offset_y", Some(self.launch_offset.y.to_string()));
        config.set("ship", "bottom_margin", Some(self.bottom_margin.to_string()));

        config.set("projectile", "step", Some(self.projectile_step.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| CoreError::Config(format!("failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield {
            w: self.playfield_width,
            h: self.playfield_height,
        }
    }

    pub fn ship_settings(&self) -> ShipSettings {
        ShipSettings {
            max_speed: self.max_speed,
            launch_offset: self.launch_offset,
            bottom_margin: self.bottom_margin,
        }
    }
}
