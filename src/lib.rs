//! Flappy Canvas - a Flappy Bird style side-scroller for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, scoring, collisions)
//! - `render`: Canvas 2D rendering (wasm only)
//! - `highscore`: Persisted best score (LocalStorage on web)

pub mod highscore;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;

pub use highscore::HighScore;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels, matches the canvas)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Ground strip at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 30.0;

    /// Bird defaults - x never changes, the world scrolls past it
    pub const BIRD_X: f32 = 80.0;
    pub const BIRD_START_Y: f32 = 150.0;
    pub const BIRD_RADIUS: f32 = 15.0;

    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.5;
    /// Flap impulse - overwrites velocity, does not add to it
    pub const FLAP_LIFT: f32 = -10.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_GAP: f32 = 150.0;
    /// Horizontal scroll speed in pixels per frame
    pub const PIPE_SPEED: f32 = 2.0;
    /// Frames between pipe spawns
    pub const PIPE_SPAWN_INTERVAL: i32 = 90;
    /// Minimum height of a pipe's top segment (and clearance below the gap)
    pub const PIPE_MARGIN: f32 = 50.0;
}

/// Y coordinate of the top of the ground strip
#[inline]
pub fn ground_y() -> f32 {
    consts::PLAYFIELD_HEIGHT - consts::GROUND_HEIGHT
}
