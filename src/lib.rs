//! Gapwing - a terminal flappy-bird arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Half-block terminal rendering
//! - `audio`: Fire-and-forget procedural sound cues
//! - `highscores`: In-process session leaderboard
//! - `settings`: User preferences (JSON in the config dir)

pub mod audio;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
///
/// The simulation runs in a fixed logical space of `WORLD_WIDTH` x
/// `WORLD_HEIGHT` units (y grows downward); the renderer scales that
/// space to whatever terminal it finds itself in.
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 120;

    /// Logical playfield width
    pub const WORLD_WIDTH: f32 = 576.0;
    /// Logical playfield height
    pub const WORLD_HEIGHT: f32 = 1024.0;

    /// Floor line; the bird's bottom edge reaching it ends the run
    pub const FLOOR_Y: f32 = 900.0;
    /// Ceiling line; the bird's top edge reaching it ends the run
    pub const CEILING_Y: f32 = -100.0;
    /// Decorative ground scroll per tick (wraps at WORLD_WIDTH)
    pub const FLOOR_SPEED: f32 = 1.0;

    /// Velocity gained per tick while falling
    pub const GRAVITY: f32 = 0.25;

    /// Fixed horizontal bird center
    pub const BIRD_START_X: f32 = 100.0;
    /// Bird center height on restart
    pub const BIRD_START_Y: f32 = WORLD_HEIGHT / 2.0;
    /// Vertical velocity on restart
    pub const BIRD_START_VEL: f32 = -10.0;
    /// Vertical velocity after a flap (overwrites, never adds)
    pub const BIRD_FLAP_VEL: f32 = -7.0;
    /// Cosmetic tilt in degrees = -velocity * this
    pub const BIRD_ROTATION_COEFF: f32 = 3.0;
    /// Bird bounding box (2x the 34x24 sprite of the classic art)
    pub const BIRD_WIDTH: f32 = 68.0;
    pub const BIRD_HEIGHT: f32 = 48.0;
    /// Wing-beat animation period (300 ms)
    pub const FLAP_ANIM_TICKS: u64 = 36;
    /// Number of wing-beat animation frames
    pub const FLAP_ANIM_FRAMES: usize = 3;

    /// Pipe pair spawn center, off the right edge
    pub const PIPE_SPAWN_X: f32 = WORLD_WIDTH + 200.0;
    /// One pipe rectangle (2x the 52x320 sprite of the classic art)
    pub const PIPE_WIDTH: f32 = 104.0;
    pub const PIPE_HEIGHT: f32 = 640.0;
    /// Gap bottom-edge choices; the spawner picks one at random
    pub const PIPE_GAP_CENTERS: [f32; 3] = [400.0, 600.0, 800.0];
    /// Vertical clearance between the top and bottom pipe
    pub const PIPE_GAP: f32 = 300.0;
    /// Base leftward pipe motion per tick
    pub const PIPE_SPEED: f32 = 5.0;
    /// Pipe spawn period (1200 ms)
    pub const PIPE_SPAWN_TICKS: u64 = 144;

    /// Every Nth pipe spawns a power-up
    pub const POWER_UP_PIPE_INTERVAL: u32 = 7;
    /// Lifetime of a collected power-up effect
    pub const POWER_UP_DURATION_MS: u64 = 5000;
}

/// Convert a tick count to simulation milliseconds
#[inline]
pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks * 1000 / consts::TICK_RATE as u64
}
