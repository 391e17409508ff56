//! Game state and core simulation types

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;
use crate::ticks_to_ms;

/// The player sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Bounding box; x never changes after construction
    pub rect: Rect,
    /// Vertical velocity, positive = downward
    pub vel: f32,
    /// Wing-beat animation frame index
    pub anim_frame: usize,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    pub fn new() -> Self {
        Self {
            rect: Rect::from_center(
                Vec2::new(BIRD_START_X, BIRD_START_Y),
                Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
            ),
            vel: BIRD_START_VEL,
            anim_frame: 0,
        }
    }

    /// Overwrite velocity with the flap impulse (never additive)
    pub fn flap(&mut self) {
        self.vel = BIRD_FLAP_VEL;
    }

    /// One tick of gravity: accelerate, then move
    pub fn fall(&mut self, gravity: f32) {
        self.vel += gravity;
        self.rect.min.y += self.vel;
    }

    /// Advance to the next wing-beat frame
    pub fn advance_animation(&mut self) {
        self.anim_frame = (self.anim_frame + 1) % FLAP_ANIM_FRAMES;
    }

    /// Cosmetic tilt in degrees, positive = nose up. Rendering only; has
    /// no effect on the bounding box.
    pub fn tilt_deg(&self) -> f32 {
        -self.vel * BIRD_ROTATION_COEFF
    }
}

/// One gap obstacle: a top and bottom pipe sharing a center column
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    pub top: Rect,
    pub bottom: Rect,
}

impl PipePair {
    /// Build a pair whose gap's bottom edge sits at `gap_y`; the gap spans
    /// upward from there by `PIPE_GAP`.
    pub fn new(gap_y: f32) -> Self {
        let size = Vec2::new(PIPE_WIDTH, PIPE_HEIGHT);
        let left = PIPE_SPAWN_X - PIPE_WIDTH / 2.0;
        Self {
            top: Rect::new(Vec2::new(left, gap_y - PIPE_GAP - PIPE_HEIGHT), size),
            bottom: Rect::new(Vec2::new(left, gap_y), size),
        }
    }

    /// Shift the pair left by `speed`
    pub fn advance(&mut self, speed: f32) {
        self.top.min.x -= speed;
        self.bottom.min.x -= speed;
    }

    pub fn center_x(&self) -> f32 {
        self.top.center().x
    }
}

/// Power-up flavors. Only one is enumerated; the activation and reversal
/// paths are kind-dispatched so more can slot in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Doubles the current score instantly on collection
    DoubleScore,
}

impl PowerUpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::DoubleScore => "double_score",
        }
    }
}

/// A pending power-up drifting across the screen, waiting to be collected
#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub rect: Rect,
}

impl PowerUp {
    /// Spawn at the right edge, vertically centered, bird-sized
    pub fn new(kind: PowerUpKind) -> Self {
        Self {
            kind,
            rect: Rect::new(
                Vec2::new(WORLD_WIDTH, (WORLD_HEIGHT - BIRD_HEIGHT) / 2.0),
                Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
            ),
        }
    }
}

/// A collected power-up whose effect is live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    /// Sim clock reading at collection time
    pub activated_at_ms: u64,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulating vs. showing the waiting screen
    pub active: bool,
    /// Counts active ticks; doubled instantly by `DoubleScore`
    pub score: u64,
    /// Best score of any completed run this process; never decreases
    pub high_score: u64,
    pub bird: Bird,
    /// Spawned pairs, oldest first. Off-screen pairs are never culled and
    /// keep moving left for the whole run.
    /// TODO: retain() pairs whose right edge is still on screen; long
    /// runs accumulate dead rects.
    pub pipes: Vec<PipePair>,
    /// Pending power-up; at most one exists at any time
    pub power_up: Option<PowerUp>,
    /// Live collected effect, if any
    pub effect: Option<ActiveEffect>,
    /// Total pairs spawned this run; every 7th spawns a power-up
    pub pipe_count: u32,
    /// Current pipe speed; base value unless an effect bends it
    pub pipe_speed: f32,
    /// Current gravity; base value unless an effect bends it
    pub gravity: f32,
    /// Decorative ground scroll offset, wraps at -WORLD_WIDTH
    pub floor_x: f32,
    /// Tick counter; also the sim clock (runs through inactive periods)
    pub time_ticks: u64,
}

impl GameState {
    /// A fresh state on the waiting screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            active: false,
            score: 0,
            high_score: 0,
            bird: Bird::new(),
            pipes: Vec::new(),
            power_up: None,
            effect: None,
            pipe_count: 0,
            pipe_speed: PIPE_SPEED,
            gravity: GRAVITY,
            floor_x: 0.0,
            time_ticks: 0,
        }
    }

    /// Simulation clock in milliseconds, derived from the tick counter
    pub fn clock_ms(&self) -> u64 {
        ticks_to_ms(self.time_ticks)
    }

    /// Begin a new run: everything a run touches goes back to its start
    /// value. The clock, ground scroll, and high score carry over.
    pub fn restart(&mut self) {
        self.bird = Bird::new();
        self.score = 0;
        self.pipes.clear();
        self.power_up = None;
        self.effect = None;
        self.pipe_count = 0;
        self.pipe_speed = PIPE_SPEED;
        self.gravity = GRAVITY;
        self.active = true;
        log::info!("run started (seed {})", self.seed);
    }

    /// End the run: fold the score into the high score and fall back to
    /// the waiting screen.
    pub fn end_run(&mut self) {
        self.active = false;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        log::info!(
            "run over: score {} (best {})",
            self.score,
            self.high_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_waits_for_first_flap() {
        let state = GameState::new(7);
        assert!(!state.active);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        assert!(state.power_up.is_none());
    }

    #[test]
    fn restart_resets_the_run() {
        let mut state = GameState::new(7);
        state.score = 314;
        state.bird.vel = 9.5;
        state.bird.rect.min.y = 800.0;
        state.pipes.push(PipePair::new(600.0));
        state.power_up = Some(PowerUp::new(PowerUpKind::DoubleScore));
        state.effect = Some(ActiveEffect {
            kind: PowerUpKind::DoubleScore,
            activated_at_ms: 10,
        });
        state.pipe_count = 9;
        state.pipe_speed = 3.0;
        state.gravity = 0.1;

        state.restart();

        assert!(state.active);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.vel, BIRD_START_VEL);
        assert_eq!(state.bird.rect.center(), Vec2::new(BIRD_START_X, BIRD_START_Y));
        assert!(state.pipes.is_empty());
        assert!(state.power_up.is_none());
        assert!(state.effect.is_none());
        assert_eq!(state.pipe_count, 0);
        assert_eq!(state.pipe_speed, PIPE_SPEED);
        assert_eq!(state.gravity, GRAVITY);
    }

    #[test]
    fn restart_keeps_high_score_and_clock() {
        let mut state = GameState::new(7);
        state.high_score = 500;
        state.time_ticks = 1234;
        state.restart();
        assert_eq!(state.high_score, 500);
        assert_eq!(state.time_ticks, 1234);
    }

    #[test]
    fn end_run_folds_score_into_high_score() {
        let mut state = GameState::new(7);
        state.active = true;
        state.score = 42;
        state.end_run();
        assert!(!state.active);
        assert_eq!(state.high_score, 42);

        // A worse run never lowers it
        state.active = true;
        state.score = 10;
        state.end_run();
        assert_eq!(state.high_score, 42);
    }

    #[test]
    fn flap_overwrites_velocity() {
        let mut bird = Bird::new();
        bird.vel = 12.0;
        bird.flap();
        assert_eq!(bird.vel, BIRD_FLAP_VEL);
        // Flapping while already rising does not stack
        bird.flap();
        assert_eq!(bird.vel, BIRD_FLAP_VEL);
    }

    #[test]
    fn fall_accelerates_then_moves() {
        let mut bird = Bird::new();
        bird.vel = 0.0;
        let y0 = bird.rect.min.y;
        bird.fall(GRAVITY);
        assert_eq!(bird.vel, GRAVITY);
        assert_eq!(bird.rect.min.y, y0 + GRAVITY);
    }

    #[test]
    fn tilt_is_proportional_to_velocity() {
        let mut bird = Bird::new();
        bird.vel = -7.0;
        assert_eq!(bird.tilt_deg(), 21.0);
        bird.vel = 10.0;
        assert_eq!(bird.tilt_deg(), -30.0);
    }

    #[test]
    fn wing_animation_wraps() {
        let mut bird = Bird::new();
        for expected in [1, 2, 0, 1] {
            bird.advance_animation();
            assert_eq!(bird.anim_frame, expected);
        }
    }

    #[test]
    fn pipe_pair_geometry() {
        let pair = PipePair::new(600.0);
        // Gap spans [300, 600]
        assert_eq!(pair.bottom.top(), 600.0);
        assert_eq!(pair.top.bottom(), 300.0);
        // Shared column centered on the spawn x
        assert_eq!(pair.center_x(), PIPE_SPAWN_X);
        assert_eq!(pair.bottom.center().x, PIPE_SPAWN_X);
        assert_eq!(pair.top.size, Vec2::new(PIPE_WIDTH, PIPE_HEIGHT));
    }

    #[test]
    fn pipe_pair_advances_left() {
        let mut pair = PipePair::new(400.0);
        let x0 = pair.center_x();
        pair.advance(PIPE_SPEED);
        assert_eq!(pair.center_x(), x0 - PIPE_SPEED);
        assert_eq!(pair.top.center().x, pair.bottom.center().x);
    }

    #[test]
    fn power_up_spawns_at_right_edge() {
        let p = PowerUp::new(PowerUpKind::DoubleScore);
        assert_eq!(p.rect.left(), WORLD_WIDTH);
        assert_eq!(p.rect.center().y, WORLD_HEIGHT / 2.0);
        assert_eq!(p.rect.size, Vec2::new(BIRD_WIDTH, BIRD_HEIGHT));
    }
}
