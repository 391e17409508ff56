//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. All
//! timer-driven behavior (pipe spawns, wing beats, power-up expiry) is
//! expressed as tick counters checked inside the single update step, so
//! periodicity is exact and fully reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{bird_hit_boundary, bird_hit_pipes};
use super::state::{ActiveEffect, GameState, PipePair, PowerUp, PowerUpKind};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap request: restarts the run while waiting, lifts the bird while
    /// playing
    pub flap: bool,
}

/// Things that happened during a tick that the outside world may care
/// about (sound cues, logging). The sim never acts on these itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flap,
    Restarted,
    PipeSpawned,
    PowerUpSpawned,
    PowerUpCollected,
    PowerUpExpired,
    PipeCollision,
    BoundaryDeath,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Input first. A flap on the waiting screen restarts; restart sets the
    // start velocity itself, so the impulse is never applied there.
    if input.flap {
        if state.active {
            state.bird.flap();
            events.push(GameEvent::Flap);
        } else {
            state.restart();
            events.push(GameEvent::Restarted);
        }
    }

    // The counter runs through inactive periods: spawn cadence and the
    // sim clock keep their rhythm across the waiting screen.
    state.time_ticks += 1;

    if state.active {
        update_effect(state, &mut events);

        state.bird.fall(state.gravity);
        if state.time_ticks % FLAP_ANIM_TICKS == 0 {
            state.bird.advance_animation();
        }

        if state.time_ticks % PIPE_SPAWN_TICKS == 0 {
            spawn_pipe_pair(state, &mut events);
        }
        for pair in &mut state.pipes {
            pair.advance(state.pipe_speed);
        }

        if bird_hit_pipes(&state.bird.rect, &state.pipes) {
            state.end_run();
            events.push(GameEvent::PipeCollision);
        } else if bird_hit_boundary(&state.bird.rect) {
            state.end_run();
            events.push(GameEvent::BoundaryDeath);
        }

        update_power_up(state, &mut events);

        // The tick that ended the run does not count itself; the folded
        // high score and the on-screen final score must agree.
        if state.active {
            state.score += 1;
        }
    }

    // Decorative ground scroll runs on both screens
    state.floor_x -= FLOOR_SPEED;
    if state.floor_x <= -WORLD_WIDTH {
        state.floor_x = 0.0;
    }

    events
}

/// Spawn one pipe pair at a randomly chosen gap height. Every
/// `POWER_UP_PIPE_INTERVAL`-th pair also tries to spawn a power-up.
pub fn spawn_pipe_pair(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut rng = spawn_rng(state.seed, state.pipe_count);
    let gap_y = PIPE_GAP_CENTERS[rng.random_range(0..PIPE_GAP_CENTERS.len())];
    state.pipes.push(PipePair::new(gap_y));
    state.pipe_count += 1;
    events.push(GameEvent::PipeSpawned);
    log::debug!("pipe {} spawned, gap at {gap_y}", state.pipe_count);

    if state.pipe_count % POWER_UP_PIPE_INTERVAL == 0 {
        spawn_power_up(state, events);
    }
}

/// Create the pending power-up. No-op while one is already pending, so at
/// most one exists at any time.
pub fn spawn_power_up(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.power_up.is_some() {
        return;
    }
    let power_up = PowerUp::new(PowerUpKind::DoubleScore);
    log::debug!("power-up {} spawned", power_up.kind.as_str());
    state.power_up = Some(power_up);
    events.push(GameEvent::PowerUpSpawned);
}

/// Expire the live effect once its lifetime has elapsed. Polled per tick,
/// so precision is bounded below by the tick interval.
fn update_effect(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let Some(effect) = state.effect else { return };
    let elapsed = state.clock_ms().saturating_sub(effect.activated_at_ms);
    if elapsed > POWER_UP_DURATION_MS {
        // Restore anything a non-instant effect may have bent
        state.pipe_speed = PIPE_SPEED;
        state.gravity = GRAVITY;
        state.effect = None;
        log::debug!("power-up {} expired after {elapsed} ms", effect.kind.as_str());
        events.push(GameEvent::PowerUpExpired);
    }
}

/// Advance the pending power-up: collect it on contact, move it with the
/// pipes, drop it once it leaves the left edge uncollected.
fn update_power_up(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let Some(power_up) = state.power_up.as_mut() else {
        return;
    };

    if state.bird.rect.overlaps(&power_up.rect) {
        let kind = power_up.kind;
        state.power_up = None;
        collect_power_up(state, kind, events);
        return;
    }

    power_up.rect.translate(Vec2::new(-state.pipe_speed, 0.0));
    if power_up.rect.right() < 0.0 {
        log::debug!("power-up drifted off-screen uncollected");
        state.power_up = None;
    }
}

/// Apply the instant part of a collected power-up and start its timer
fn collect_power_up(state: &mut GameState, kind: PowerUpKind, events: &mut Vec<GameEvent>) {
    match kind {
        PowerUpKind::DoubleScore => {
            state.score *= 2;
        }
    }
    state.effect = Some(ActiveEffect {
        kind,
        activated_at_ms: state.clock_ms(),
    });
    log::info!("power-up {} collected, score now {}", kind.as_str(), state.score);
    events.push(GameEvent::PowerUpCollected);
}

/// Deterministic per-spawn RNG: varies run to run via the seed, pipe to
/// pipe via the counter.
fn spawn_rng(seed: u64, counter: u32) -> Pcg32 {
    let mixed = (counter as u64).wrapping_mul(2654435761).wrapping_add(seed);
    Pcg32::seed_from_u64(mixed)
}
