//! Collision detection
//!
//! Nothing in here is an error path: every hit is an ordinary state
//! transition (active -> waiting screen), decided by plain AABB overlap
//! against the pipes plus two world boundary lines.

use super::rect::Rect;
use super::state::PipePair;
use crate::consts::{CEILING_Y, FLOOR_Y};

/// True if the bird overlaps either half of any pipe pair
pub fn bird_hit_pipes(bird: &Rect, pipes: &[PipePair]) -> bool {
    pipes
        .iter()
        .any(|pair| bird.overlaps(&pair.top) || bird.overlaps(&pair.bottom))
}

/// True if the bird has left the playable band: top edge at or above the
/// ceiling line, or bottom edge at or below the floor line.
pub fn bird_hit_boundary(bird: &Rect) -> bool {
    bird.top() <= CEILING_Y || bird.bottom() >= FLOOR_Y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Bird;
    use glam::Vec2;

    fn bird_at(y: f32) -> Rect {
        let mut bird = Bird::new();
        bird.rect.set_center(Vec2::new(BIRD_START_X, y));
        bird.rect
    }

    #[test]
    fn bird_through_gap_is_safe() {
        // Gap spans [300, 600]; put the pair over the bird's column
        let mut pair = PipePair::new(600.0);
        pair.advance(PIPE_SPAWN_X - BIRD_START_X);
        assert_eq!(pair.center_x(), BIRD_START_X);

        assert!(!bird_hit_pipes(&bird_at(450.0), &[pair]));
    }

    #[test]
    fn bird_into_bottom_pipe_hits() {
        let mut pair = PipePair::new(600.0);
        pair.advance(PIPE_SPAWN_X - BIRD_START_X);
        assert!(bird_hit_pipes(&bird_at(650.0), &[pair]));
    }

    #[test]
    fn bird_into_top_pipe_hits() {
        let mut pair = PipePair::new(600.0);
        pair.advance(PIPE_SPAWN_X - BIRD_START_X);
        assert!(bird_hit_pipes(&bird_at(250.0), &[pair]));
    }

    #[test]
    fn distant_pipe_is_ignored() {
        // Freshly spawned pair is still far off to the right
        let pair = PipePair::new(600.0);
        assert!(!bird_hit_pipes(&bird_at(600.0), &[pair]));
    }

    #[test]
    fn floor_line_ends_the_run() {
        // Center y=950 puts the bottom edge well past the 900 floor line
        assert!(bird_hit_boundary(&bird_at(950.0)));
        // Hovering just above it is fine
        assert!(!bird_hit_boundary(&bird_at(FLOOR_Y - BIRD_HEIGHT)));
    }

    #[test]
    fn ceiling_line_ends_the_run() {
        assert!(bird_hit_boundary(&bird_at(CEILING_Y)));
        // On-screen near the top is fine; the ceiling sits 100 units above
        assert!(!bird_hit_boundary(&bird_at(50.0)));
    }
}
