//! Collision predicates
//!
//! Pure functions of bird and pipe state, no side effects. The tick decides
//! what to do with a hit; these only answer whether one happened.

use crate::ground_y;

use super::state::{Bird, Pipe};

/// Bird's bottom edge has reached the top of the ground strip
#[inline]
pub fn hit_ground(bird: &Bird) -> bool {
    bird.bottom() >= ground_y()
}

/// Bird's top edge has reached the ceiling
#[inline]
pub fn hit_ceiling(bird: &Bird) -> bool {
    bird.top() <= 0.0
}

/// Horizontal spans of bird and pipe overlap
#[inline]
pub fn overlaps_horizontally(bird: &Bird, pipe: &Pipe) -> bool {
    bird.right() > pipe.x && bird.left() < pipe.right()
}

/// Bird overlaps the pipe horizontally and sticks out of the gap
pub fn hit_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    overlaps_horizontally(bird, pipe)
        && (bird.top() < pipe.gap_top() || bird.bottom() > pipe.gap_bottom())
}

/// Full collision check: ground, ceiling, or any pipe
pub fn check_collision(bird: &Bird, pipes: &[Pipe]) -> bool {
    hit_ground(bird) || hit_ceiling(bird) || pipes.iter().any(|pipe| hit_pipe(bird, pipe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn bird_at(y: f32) -> Bird {
        Bird {
            pos: glam::Vec2::new(BIRD_X, y),
            ..Bird::default()
        }
    }

    #[test]
    fn test_ground_boundary_inclusive() {
        // Bottom edge exactly at ground top counts as a hit (>= boundary)
        let bird = bird_at(ground_y() - BIRD_RADIUS);
        assert!(hit_ground(&bird));

        let bird = bird_at(ground_y() - BIRD_RADIUS - 0.001);
        assert!(!hit_ground(&bird));
    }

    #[test]
    fn test_ceiling_boundary_inclusive() {
        // Top edge exactly at 0 counts as a hit (<= boundary)
        let bird = bird_at(BIRD_RADIUS);
        assert!(hit_ceiling(&bird));

        let bird = bird_at(BIRD_RADIUS + 0.001);
        assert!(!hit_ceiling(&bird));
    }

    #[test]
    fn test_pipe_hit_above_gap() {
        let mut pipe = Pipe::new(200.0);
        pipe.x = BIRD_X - PIPE_WIDTH / 2.0; // overlapping the bird

        // Top edge poking above the gap
        let bird = bird_at(pipe.gap_top() + BIRD_RADIUS - 1.0);
        assert!(hit_pipe(&bird, &pipe));
    }

    #[test]
    fn test_pipe_hit_below_gap() {
        let mut pipe = Pipe::new(200.0);
        pipe.x = BIRD_X - PIPE_WIDTH / 2.0;

        let bird = bird_at(pipe.gap_bottom() - BIRD_RADIUS + 1.0);
        assert!(hit_pipe(&bird, &pipe));
    }

    #[test]
    fn test_pipe_miss_inside_gap() {
        let mut pipe = Pipe::new(200.0);
        pipe.x = BIRD_X - PIPE_WIDTH / 2.0;

        let bird = bird_at((pipe.gap_top() + pipe.gap_bottom()) / 2.0);
        assert!(!hit_pipe(&bird, &pipe));
        assert!(!check_collision(&bird, &[pipe]));
    }

    #[test]
    fn test_pipe_miss_outside_horizontal_span() {
        // Pipe far to the right of the bird - vertical overlap is irrelevant
        let pipe = Pipe::new(200.0);
        let bird = bird_at(pipe.gap_top() - 10.0);
        assert!(!overlaps_horizontally(&bird, &pipe));
        assert!(!hit_pipe(&bird, &pipe));
    }
}
