//! Game state and core simulation types
//!
//! One explicit state object owns everything the simulation mutates, so the
//! advance and collision logic can be unit tested without a live canvas.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::ground_y;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Pre-start, nothing simulates
    Idle,
    /// Active gameplay, one tick per frame
    Running,
    /// Run ended by collision
    Over,
}

/// The player's bird
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    /// Position of the bird center. x is constant, the world scrolls past it.
    pub pos: Vec2,
    /// Vertical velocity in pixels per frame (positive is down)
    pub velocity: f32,
    pub radius: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_START_Y),
            velocity: 0.0,
            radius: BIRD_RADIUS,
        }
    }
}

impl Bird {
    /// Overwrite velocity with the flap impulse (not additive)
    pub fn flap(&mut self) {
        self.velocity = FLAP_LIFT;
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// A pipe pair: a top segment and a bottom segment with a gap between them
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    /// Left edge, decreases every frame
    pub x: f32,
    /// Height of the top segment (also the gap's top boundary)
    pub top: f32,
    /// Height of the bottom segment, sized so top + gap + bottom fills the
    /// playfield down to the ground
    pub bottom: f32,
    /// Set once the bird has passed this pipe, so it scores at most once
    pub scored: bool,
}

impl Pipe {
    /// Spawn a pipe at the right edge of the playfield
    pub fn new(top: f32) -> Self {
        Self {
            x: PLAYFIELD_WIDTH,
            top,
            bottom: ground_y() - top - PIPE_GAP,
            scored: false,
        }
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Top boundary of the passable gap
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.top
    }

    /// Bottom boundary of the passable gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.top + PIPE_GAP
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap placement RNG
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Active pipes in spawn order (equals left-to-right order)
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// Frames since the last pipe spawn
    pub spawn_timer: i32,
}

impl GameState {
    /// Create a fresh state in the pre-start phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            bird: Bird::default(),
            pipes: Vec::new(),
            score: 0,
            spawn_timer: 0,
        }
    }

    /// Start (or restart) a run: reset the bird, clear pipes, zero score and
    /// spawn timer, enter the Running phase. The RNG keeps its stream so a
    /// restart gets new gap positions.
    pub fn start(&mut self) {
        self.bird = Bird::default();
        self.pipes.clear();
        self.score = 0;
        self.spawn_timer = 0;
        self.phase = GamePhase::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_segments_fill_playfield() {
        let pipe = Pipe::new(200.0);
        assert_eq!(pipe.top + PIPE_GAP + pipe.bottom, ground_y());
        assert_eq!(pipe.gap_bottom() - pipe.gap_top(), PIPE_GAP);
        assert_eq!(pipe.x, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_start_resets_run_state() {
        let mut state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Idle);

        state.start();
        state.score = 5;
        state.bird.pos.y = 400.0;
        state.bird.velocity = 9.0;
        state.pipes.push(Pipe::new(100.0));
        state.spawn_timer = 42;
        state.phase = GamePhase::Over;

        state.start();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.spawn_timer, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird.pos.y, BIRD_START_Y);
        assert_eq!(state.bird.velocity, 0.0);
    }
}
