//! Per-frame simulation advance
//!
//! One tick corresponds to one rendered frame. The host (the rAF loop on web)
//! calls `tick` once per frame while the phase is Running; Idle and Over both
//! halt the simulation.

use rand::Rng;

use crate::consts::*;
use crate::ground_y;

use super::collision::check_collision;
use super::state::{GamePhase, GameState, Pipe};

/// Input flags for a single tick. One-shot: the host sets a flag when the
/// event fires and clears it after the tick that consumed it.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap impulse (any key press while running)
    pub flap: bool,
}

/// Advance the game state by one frame
///
/// Order matters: flap, gravity, pipe spawning, pipe movement with scoring
/// and recycling, then the collision check that may end the run.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Flap overwrites velocity; gravity then accumulates on top of it
    if input.flap {
        state.bird.flap();
    }
    state.bird.velocity += GRAVITY;
    state.bird.pos.y += state.bird.velocity;

    state.spawn_timer += 1;
    if state.spawn_timer > PIPE_SPAWN_INTERVAL {
        spawn_pipe(state);
        state.spawn_timer = 0;
    }

    let bird_x = state.bird.pos.x;
    for pipe in &mut state.pipes {
        pipe.x -= PIPE_SPEED;

        // Score the first frame the trailing edge passes the bird
        if !pipe.scored && pipe.right() < bird_x {
            state.score += 1;
            pipe.scored = true;
        }
    }
    // Recycle pipes fully past the left edge, preserving order
    state.pipes.retain(|pipe| pipe.right() >= 0.0);

    if check_collision(&state.bird, &state.pipes) {
        state.phase = GamePhase::Over;
    }
}

/// Spawn one pipe at the right edge with a uniformly sampled gap position.
/// The sample bounds keep at least `PIPE_MARGIN` of pipe above the gap and
/// below it, so the gap always fits on screen.
fn spawn_pipe(state: &mut GameState) {
    let span = ground_y() - PIPE_GAP - 2.0 * PIPE_MARGIN;
    let top = PIPE_MARGIN + state.rng.random_range(0.0..span);
    state.pipes.push(Pipe::new(top));
}
