//! Canvas 2D rendering
//!
//! A pure read of the game state: nothing here mutates the simulation. The
//! whole scene is redrawn every frame - pipes, bird, ground, score text, and
//! the game-over overlay.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::ground_y;
use crate::highscore::HighScore;
use crate::sim::{GamePhase, GameState};

const PIPE_COLOR: &str = "green";
const BIRD_COLOR: &str = "yellow";
const GROUND_COLOR: &str = "green";
const TEXT_COLOR: &str = "black";
const GAME_OVER_COLOR: &str = "red";
const RECORD_COLOR: &str = "gold";

/// Renderer bound to one 2D canvas context
pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Draw one frame of the current state
    pub fn draw(&self, state: &GameState, high: &HighScore) {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            PLAYFIELD_WIDTH as f64,
            PLAYFIELD_HEIGHT as f64,
        );

        // Pipes: two filled rects per pipe, above and below the gap
        ctx.set_fill_style_str(PIPE_COLOR);
        for pipe in &state.pipes {
            ctx.fill_rect(pipe.x as f64, 0.0, PIPE_WIDTH as f64, pipe.top as f64);
            ctx.fill_rect(
                pipe.x as f64,
                pipe.gap_bottom() as f64,
                PIPE_WIDTH as f64,
                pipe.bottom as f64,
            );
        }

        // Bird
        ctx.begin_path();
        let _ = ctx.arc(
            state.bird.pos.x as f64,
            state.bird.pos.y as f64,
            state.bird.radius as f64,
            0.0,
            TAU,
        );
        ctx.set_fill_style_str(BIRD_COLOR);
        ctx.fill();
        ctx.close_path();

        // Ground strip
        ctx.set_fill_style_str(GROUND_COLOR);
        ctx.fill_rect(
            0.0,
            ground_y() as f64,
            PLAYFIELD_WIDTH as f64,
            GROUND_HEIGHT as f64,
        );

        // Scores
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font("24px Arial");
        let _ = ctx.fill_text(&format!("Score: {}", state.score), 10.0, 30.0);
        let _ = ctx.fill_text(&format!("High Score: {}", high.best), 10.0, 60.0);

        if state.phase == GamePhase::Over {
            ctx.set_fill_style_str(GAME_OVER_COLOR);
            ctx.set_font("48px Arial");
            let _ = ctx.fill_text(
                "Game Over",
                (PLAYFIELD_WIDTH / 2.0 - 140.0) as f64,
                (PLAYFIELD_HEIGHT / 2.0) as f64,
            );

            if high.is_record(state.score) {
                ctx.set_fill_style_str(RECORD_COLOR);
                ctx.set_font("36px Arial");
                let _ = ctx.fill_text(
                    "New High Score!",
                    (PLAYFIELD_WIDTH / 2.0 - 140.0) as f64,
                    (PLAYFIELD_HEIGHT / 2.0 + 50.0) as f64,
                );
            }
        }
    }
}
