//! Flappy Canvas entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use flappy_canvas::HighScore;
    use flappy_canvas::consts::*;
    use flappy_canvas::render::Renderer;
    use flappy_canvas::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        high: HighScore,
        renderer: Renderer,
    }

    impl Game {
        fn new(seed: u64, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(seed),
                input: TickInput::default(),
                high: HighScore::load(),
                renderer: Renderer::new(ctx),
            }
        }

        /// Advance one frame. Returns false once the run has ended and the
        /// loop should stop rescheduling itself.
        fn frame(&mut self) -> bool {
            tick(&mut self.state, &self.input);
            // Clear one-shot inputs after processing
            self.input.flap = false;

            if self.state.phase == GamePhase::Over {
                self.on_game_over();
            }

            self.renderer.draw(&self.state, &self.high);
            self.state.phase == GamePhase::Running
        }

        /// Collision ended the run: persist a new best if the run set one
        /// and swap the visible controls to the restart affordance.
        fn on_game_over(&mut self) {
            if self.high.update(self.state.score) {
                self.high.save();
            }
            set_display("startButton", "none");
            set_display("restartButton", "block");
            log::info!(
                "Game over (score {}, best {})",
                self.state.score,
                self.high.best
            );
        }

        /// Start or restart a run and hide both buttons while it plays
        fn start(&mut self) {
            self.state.start();
            self.input = TickInput::default();
            set_display("startButton", "none");
            set_display("restartButton", "none");
            log::info!("Run started");
        }
    }

    fn set_display(id: &str, value: &str) {
        let document = web_sys::window().and_then(|w| w.document());
        if let Some(el) = document.and_then(|d| d.get_element_by_id(id)) {
            if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                let _ = el.style().set_property("display", value);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Canvas starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, ctx)));
        log::info!("Game initialized with seed: {}", seed);

        // Initial page state: start visible, restart hidden, nothing running
        set_display("startButton", "block");
        set_display("restartButton", "none");

        setup_input_handlers(game.clone());
        setup_start_buttons(game);

        log::info!("Flappy Canvas ready");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        // Any key press is a flap; the tick ignores it outside Running
        let document = web_sys::window().unwrap().document().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::KeyboardEvent| {
            game.borrow_mut().input.flap = true;
        });
        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_start_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Start and restart both map to the same transition
        for id in ["startButton", "restartButton"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    let was_running = game.borrow().state.phase == GamePhase::Running;
                    game.borrow_mut().start();
                    // The loop stops itself on game over; kick off a new one
                    // unless a run was already being driven
                    if !was_running {
                        request_animation_frame(game.clone());
                    }
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_running = game.borrow_mut().frame();
        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Canvas (native) starting...");
    log::info!("Native mode has no renderer - build for wasm32 to play in a browser");

    println!("\nRunning simulation sanity check...");
    sanity_check_free_fall();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless smoke test: with no flaps, gravity must end the run on the ground
#[cfg(not(target_arch = "wasm32"))]
fn sanity_check_free_fall() {
    use flappy_canvas::sim::{GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new(1);
    state.start();
    let input = TickInput::default();
    for _ in 0..120 {
        tick(&mut state, &input);
    }
    assert_eq!(state.phase, GamePhase::Over, "bird should have hit the ground");
    assert_eq!(state.score, 0);
    println!("✓ Free fall ends the run as expected");
}
