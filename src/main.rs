//! Brick Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use brick_pong::GameConfig;
    use brick_pong::renderer::{CanvasRenderer, draw};
    use brick_pong::sim::{Command, GamePhase, GameState, InputQueue, default_levels, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputQueue,
        renderer: CanvasRenderer,
        last_time: Option<f64>,
        last_phase: GamePhase,
    }

    impl Game {
        fn new(config: GameConfig, renderer: CanvasRenderer) -> Self {
            Self {
                state: GameState::new(config, default_levels()),
                input: InputQueue::new(),
                renderer,
                last_time: None,
                last_phase: GamePhase::Menu,
            }
        }

        /// Queue a command for the next frame
        fn queue(&mut self, command: Command) {
            // A finished game only restarts from a fresh state
            if command == Command::Start && self.state.phase == GamePhase::GameOver {
                let config = self.state.config.clone();
                let levels = self.state.levels.clone();
                self.state = GameState::new(config, levels);
                log::info!("Game restarted");
            }
            self.input.push(command);
        }

        fn frame(&mut self, time: f64) {
            let dt = self.last_time.map_or(0.0, |last| (time - last) as f32);
            self.last_time = Some(time);

            tick(&mut self.state, &mut self.input, dt);
            for event in self.state.drain_events() {
                log::debug!("{:?}", event);
            }

            let phase = self.state.phase;
            if phase != self.last_phase {
                log::info!("Phase {:?} -> {:?}", self.last_phase, phase);
                self.last_phase = phase;
            }

            draw(&self.state, &mut self.renderer);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Brick Pong starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("gameScreen")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"gameScreen\">");
            return;
        };
        let Some(renderer) = CanvasRenderer::new(&document, &canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let config = GameConfig::with_playfield(canvas.width() as f32, canvas.height() as f32);
        if let Err(e) = config.validate() {
            log::error!("Canvas too small: {}", e);
            return;
        }

        let game = Rc::new(RefCell::new(Game::new(config, renderer)));
        setup_keyboard(&document, game.clone());
        start_loop(game);
    }

    fn setup_keyboard(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(command) = Command::from_key(&event.key(), pressed) {
                    event.prevent_default();
                    game.borrow_mut().queue(command);
                }
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn start_loop(game: Rc<RefCell<Game>>) {
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next = callback.clone();

        *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
            game.borrow_mut().frame(time);
            request_frame(next.borrow().as_ref());
        }));

        request_frame(callback.borrow().as_ref());
    }

    fn request_frame(callback: Option<&Closure<dyn FnMut(f64)>>) {
        let (Some(window), Some(callback)) = (web_sys::window(), callback) else {
            return;
        };
        if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
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
    log::info!("Brick Pong (native) starting...");
    log::info!("Native mode runs a headless autopilot session - build for wasm32 to play");

    run_headless(10_000);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a session with the autopilot against the recording renderer
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(frames: u32) {
    use brick_pong::renderer::{RecordingRenderer, Sprite, draw};
    use brick_pong::sim::{Autopilot, GameEvent, GameState, InputQueue, tick};

    const FRAME_MS: f32 = 1000.0 / 60.0;

    let mut state = GameState::with_defaults();
    let mut input = InputQueue::new();
    let mut renderer = RecordingRenderer::new();
    let pilot = Autopilot::default();
    let mut bricks_destroyed = 0usize;

    for _ in 0..frames {
        if let Some(command) = pilot.next_command(&state) {
            input.push(command);
        }
        tick(&mut state, &mut input, FRAME_MS);

        for event in state.drain_events() {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks_destroyed += 1,
                GameEvent::WallBounce | GameEvent::PaddleHit => {}
                other => log::info!("{:?}", other),
            }
        }

        renderer.take();
        draw(&state, &mut renderer);
    }

    log::info!(
        "After {} frames: phase {:?}, level {}, {} lives, {} bricks destroyed, {} on screen",
        frames,
        state.phase,
        state.level_index + 1,
        state.lives,
        bricks_destroyed,
        renderer.sprite_count(Sprite::Brick)
    );
}
