//! Side Scroller entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use side_scroller::KeyState;
    use side_scroller::consts::DEFAULT_SEED;
    use side_scroller::renderer::build_draw_list;
    use side_scroller::sim::{FramePacer, SimulationState, TickInput, tick};
    use side_scroller::SimConfig;

    /// Game instance holding all state
    struct Game {
        state: SimulationState,
        keys: KeyState,
        pacer: FramePacer,
        last_time: f64,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        fn new(config: SimConfig, seed: u64, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: SimulationState::new(config, seed),
                keys: KeyState::new(),
                pacer: FramePacer::default(),
                last_time: 0.0,
                ctx,
            }
        }

        /// Run simulation ticks for this frame
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            let input = TickInput::from(self.keys.actions());
            for _ in 0..self.pacer.ticks_for_frame(dt) {
                tick(&mut self.state, &input);
            }
        }

        /// Render the current frame
        fn render(&self) {
            let config = &self.state.config;
            self.ctx.clear_rect(
                0.0,
                0.0,
                config.viewport_width as f64,
                config.viewport_height as f64,
            );
            for cmd in build_draw_list(&self.state) {
                self.ctx.set_fill_style_str(&cmd.color.to_css());
                self.ctx.fill_rect(
                    cmd.rect.left() as f64,
                    cmd.rect.top() as f64,
                    cmd.rect.size.x as f64,
                    cmd.rect.size.y as f64,
                );
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Side Scroller starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = SimConfig::default();
        canvas.set_width(config.viewport_width as u32);
        canvas.set_height(config.viewport_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64 ^ DEFAULT_SEED;
        let game = Rc::new(RefCell::new(Game::new(config, seed, ctx)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Side Scroller running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_down(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events are lost while unfocused, and no frames arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                g.keys.clear();
                g.pacer.reset();
                g.last_time = 0.0;
                log::info!("Keys released (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use side_scroller::consts::DEFAULT_SEED;
    use side_scroller::sim::{Obstacle, Player, SimulationState, TickInput, tick};
    use side_scroller::{Actions, SimConfig};

    /// Environment variable naming an optional JSON config file
    const CONFIG_ENV: &str = "SIDE_SCROLLER_CONFIG";
    const DEFAULT_TICKS: u64 = 1200;

    /// Final state printed after a headless run
    #[derive(Serialize)]
    struct Summary<'a> {
        seed: u64,
        ticks: u64,
        camera_x: f32,
        jumps: u32,
        landings: u32,
        blocked_ticks: u32,
        spawned: u64,
        player: &'a Player,
        obstacles: Vec<&'a Obstacle>,
    }

    /// Load the startup config, falling back to defaults on any error
    fn load_config() -> SimConfig {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            log::info!("Using default config");
            return SimConfig::default();
        };

        match SimConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::error!("Failed to load config from {}: {}", path, e);
                log::warn!("Using default config");
                SimConfig::default()
            }
        }
    }

    /// Scripted input: run right, hop every second, hop again when blocked
    fn scripted_input(tick_index: u64, blocked_last: bool) -> TickInput {
        let mut actions = Actions::RIGHT | Actions::RUN;
        if blocked_last || tick_index.is_multiple_of(60) {
            actions |= Actions::JUMP;
        }
        actions.into()
    }

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let ticks = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TICKS);
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);

        let mut state = SimulationState::new(load_config(), seed);
        log::info!("Headless run: {} ticks, seed {}", ticks, seed);

        let (mut jumps, mut landings, mut blocked_ticks) = (0, 0, 0);
        let mut blocked_last = false;
        for i in 0..ticks {
            let report = tick(&mut state, &scripted_input(i, blocked_last));
            jumps += report.physics.jumped as u32;
            landings += report.physics.landed as u32;
            blocked_ticks += report.physics.blocked as u32;
            blocked_last = report.physics.blocked;
        }

        let summary = Summary {
            seed,
            ticks: state.time_ticks,
            camera_x: state.camera.x,
            jumps,
            landings,
            blocked_ticks,
            spawned: state.spawner.spawned,
            player: &state.player,
            obstacles: state.obstacles.iter().collect(),
        };

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Side Scroller (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
