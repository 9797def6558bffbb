//! Lane Dodger entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, Event, EventTarget, KeyboardEvent};

    use lane_dodger::GameConfig;
    use lane_dodger::consts::*;
    use lane_dodger::platform::{
        Button, TouchZone, command_for_button, command_for_key, command_for_touch,
    };
    use lane_dodger::renderer::{DomRenderer, FrameSnapshot};
    use lane_dodger::sim::{Command, FrameHost, GameLoop, GameSession, TickOutcome};

    /// Records frame requests; flushed to requestAnimationFrame once the
    /// game is no longer borrowed
    #[derive(Default)]
    struct RafHost {
        wanted: bool,
    }

    impl FrameHost for RafHost {
        fn request_frame(&mut self) {
            self.wanted = true;
        }
    }

    /// Game instance holding all state
    struct Game {
        game_loop: GameLoop<RafHost>,
        renderer: DomRenderer,
    }

    impl Game {
        fn dispatch(&mut self, command: Command) {
            self.game_loop.dispatch(command);
            self.render();
        }

        /// Render the current frame
        fn render(&mut self) {
            let snapshot = FrameSnapshot::capture(self.game_loop.session());
            if let Err(e) = self.renderer.render(&snapshot) {
                log::warn!("Render error: {:?}", e);
            }
        }

        fn take_frame_request(&mut self) -> bool {
            std::mem::take(&mut self.game_loop.host_mut().wanted)
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Lane Dodger starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let width = window
            .inner_width()?
            .as_f64()
            .map_or(DEFAULT_SCREEN_WIDTH, |w| w as f32);
        let height = window
            .inner_height()?
            .as_f64()
            .map_or(DEFAULT_SCREEN_HEIGHT, |h| h as f32);

        let seed = js_sys::Date::now() as u64;
        let session = GameSession::new(GameConfig::for_viewport(width, height), seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let default_difficulty = session.selected_difficulty();
        log::info!("Game initialized {}x{} with seed: {}", width, height, seed);

        let renderer = DomRenderer::new(document.clone())?;
        renderer.mark_selected_difficulty(default_difficulty.as_str())?;

        let game = Rc::new(RefCell::new(Game {
            game_loop: GameLoop::new(session, RafHost::default()),
            renderer,
        }));
        game.borrow_mut().render();

        setup_keyboard(&document, game.clone());
        setup_touch_zones(&document, game.clone());
        setup_buttons(&document, game.clone());
        setup_difficulty_buttons(&document, game)?;

        log::info!("Lane Dodger ready!");
        Ok(())
    }

    fn listen<F>(target: &EventTarget, kind: &str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Click and touchstart both count as a tap
    fn on_tap<F>(el: &Element, mut handler: F)
    where
        F: FnMut() + Clone + 'static,
    {
        let mut on_click = handler.clone();
        listen(el, "click", move |_event| on_click());
        listen(el, "touchstart", move |event| {
            event.prevent_default();
            handler();
        });
    }

    fn dispatch(game: &Rc<RefCell<Game>>, command: Command) {
        game.borrow_mut().dispatch(command);
        schedule(game);
    }

    fn schedule(game: &Rc<RefCell<Game>>) {
        if game.borrow_mut().take_frame_request() {
            request_animation_frame(game.clone());
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if let TickOutcome::GameOver { final_score } = g.game_loop.on_frame() {
                log::info!("Game over - final score {}", final_score);
            }
            g.render();
        }

        schedule(&game);
    }

    fn setup_keyboard(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        listen(document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(command) = command_for_key(&key_event.key()) {
                dispatch(&game, command);
            }
        });
    }

    fn setup_touch_zones(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        for (id, zone) in [("leftZone", TouchZone::Left), ("rightZone", TouchZone::Right)] {
            let Some(el) = document.get_element_by_id(id) else {
                log::warn!("No #{} element, touch zone disabled", id);
                continue;
            };
            let game = game.clone();
            listen(&el, "touchstart", move |event| {
                event.prevent_default();
                let phase = game.borrow().game_loop.session().phase();
                dispatch(&game, command_for_touch(zone, phase));
            });
        }
    }

    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        let buttons = [
            ("playButton", Button::Play),
            ("restartButton", Button::Restart),
            ("pauseBtn", Button::Pause),
        ];
        for (id, button) in buttons {
            let Some(el) = document.get_element_by_id(id) else {
                log::warn!("No #{} element", id);
                continue;
            };
            let game = game.clone();
            on_tap(&el, move || match command_for_button(&button) {
                Ok(command) => dispatch(&game, command),
                Err(e) => log::warn!("{}", e),
            });
        }
    }

    fn setup_difficulty_buttons(
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let buttons = document.query_selector_all(".difficulty-btn")?;
        for i in 0..buttons.length() {
            let Some(el) = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let name = el.get_attribute("data-difficulty").unwrap_or_default();
            let game = game.clone();
            on_tap(&el, move || {
                match command_for_button(&Button::Difficulty(name.clone())) {
                    Ok(command) => {
                        let mut g = game.borrow_mut();
                        g.dispatch(command);
                        if let Err(e) = g.renderer.mark_selected_difficulty(&name) {
                            log::warn!("Could not highlight difficulty: {:?}", e);
                        }
                    }
                    Err(e) => log::warn!("{}", e),
                }
            });
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use lane_dodger::consts::HIT_RANGE_Y;
    use lane_dodger::sim::{Command, FrameHost, GameLoop, GameSession, Lane, TickOutcome};
    use lane_dodger::{GameConfig, GameError};

    /// Ten minutes of play at 60 Hz
    const MAX_FRAMES: u64 = 36_000;
    /// How far above the ship the autopilot starts dodging
    const LOOKAHEAD: f32 = 160.0;

    #[derive(Default)]
    struct QueuedHost {
        queued: bool,
    }

    impl FrameHost for QueuedHost {
        fn request_frame(&mut self) {
            self.queued = true;
        }
    }

    fn lane_is_clear(session: &GameSession, lane: Lane) -> bool {
        let player_y = session.player_bottom_y();
        !session.obstacles().iter().any(|o| {
            o.lane == lane && o.y > player_y - LOOKAHEAD && o.y < player_y + HIT_RANGE_Y
        })
    }

    /// Step toward the nearest clear lane when the current one is threatened
    fn autopilot(session: &GameSession) -> Option<Command> {
        let current = session.player().lane;
        if lane_is_clear(session, current) {
            return None;
        }
        let target = Lane::ALL
            .into_iter()
            .filter(|&lane| lane_is_clear(session, lane))
            .min_by_key(|lane| lane.index().abs_diff(current.index()))?;
        if target.index() < current.index() {
            Some(Command::MoveLeft)
        } else {
            Some(Command::MoveRight)
        }
    }

    fn seed_from_clock() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }

    pub fn run() -> Result<(), GameError> {
        let mut args = std::env::args().skip(1);
        let difficulty = args.next().unwrap_or_else(|| "medium".to_string());
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(seed_from_clock);

        log::info!("Lane Dodger (headless) starting with seed {}", seed);

        let session = GameSession::new(GameConfig::default(), seed)?;
        let mut game = GameLoop::new(session, QueuedHost::default());
        game.start_with(&difficulty)?;

        let mut outcome = TickOutcome::Idle;
        while std::mem::take(&mut game.host_mut().queued)
            && game.session().frame_count() < MAX_FRAMES
        {
            if let Some(command) = autopilot(game.session()) {
                game.dispatch(command);
            }
            outcome = game.on_frame();
        }

        let session = game.session();
        match outcome {
            TickOutcome::GameOver { final_score } => println!(
                "{}: hit after {} frames, final score {}",
                session.active_difficulty().label,
                session.frame_count(),
                final_score
            ),
            _ => println!(
                "{}: survived {} frames, score {}",
                session.active_difficulty().label,
                session.frame_count(),
                session.score()
            ),
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = headless::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
