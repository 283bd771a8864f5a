//! Letterfall entry point
//!
//! Handles platform-specific initialization and runs the game loop. The
//! browser build renders the play-field as absolutely-positioned DOM nodes
//! and drives the session from requestAnimationFrame; everything gameplay
//! lives in the `letterfall` library crate.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element};

    use letterfall::GameConfig;
    use letterfall::session::GameSession;

    /// Game instance holding the session and frame bookkeeping
    struct Game {
        session: GameSession,
        last_time: f64,
    }

    impl Game {
        fn new(config: GameConfig, seed: u64) -> Self {
            Self {
                session: GameSession::new(config, seed),
                last_time: 0.0,
            }
        }

        fn restart(&mut self, seed: u64) {
            self.last_time = 0.0;
            self.session.start(seed);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Letterfall starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(config, seed)));

        // Game-over overlay is driven straight from the session callback
        game.borrow_mut()
            .session
            .set_game_over_handler(Box::new(|score| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(el) = document.get_element_by_id("final-score") {
                        el.set_text_content(Some(&score.to_string()));
                    }
                    set_overlay(&document, "game-over", true);
                }
            }));

        setup_keyboard(game.clone());
        setup_start_button(game.clone(), "start-btn");
        setup_start_button(game.clone(), "restart-btn");

        set_overlay(&document, "start-screen", true);
        log::info!("Letterfall ready");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            game.borrow_mut().session.key_press(&event.key());
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Wire a start/restart button: hide the overlays, reset the session and
    /// kick off a fresh animation-frame loop
    fn setup_start_button(game: Rc<RefCell<Game>>, button_id: &str) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id(button_id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                set_overlay(&document, "start-screen", false);
                set_overlay(&document, "game-over", false);

                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                log::info!("New game with seed: {}", seed);
                request_animation_frame(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
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
        let keep_running = {
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 {
                (time - g.last_time) as f32
            } else {
                16.0
            };
            g.last_time = time;

            g.session.frame(dt_ms);

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                render(&document, &g.session);
            }

            g.session.is_running()
        };

        // The frame schedule is cancelled by simply not re-requesting once
        // the session leaves the running phase
        if keep_running {
            request_animation_frame(game);
        }
    }

    /// Push the session state into the DOM
    fn render(document: &Document, session: &GameSession) {
        if let Some(layer) = document.get_element_by_id("letters") {
            layer.set_inner_html("");
            for letter in &session.state.letters {
                if let Some(el) = make_div(document, "letter", letter.pos.x, letter.pos.y) {
                    el.set_text_content(Some(&letter.ch.to_string()));
                    let _ = layer.append_child(&el);
                }
            }
            for pop in &session.state.pops {
                if let Some(el) = make_div(document, "pop", pop.pos.x, pop.pos.y) {
                    el.set_text_content(Some("✨"));
                    let _ = layer.append_child(&el);
                }
            }
        }

        if let Some(el) = document.get_element_by_id("boundary") {
            let _ = el.set_attribute(
                "style",
                &format!("height:{:.2}%", session.state.boundary_height),
            );
        }

        if let Some(el) = document.get_element_by_id("hud-score") {
            el.set_text_content(Some(&session.state.score.to_string()));
        }
        if let Some(el) = document.get_element_by_id("hud-level") {
            el.set_text_content(Some(&session.state.level.to_string()));
        }
    }

    fn make_div(document: &Document, class: &str, x: f32, y: f32) -> Option<Element> {
        let el = document.create_element("div").ok()?;
        el.set_class_name(class);
        let _ = el.set_attribute("style", &format!("left:{:.2}%;top:{:.2}%", x, y));
        Some(el)
    }

    fn set_overlay(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "overlay" } else { "overlay hidden" });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use letterfall::{GameConfig, GameSession};

    env_logger::init();
    log::info!("Letterfall (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Scripted smoke session: synthetic frames, no input, play to game over
    let mut session = GameSession::new(GameConfig::load(), 0xC0FFEE);
    session.set_game_over_handler(Box::new(|score| {
        log::info!("Game over with final score {}", score);
    }));
    session.start(0xC0FFEE);

    let mut frames = 0u64;
    while session.is_running() && frames < 200_000 {
        session.frame(16.0);
        frames += 1;
    }
    println!(
        "Session ended after {} frames at level {} (boundary {:.0}%)",
        frames, session.state.level, session.state.boundary_height
    );
}
