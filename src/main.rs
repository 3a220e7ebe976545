//! Pixel Invaders entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use pixel_invaders::platform::{FrameClock, KeyEvent, apply_key, auto_pause};
    use pixel_invaders::renderer::{QuadBatch, RenderState, draw_scene};
    use pixel_invaders::sim::{GameState, PcgRandom};
    use pixel_invaders::ui::{HudInfo, HudText};
    use pixel_invaders::{InvadersError, Result, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        clock: FrameClock,
        batch: QuadBatch,
        /// Last HUD pushed to the DOM
        hud: Option<HudText>,
    }

    impl Game {
        fn new() -> Self {
            let rng = PcgRandom::from_entropy();
            log::info!("Game initialized with seed: {}", rng.seed());
            Self {
                state: GameState::new(Tuning::default(), Box::new(rng)),
                render_state: None,
                clock: FrameClock::default(),
                batch: QuadBatch::with_capacity(4096),
                hud: None,
            }
        }

        fn frame(&mut self, time: f64) {
            let dt = self.clock.tick(time);
            self.state.update(dt);

            draw_scene(&self.state, &mut self.batch);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM (only when the text changed)
        fn update_hud(&mut self, document: &Document) {
            let text = HudText::new(&HudInfo::from_state(&self.state));
            if self.hud.as_ref() == Some(&text) {
                return;
            }

            set_text(document, "hud-score", &text.score);
            set_text(document, "hud-lives", &text.lives);
            set_text(document, "hud-level", &text.level);

            if let Some(el) = document.get_element_by_id("overlay") {
                match text.overlay {
                    Some(overlay) => {
                        set_text(document, "overlay-title", overlay.title);
                        set_text(document, "overlay-subtitle", overlay.subtitle);
                        let _ = el.class_list().remove_1("hidden");
                    }
                    None => {
                        let _ = el.class_list().add_1("hidden");
                    }
                }
            }

            self.hud = Some(text);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn document() -> Result<Document> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| InvadersError::SurfaceUnavailable("no document".into()))
    }

    pub async fn run() -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| InvadersError::SurfaceUnavailable("no window".into()))?;
        let document = document()?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| InvadersError::SurfaceUnavailable("no #game-canvas".into()))?;

        let game = Rc::new(RefCell::new(Game::new()));

        // Backing store follows device pixel ratio; the scene stays in canvas units
        let canvas_size = game.borrow().state.canvas_size();
        let dpr = window.device_pixel_ratio();
        let width = (canvas_size.x as f64 * dpr) as u32;
        let height = (canvas_size.y as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| InvadersError::SurfaceUnavailable(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| InvadersError::NoAdapter)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (canvas_size.x, canvas_size.y),
        )
        .await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone())?;
        setup_auto_pause(game.clone())?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.class_list().add_1("hidden");
        }

        request_animation_frame(game);

        log::info!("Pixel Invaders running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| InvadersError::SurfaceUnavailable("no window".into()))?;

        for (name, kind) in [("keydown", KeyEvent::Down), ("keyup", KeyEvent::Up)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let handled = apply_key(&mut game.borrow_mut().state, &event.code(), kind);
                // Keep Space/arrows from scrolling the page
                if handled {
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
        Ok(())
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| InvadersError::SurfaceUnavailable("no window".into()))?;
        let document = document()?;

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    // rAF stops while hidden; don't bill the gap to the next frame
                    g.clock.reset();
                    if auto_pause(&mut g.state) {
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                if auto_pause(&mut game.borrow_mut().state) {
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.frame(time);
            if let Ok(document) = document() {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    log::info!("Pixel Invaders starting...");
    if let Err(e) = wasm_game::run().await {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> pixel_invaders::Result<()> {
    env_logger::init();
    log::info!("Pixel Invaders (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => pixel_invaders::Tuning::load(&path)?,
        None => pixel_invaders::Tuning::default(),
    };

    headless_demo(tuning, 42);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation with a scripted player for a minute of game time
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo(tuning: pixel_invaders::Tuning, seed: u64) {
    use pixel_invaders::platform::{FrameClock, KeyEvent, apply_key};
    use pixel_invaders::renderer::{QuadBatch, draw_scene};
    use pixel_invaders::sim::{GamePhase, GameState};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const FRAMES: u32 = 60 * 60;

    let mut state = GameState::with_seed(tuning, seed);
    let mut clock = FrameClock::default();
    let mut batch = QuadBatch::new();

    apply_key(&mut state, "Enter", KeyEvent::Down);

    let mut peak_quads = 0;
    for frame in 0..FRAMES {
        // Sweep across the screen every two seconds, firing constantly
        let going_left = (frame / 120) % 2 == 0;
        apply_key(
            &mut state,
            "ArrowLeft",
            if going_left { KeyEvent::Down } else { KeyEvent::Up },
        );
        apply_key(
            &mut state,
            "ArrowRight",
            if going_left { KeyEvent::Up } else { KeyEvent::Down },
        );
        apply_key(&mut state, "Space", KeyEvent::Down);

        state.update(clock.tick(frame as f64 * FRAME_MS));
        draw_scene(&state, &mut batch);
        peak_quads = peak_quads.max(batch.quad_count());

        if state.phase().is_terminal() {
            log::info!("Round ended on frame {}", frame);
            break;
        }
    }

    log::info!(
        "Demo finished: phase {}, score {}, level {}, lives {}, aliens left {}, peak quads {}",
        state.phase().as_str(),
        state.score(),
        state.level(),
        state.lives(),
        state.alive_alien_count(),
        peak_quads
    );
    if state.phase() == GamePhase::Win {
        log::info!("The scripted player cleared the wave");
    }
}
