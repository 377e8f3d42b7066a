//! Star Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use star_dodge::FrameDriver;
    use star_dodge::persistence::{KeyValueStore, NullStore};
    use star_dodge::platform::storage::LocalStore;
    use star_dodge::platform::{InitError, PointerEventKind, ScreenMetrics};
    use star_dodge::renderer::RenderState;

    const CANVAS_ID: &str = "canvas";

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        render_state: RenderState,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        /// Render the current frame
        fn render(&mut self) {
            let vertices = self.driver.render();
            match self.render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Re-read canvas size and pixel ratio
        fn resize(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let metrics = read_metrics(&window, &self.canvas);
            let (w, h) = metrics.surface_size();
            self.canvas.set_width(w);
            self.canvas.set_height(h);
            self.render_state.resize(w, h);
            self.driver.resize(metrics);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = self.driver.hud();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("best") {
                el.set_text_content(Some(&hud.best.to_string()));
            }
            if let Some(el) = document.get_element_by_id("message") {
                el.set_text_content(Some(&hud.message));
            }
            if let Some(el) = document.get_element_by_id("fps") {
                match hud.fps {
                    Some(fps) => {
                        el.set_text_content(Some(&fps.to_string()));
                        let _ = el.set_attribute("class", "");
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }
    }

    fn read_metrics(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> ScreenMetrics {
        ScreenMetrics::new(
            canvas.client_width() as f64,
            canvas.client_height() as f64,
            window.device_pixel_ratio(),
        )
    }

    fn open_store() -> Box<dyn KeyValueStore> {
        match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("LocalStorage unavailable ({}), scores will not be kept", e);
                Box::new(NullStore)
            }
        }
    }

    pub async fn run() -> Result<(), InitError> {
        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| InitError::NoCanvas(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| InitError::NotACanvas(CANVAS_ID.to_string()))?;

        let metrics = read_metrics(&window, &canvas);
        let (width, height) = metrics.surface_size();
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let driver = FrameDriver::new(metrics, open_store(), seed);
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;

        let game = Rc::new(RefCell::new(Game {
            driver,
            render_state,
            canvas: canvas.clone(),
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&window, game.clone());
        setup_keyboard(&window, game.clone());

        request_animation_frame(game);

        log::info!("Star Dodge running!");
        Ok(())
    }

    fn add_pointer_listener(
        canvas: &HtmlCanvasElement,
        event_name: &str,
        kind: PointerEventKind,
        game: Rc<RefCell<Game>>,
    ) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            event.prevent_default();
            game.borrow_mut()
                .driver
                .pointer(kind, event.offset_x() as f64, event.offset_y() as f64);
        });
        let _ = canvas.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        add_pointer_listener(canvas, "pointerdown", PointerEventKind::Down, game.clone());
        add_pointer_listener(canvas, "pointermove", PointerEventKind::Move, game.clone());
        add_pointer_listener(canvas, "pointerup", PointerEventKind::Up, game.clone());
        add_pointer_listener(canvas, "pointercancel", PointerEventKind::Cancel, game);
    }

    fn setup_resize_handler(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.key().as_str() {
                "t" | "T" => g.driver.update_settings(|s| s.trails = !s.trails),
                "s" | "S" => g.driver.update_settings(|s| s.screen_shake = !s.screen_shake),
                "m" | "M" => g.driver.update_settings(|s| s.reduced_motion = !s.reduced_motion),
                "f" | "F" => g.driver.update_settings(|s| s.show_fps = !s.show_fps),
                _ => return,
            }
            log::info!("Settings: {:?}", g.driver.settings());
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
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
            g.driver.frame(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }

    log::info!("Star Dodge starting...");
    if let Err(e) = wasm_game::run().await {
        log::error!("Star Dodge failed to start: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless smoke run: the autopilot plays a few minutes of simulated time
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use star_dodge::FrameDriver;
    use star_dodge::persistence::MemoryStore;
    use star_dodge::platform::{PointerEventKind, ScreenMetrics};

    env_logger::init();
    log::info!("Star Dodge (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let metrics = ScreenMetrics::new(390.0, 844.0, 2.0);
    let mut driver = FrameDriver::new(metrics, Box::new(MemoryStore::new()), 0x5eed);

    let frame_ms = 1000.0 / 60.0;
    let mut games = 0;
    for frame in 0..(60 * 180) {
        if !driver.session.state.playing {
            // Tap to (re)start, then let go so the autopilot steers
            driver.pointer(PointerEventKind::Down, 195.0, 600.0);
            driver.pointer(PointerEventKind::Up, 195.0, 600.0);
            games += 1;
        }
        let events = driver.frame(frame as f64 * frame_ms);
        if events.bomb_hit {
            log::info!("Game {} over at score {}", games, driver.session.state.score);
        }
        driver.render();
    }

    let hud = driver.hud();
    println!(
        "Played {} games, last score {}, best {}",
        games, hud.score, hud.best
    );
}
