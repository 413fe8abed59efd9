//! Catch the Ball entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use catch_ball::renderer::CanvasSurface;
    use catch_ball::sim::GameEvent;
    use catch_ball::{Game, Settings};

    const CANVAS_ID: &str = "gameCanvas";

    /// Game plus the surface it draws on
    struct Shell {
        game: Game,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Catch the Ball starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Optional JSON overrides: <canvas data-settings='{...}'>
        let settings = Settings::load_or_default(canvas.get_attribute("data-settings").as_deref());
        canvas.set_width(settings.tuning.width as u32);
        canvas.set_height(settings.tuning.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let shell = Rc::new(RefCell::new(Shell {
            game: Game::new(settings, seed),
            surface: CanvasSurface::new(ctx),
        }));

        setup_input_handlers(&canvas, shell.clone());
        request_animation_frame(shell);

        log::info!("Catch the Ball running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, shell: Rc<RefCell<Shell>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            shell.borrow_mut().game.set_pointer_x(x);
        });
        let _ =
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(shell: Rc<RefCell<Shell>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(shell);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(shell: Rc<RefCell<Shell>>) {
        let events = {
            let mut s = shell.borrow_mut();
            let Shell { game, surface } = &mut *s;
            game.frame(surface)
        };

        // Blocking on purpose: the next frame waits until the player dismisses it
        for event in events {
            if let GameEvent::GameOver { final_score } = event {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&format!("Game Over! Score: {final_score}"));
                }
            }
        }

        request_animation_frame(shell);
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
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use catch_ball::renderer::CommandBuffer;
    use catch_ball::sim::GameEvent;
    use catch_ball::{Autopilot, Game, PointerSource, Settings};

    /// One minute at 60 Hz
    const DEFAULT_FRAMES: u64 = 3600;

    env_logger::init();
    log::info!("Catch the Ball (native) starting...");
    log::info!("Native mode runs a headless autopilot session - serve the wasm build to play");

    let settings = match std::env::var("CATCH_BALL_SETTINGS") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings file {path}"))?;
            Settings::from_json(&json).with_context(|| format!("invalid settings in {path}"))?
        }
        Err(_) => Settings::default(),
    };

    let frames = match std::env::var("CATCH_BALL_FRAMES") {
        Ok(value) => value
            .parse::<u64>()
            .with_context(|| format!("invalid CATCH_BALL_FRAMES value: {value}"))?,
        Err(_) => DEFAULT_FRAMES,
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut game = Game::new(settings, seed);
    let mut surface = CommandBuffer::new();
    let mut pilot = Autopilot::default();
    log::info!(
        "Autopilot playing {} for {} frames",
        game.settings().variant.as_str(),
        frames
    );

    for _ in 0..frames {
        if let Some(x) = pilot.pointer_x(game.state()) {
            game.set_pointer_x(x);
        }
        // Headless: only the latest frame's draw list is kept
        surface.clear();
        for event in game.frame(&mut surface) {
            if let GameEvent::GameOver { final_score } = event {
                println!("Game Over! Score: {final_score}");
            }
        }
    }

    let stats = game.stats();
    println!(
        "{} frames, {} games, {} catches, best score {}, current score {}",
        stats.frames,
        stats.games_played,
        stats.total_catches,
        stats.best_score,
        game.state().score
    );

    Ok(())
}
