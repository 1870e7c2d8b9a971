//! Ripple Field entry point
//!
//! Platform glue only: canvas and 2D context acquisition, resize wiring, and
//! the animation-frame driver. The simulation itself never touches any of
//! this - the native build drives the same core headlessly.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use ripple_field::render::{self, IntensityField, Surface};
    use ripple_field::sim::{SimState, tick};

    /// Canvas-backed drawing surface
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
        width: f64,
        height: f64,
    }

    impl Surface for CanvasSurface {
        fn clear(&mut self) {
            self.ctx.set_global_alpha(1.0);
            self.ctx.set_fill_style_str("#000");
            self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
            self.ctx.set_fill_style_str("#fff");
            self.ctx.set_global_alpha(alpha as f64);
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
        }
    }

    /// App instance holding all state
    struct App {
        state: SimState,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
    }

    fn window_size() -> (f64, f64) {
        let window = web_sys::window().expect("no window");
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        (w, h)
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Ripple Field starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = window_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context request failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let state = SimState::new(seed, width as f32, height as f32, now_ms());
        log::info!("simulation seeded with {}", seed);

        let app = Rc::new(RefCell::new(App {
            state,
            surface: CanvasSurface {
                ctx,
                width,
                height,
            },
            canvas,
        }));

        setup_resize_handler(app.clone());
        request_animation_frame(app);

        log::info!("Ripple Field running");
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = window_size();
            let mut a = app.borrow_mut();
            a.canvas.set_width(width as u32);
            a.canvas.set_height(height as u32);
            a.surface.width = width;
            a.surface.height = height;
            a.state.resize(width as f32, height as f32, now_ms());
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            tick(&mut a.state, time);
            let field = IntensityField::sample(&a.state.ripples);
            a.surface.clear();
            render::draw(&field, &mut a.surface);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ripple_field::render::IntensityField;
    use ripple_field::sim::{SimState, tick};

    env_logger::init();
    log::info!("Ripple Field (headless) starting...");

    // 30 simulated seconds at a synthetic 60Hz
    let mut state = SimState::new(0xC0FFEE, 800.0, 600.0, 0.0);
    let mut now_ms = 0.0;
    for frame in 0..(30 * 60) {
        tick(&mut state, now_ms);
        now_ms += 1000.0 / 60.0;

        if frame % 60 == 0 {
            let field = IntensityField::sample(&state.ripples);
            log::info!(
                "t={:4.1}s ripples={:2} lit_cells={}",
                now_ms / 1000.0,
                state.ripples.len(),
                field.len()
            );
        }
    }

    log::info!(
        "done: {} placement fallbacks over the run",
        state.field.fallback_count()
    );
}
