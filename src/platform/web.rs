//! Browser host: canvas 2D drawing, keyboard input, Web Audio, DOM toasts and
//! the `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

use super::{FrameControl, Notifier, Session};
use crate::audio::AudioManager;
use crate::consts::*;
use crate::renderer::{Rect, Surface};
use crate::settings::Settings;
use crate::sim::{Color, Direction};

/// How long a toast stays visible
const NOTIFICATION_MS: i32 = 2_000;

/// `Surface` backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, rect: Rect) {
        self.ctx.clear_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: Color) {
        let [a, b, c] = points;
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.line_to(c.x as f64, c.y as f64);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(font);
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}

/// Shows messages in the `#notification` element for a couple of seconds
pub struct DomNotifier {
    document: Document,
    enabled: bool,
}

impl Notifier for DomNotifier {
    fn notify(&mut self, message: &str) {
        log::info!("{}", message);
        if !self.enabled {
            return;
        }
        let Some(el) = self.document.get_element_by_id("notification") else {
            return;
        };
        el.set_text_content(Some(message));
        let _ = el.set_attribute("class", "show");

        let hide = Closure::once(move || {
            let _ = el.set_attribute("class", "hidden");
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.as_ref().unchecked_ref(),
                NOTIFICATION_MS,
            );
        }
        hide.forget();
    }
}

/// Everything the browser loop needs, shared with the event closures
struct WebGame {
    session: Session,
    surface: CanvasSurface,
    audio: AudioManager,
    notifier: DomNotifier,
    settings: Settings,
}

impl WebGame {
    fn frame(&mut self) -> FrameControl {
        self.session
            .frame(&mut self.surface, &mut self.audio, &mut self.notifier)
    }

    fn toggle_mute(&mut self) {
        self.settings.muted = !self.settings.muted;
        self.audio.apply_settings(&self.settings);
        self.settings.save();
        log::info!("Muted: {}", self.settings.muted);
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Block Dodge starting...");

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("gameCanvas")
        .expect("no canvas")
        .dyn_into()
        .expect("not a canvas");
    canvas.set_width(GAME_WIDTH as u32);
    canvas.set_height(GAME_HEIGHT as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .expect("no 2d context")
        .dyn_into()
        .expect("not a 2d context");

    let settings = Settings::load();
    let seed = settings.run_seed(js_sys::Date::now() as u64);

    let game = Rc::new(RefCell::new(WebGame {
        session: Session::new(seed),
        surface: CanvasSurface::new(ctx),
        audio: AudioManager::new(&settings),
        notifier: DomNotifier {
            document: document.clone(),
            enabled: settings.notifications,
        },
        settings,
    }));

    setup_input_handlers(game.clone());

    request_animation_frame(game);

    log::info!("Block Dodge running!");
}

fn setup_input_handlers(game: Rc<RefCell<WebGame>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    // Key down
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            let key = event.key();
            if let Some(dir) = Direction::from_key(&key) {
                event.prevent_default();
                g.session.input.press(dir);
                // First gesture unlocks audio
                g.audio.resume();
            } else if key == "m" || key == "M" {
                g.toggle_mute();
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Key up
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(dir) = Direction::from_key(&event.key()) {
                game.borrow_mut().session.input.release(dir);
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(game);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<WebGame>>) {
    let control = game.borrow_mut().frame();

    match control {
        FrameControl::Continue => request_animation_frame(game),
        FrameControl::Halt => {
            let g = game.borrow();
            log::info!(
                "Game over after {} frames (score {}, level {})",
                g.session.state.time_ticks,
                g.session.state.score(),
                g.session.state.level()
            );
        }
    }
}
