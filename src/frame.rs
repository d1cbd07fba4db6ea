use crate::canvas::CanvasSurface;
use crate::constants::PARALLAX_ENABLED;
use crate::dom;
use crate::overlay;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use warp_core::constants::PARALLAX_STRENGTH_PX;
use warp_core::{parallax_offset, Animator, Portal, Surface2d, Viewport, Wormhole};
use web_sys as web;

/// The intro sequences the web front end can mount.
pub enum Intro {
    Wormhole(Animator<Wormhole>),
    Portal(Animator<Portal>),
}

impl Intro {
    pub fn on_complete(&mut self, callback: Box<dyn FnOnce()>) {
        match self {
            Intro::Wormhole(a) => a.on_complete(callback),
            Intro::Portal(a) => a.on_complete(callback),
        }
    }

    fn frame(&mut self, now_ms: f64) {
        match self {
            Intro::Wormhole(a) => {
                a.frame(now_ms);
            }
            Intro::Portal(a) => {
                a.frame(now_ms);
            }
        }
    }

    fn draw<T: Surface2d + ?Sized>(&mut self, surface: &mut T) {
        match self {
            Intro::Wormhole(a) => a.draw(surface),
            Intro::Portal(a) => a.draw(surface),
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        match self {
            Intro::Wormhole(a) => a.resize(viewport),
            Intro::Portal(a) => a.resize(viewport),
        }
    }

    fn skip(&mut self) {
        match self {
            Intro::Wormhole(a) => a.skip(),
            Intro::Portal(a) => a.skip(),
        }
    }

    fn set_parallax(&mut self, offset: Vec2) {
        match self {
            Intro::Wormhole(a) => a.set_parallax(offset),
            Intro::Portal(a) => a.set_parallax(offset),
        }
    }

    pub fn phase_name(&self) -> String {
        match self {
            Intro::Wormhole(a) => format!("{:?}", a.phase()),
            Intro::Portal(a) => format!("{:?}", a.phase()),
        }
    }
}

/// Everything one mounted intro touches per frame. Owned by the
/// requestAnimationFrame closure through `Rc<RefCell<_>>`; event listeners
/// borrow it between frames.
pub struct FrameContext {
    intro: Intro,
    canvas: web::HtmlCanvasElement,
    ctx2d: web::CanvasRenderingContext2d,
    document: web::Document,
    start: Instant,
    viewport: Viewport,
    revealed: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn new(
        intro: Intro,
        canvas: web::HtmlCanvasElement,
        ctx2d: web::CanvasRenderingContext2d,
        document: web::Document,
        viewport: Viewport,
        revealed: Rc<Cell<bool>>,
    ) -> Self {
        Self {
            intro,
            canvas,
            ctx2d,
            document,
            start: Instant::now(),
            viewport,
            revealed,
        }
    }

    pub fn frame(&mut self) {
        let now_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        self.intro.frame(now_ms);
        let mut surface = CanvasSurface::new(&self.ctx2d);
        self.intro.draw(&mut surface);
    }

    /// Re-sync the canvas backing store; rebuilds the field on a size change.
    pub fn sync_size(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        let viewport = Viewport::new(w as f32, h as f32);
        if viewport != self.viewport {
            log::debug!("[intro] viewport {w}x{h}");
            self.viewport = viewport;
            self.intro.resize(viewport);
        }
    }

    pub fn set_pointer(&mut self, uv: [f32; 2]) {
        if PARALLAX_ENABLED {
            self.intro
                .set_parallax(parallax_offset(uv, PARALLAX_STRENGTH_PX));
        }
    }

    /// Jump to the terminal phase and reveal content. Returns false when
    /// content was already revealed (completed, or skipped before).
    pub fn skip(&mut self) -> bool {
        if self.revealed.get() {
            return false;
        }
        log::info!("[intro] skipped during {}", self.intro.phase_name());
        self.intro.skip();
        self.revealed.set(true);
        overlay::reveal_content(&self.document);
        true
    }

    pub fn phase_name(&self) -> String {
        self.intro.phase_name()
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `running` is cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[intro] frame loop stopped");
            // drops this closure and the frame context it owns
            let _ = tick_clone.borrow_mut().take();
            return;
        }
        match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.frame(),
            Err(_) => log::warn!("[intro] frame skipped; context busy"),
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
