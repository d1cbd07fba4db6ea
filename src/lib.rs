#![cfg(target_arch = "wasm32")]
//! Browser front end: mounts a phase-driven star field intro on a 2D canvas
//! and exposes the scroll camera rig to page scripts.
//!
//! Page contract: the canvas stays visible as a backdrop after the intro;
//! `#warp-intro` holds the intro overlay and is hidden on reveal, while
//! `#site-content` is shown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use warp_core::{Animator, AnimatorConfig, Playback, Viewport};
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod rig;
mod scroll;
mod style;

use constants::PARALLAX_ENABLED;
use dom::Listener;
use frame::{FrameContext, Intro};

pub use rig::{scroll_fraction_js, JsCameraRig};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("warp-web ready");
    Ok(())
}

#[derive(Clone, Copy, Debug)]
enum IntroKind {
    Wormhole,
    Portal,
}

/// A mounted intro. Dropping it (or calling `unmount`) stops the frame loop
/// and removes every listener it registered.
#[wasm_bindgen]
pub struct WarpIntro {
    running: Rc<Cell<bool>>,
    ctx: Rc<RefCell<FrameContext>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl WarpIntro {
    /// Mount the wormhole intro on `<canvas id={canvas_id}>`. With `skip` the
    /// intro starts in its coasting phase, content is revealed immediately
    /// and `on_complete` is never called.
    pub fn mount(
        canvas_id: &str,
        skip: bool,
        on_complete: Option<js_sys::Function>,
    ) -> Result<WarpIntro, JsValue> {
        mount_intro(canvas_id, IntroKind::Wormhole, skip, on_complete).map_err(to_js_err)
    }

    /// Same as `mount` with the shorter warp → slowmo → exit transition.
    #[wasm_bindgen(js_name = mountPortal)]
    pub fn mount_portal(
        canvas_id: &str,
        skip: bool,
        on_complete: Option<js_sys::Function>,
    ) -> Result<WarpIntro, JsValue> {
        mount_intro(canvas_id, IntroKind::Portal, skip, on_complete).map_err(to_js_err)
    }

    /// Skip to the end and reveal content. Returns false if already revealed.
    pub fn skip(&self) -> bool {
        match self.ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.skip(),
            Err(_) => {
                log::warn!("[intro] skip ignored; frame in progress");
                false
            }
        }
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.ctx
            .try_borrow()
            .map(|ctx| ctx.phase_name())
            .unwrap_or_default()
    }

    pub fn unmount(&mut self) {
        if self.running.replace(false) {
            log::info!("[intro] unmounted");
        }
        self.listeners.clear();
    }
}

impl Drop for WarpIntro {
    fn drop(&mut self) {
        self.running.set(false);
    }
}

fn to_js_err(e: anyhow::Error) -> JsValue {
    log::error!("[intro] mount failed: {e:?}");
    JsValue::from_str(&e.to_string())
}

fn mount_intro(
    canvas_id: &str,
    kind: IntroKind,
    skip: bool,
    on_complete: Option<js_sys::Function>,
) -> anyhow::Result<WarpIntro> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx2d = dom::context_2d(&canvas)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    let viewport = Viewport::new(w as f32, h as f32);
    let playback = if skip { Playback::Skip } else { Playback::Play };
    let seed = rand::random::<u64>();

    let mut intro = match kind {
        IntroKind::Wormhole => Intro::Wormhole(Animator::wormhole(
            &AnimatorConfig::wormhole(),
            viewport,
            seed,
            playback,
        )?),
        IntroKind::Portal => Intro::Portal(Animator::portal(
            &AnimatorConfig::portal(),
            viewport,
            seed,
            playback,
        )?),
    };

    let revealed = Rc::new(Cell::new(skip));
    if skip {
        overlay::reveal_content(&document);
    } else {
        let revealed_cb = revealed.clone();
        let document_cb = document.clone();
        intro.on_complete(Box::new(move || {
            revealed_cb.set(true);
            overlay::reveal_content(&document_cb);
            if let Some(f) = on_complete {
                if let Err(e) = f.call0(&JsValue::NULL) {
                    log::error!("[intro] on_complete threw: {:?}", e);
                }
            }
        }));
    }
    log::info!("[intro] {kind:?} mounted on #{canvas_id} ({w}x{h}, {playback:?})");

    let ctx = Rc::new(RefCell::new(FrameContext::new(
        intro,
        canvas.clone(),
        ctx2d,
        document,
        viewport,
        revealed,
    )));
    let running = Rc::new(Cell::new(true));

    let mut listeners = Vec::new();
    let ctx_resize = ctx.clone();
    listeners.extend(Listener::add(&window, "resize", move |_| {
        if let Ok(mut frame_ctx) = ctx_resize.try_borrow_mut() {
            frame_ctx.sync_size();
        }
    }));
    listeners.extend(events::wire_intro_keydown(ctx.clone()));
    if PARALLAX_ENABLED {
        listeners.extend(events::wire_pointer_parallax(canvas, ctx.clone()));
    }

    frame::start_loop(ctx.clone(), running.clone());
    Ok(WarpIntro {
        running,
        ctx,
        listeners,
    })
}
