use super::keys::{intro_action_for_key, IntroAction};
use crate::dom::Listener;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_intro_keydown(ev: &web::KeyboardEvent, ctx: &Rc<RefCell<FrameContext>>) {
    if let Some(IntroAction::Skip) = intro_action_for_key(&ev.key()) {
        let Ok(mut frame_ctx) = ctx.try_borrow_mut() else {
            log::warn!("[keys] skip ignored; frame in progress");
            return;
        };
        // only swallow keys while the intro still owns the screen
        if frame_ctx.skip() {
            ev.prevent_default();
        }
    }
}

pub fn wire_intro_keydown(ctx: Rc<RefCell<FrameContext>>) -> Option<Listener> {
    let window = web::window()?;
    Listener::add(&window, "keydown", move |ev: web::Event| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_intro_keydown(kev, &ctx);
        }
    })
}
