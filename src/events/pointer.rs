use crate::constants::POINTER_REST_UV;
use crate::dom::Listener;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn pointer_canvas_uv(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        [(x_css / w).clamp(0.0, 1.0), (y_css / h).clamp(0.0, 1.0)]
    } else {
        POINTER_REST_UV
    }
}

/// Track the pointer over the window and feed it to the intro's parallax.
/// Leaving the window recenters the projection.
pub fn wire_pointer_parallax(
    canvas: web::HtmlCanvasElement,
    ctx: Rc<RefCell<FrameContext>>,
) -> Vec<Listener> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let mut listeners = Vec::with_capacity(2);

    let ctx_move = ctx.clone();
    listeners.extend(Listener::add(&window, "pointermove", move |ev: web::Event| {
        let Some(pev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let uv = pointer_canvas_uv(pev, &canvas);
        if let Ok(mut frame_ctx) = ctx_move.try_borrow_mut() {
            frame_ctx.set_pointer(uv);
        }
    }));

    if let Some(document) = window.document() {
        listeners.extend(Listener::add(&document, "pointerleave", move |_| {
            if let Ok(mut frame_ctx) = ctx.try_borrow_mut() {
                frame_ctx.set_pointer(POINTER_REST_UV);
            }
        }));
    }
    listeners
}
