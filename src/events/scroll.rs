use crate::audio::WebAudio;
use crate::core::scroll::progress;
use crate::core::session::Session;
use crate::core::smooth_scroll::{wheel_input, SmoothScroll};
use crate::dom;
use crate::ui::Ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed one scroll position through the session and onto the page.
pub fn apply_offset(session: &RefCell<Session<WebAudio>>, ui: &Ui, offset: f64) {
    let (_, view_h) = dom::viewport_size();
    let p = progress(offset, dom::document_scroll_height(), view_h);
    let update = session.borrow_mut().on_scroll(p);
    ui.apply_scroll(&update.view);
    for secret in update.secrets {
        ui.show_secret(secret);
    }
}

/// Take over wheel scrolling and keep track of native scrolls (keys,
/// scrollbar drags). Animated positions are emitted from the frame loop.
pub fn wire_scroll(
    session: Rc<RefCell<Session<WebAudio>>>,
    scroller: Rc<RefCell<SmoothScroll>>,
    ui: Rc<Ui>,
) {
    let Some(window) = web::window() else {
        return;
    };

    let scroller_wheel = scroller.clone();
    let wheel = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let (_, view_h) = dom::viewport_size();
        // Ctrl+wheel and trackpad pinch are zoom gestures
        let Some(delta) = wheel_input(ev.delta_y(), ev.delta_mode(), view_h, ev.ctrl_key())
        else {
            return;
        };
        ev.prevent_default();
        let mut s = scroller_wheel.borrow_mut();
        s.set_limit(dom::scroll_limit());
        s.on_wheel(delta);
    }) as Box<dyn FnMut(_)>);
    // prevent_default is ignored on passive listeners
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        wheel.as_ref().unchecked_ref(),
        &opts,
    );
    wheel.forget();

    dom::on_window("scroll", move |_ev: web::Event| {
        let Some(offset) = dom::scroll_offset() else {
            return;
        };
        let emitted = {
            let mut s = scroller.borrow_mut();
            s.set_limit(dom::scroll_limit());
            s.on_native_scroll(offset)
        };
        if let Some(offset) = emitted {
            apply_offset(&session, &ui, offset);
        }
    });
}
