use crate::audio::WebAudio;
use crate::core::input::pointer_ndc;
use crate::core::session::Session;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mouse look, light follow and click chimes. Both listeners sit on the
/// window so the whole page reacts, overlays included.
pub fn wire_pointer(session: Rc<RefCell<Session<WebAudio>>>) {
    let session_move = session.clone();
    dom::on_window("mousemove", move |ev: web::MouseEvent| {
        let (w, h) = dom::viewport_size();
        let ndc = pointer_ndc(ev.client_x() as f64, ev.client_y() as f64, w, h);
        session_move.borrow_mut().on_pointer_move(ndc);
    });

    dom::on_window("click", move |_ev: web::MouseEvent| {
        let r: f32 = rand::random();
        session.borrow_mut().on_click(r);
    });
}
