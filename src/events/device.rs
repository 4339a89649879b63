use crate::audio::WebAudio;
use crate::core::run_loop::LoopHandle;
use crate::core::session::Session;
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_orientation(session: Rc<RefCell<Session<WebAudio>>>) {
    dom::on_window("deviceorientation", move |ev: web::DeviceOrientationEvent| {
        // Desktop browsers fire this once with null angles
        if !session.borrow_mut().on_orientation(ev.beta(), ev.gamma()) {
            log::debug!("[input] orientation without angles ignored");
        }
    });
}

pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    dom::on_window("resize", move |_ev: web::Event| {
        frame_ctx.borrow_mut().resize(dom::current_viewport());
    });
}

pub fn wire_pagehide(handle: LoopHandle) {
    dom::on_window("pagehide", move |_ev: web::Event| {
        log::info!("[loop] page hidden, stopping");
        handle.stop();
    });
}
