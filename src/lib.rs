#![cfg(target_arch = "wasm32")]
use crate::audio::WebAudio;
use crate::core::run_loop::{FrameClock, LoopHandle};
use crate::core::scene::{SceneAssets, SceneParams};
use crate::core::session::Session;
use crate::core::smooth_scroll::SmoothScroll;
use crate::ui::Ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod modal;
mod render;
mod ui;

fn mount_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(constants::ID_WEBGL_CONTAINER)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::ID_WEBGL_CONTAINER))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sanctuary-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Every page element is required; nothing is wired until all are found
    let ui = Rc::new(Ui::lookup(&document)?);
    ui.wire_modal(&document)?;

    let canvas = mount_canvas(&document)?;
    let viewport = dom::current_viewport();
    dom::size_canvas(&canvas, &viewport);

    let assets = SceneAssets::build(&SceneParams::default());
    log::info!(
        "[scene] crystals={} particles={} ocean_vertices={} torus_edges={}",
        assets.crystals.len(),
        assets.particles.len(),
        assets.ocean.mesh.positions.len(),
        assets.torus.lines.len() / 2
    );

    let session = Rc::new(RefCell::new(Session::<WebAudio>::new()));
    let scroller = Rc::new(RefCell::new(SmoothScroll::default()));

    let gpu = frame::init_gpu(&canvas, &assets).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session: session.clone(),
        scroller: scroller.clone(),
        ui: ui.clone(),
        canvas,
        gpu,
        ocean: assets.ocean,
        clock: FrameClock::default(),
        viewport: None,
    }));
    frame_ctx.borrow_mut().resize(viewport);

    events::wire_pointer(session.clone());
    events::wire_orientation(session.clone());
    events::wire_resize(frame_ctx.clone());
    events::wire_scroll(session.clone(), scroller.clone(), ui.clone());

    // Pick up a restored scroll position (reload, back navigation)
    if let Some(offset) = dom::scroll_offset() {
        let synced = {
            let mut s = scroller.borrow_mut();
            s.set_limit(dom::scroll_limit());
            s.on_native_scroll(offset)
        };
        if let Some(offset) = synced {
            events::apply_offset(&session, &ui, offset);
        }
    }

    let handle = LoopHandle::default();
    events::wire_pagehide(handle.clone());
    frame::start_loop(frame_ctx, handle);
    Ok(())
}
