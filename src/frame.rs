use crate::audio::WebAudio;
use crate::core::input::Viewport;
use crate::core::run_loop::{FrameClock, LoopHandle};
use crate::core::scene::{Ocean, SceneAssets};
use crate::core::session::Session;
use crate::core::smooth_scroll::SmoothScroll;
use crate::dom;
use crate::events;
use crate::render;
use crate::ui::Ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<Session<WebAudio>>>,
    pub scroller: Rc<RefCell<SmoothScroll>>,
    pub ui: Rc<Ui>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub ocean: Ocean,

    pub clock: FrameClock,
    pub viewport: Option<Viewport>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self, timestamp_ms: f64) {
        let time = self.clock.tick(timestamp_ms / 1000.0);

        let emitted = self.scroller.borrow_mut().raf(timestamp_ms);
        if let Some(offset) = emitted {
            dom::scroll_window_to(offset);
            events::apply_offset(&self.session, &self.ui, offset);
        }

        let mut session = self.session.borrow_mut();
        session.tick(time);
        self.ocean.displace(time.elapsed);

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let emissive = if session.crystal_emissive_white {
            [session.crystal_emissive; 3]
        } else {
            [0.0; 3]
        };
        let view = render::FrameView {
            view: session.camera.view_matrix(),
            proj: session.camera.projection_matrix(),
            camera_pos: session.camera.position,
            time: time.elapsed,
            light_pos: session.light_position,
            crystal_group: session.motion.crystal_group_matrix(),
            crystal_emissive: emissive,
            torus_model: session.motion.torus_matrix(),
            ocean_positions: &self.ocean.mesh.positions,
        };
        match gpu.render(&view) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    /// Apply a new viewport to the camera, canvas and surface. Repeating the
    /// same viewport does nothing.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);
        self.session.borrow_mut().on_resize(&viewport);
        dom::size_canvas(&self.canvas, &viewport);
        if let Some(gpu) = self.gpu.as_mut() {
            let (w, h) = viewport.surface_size();
            gpu.set_pixel_ratio(viewport.pixel_ratio as f32);
            gpu.resize_if_needed(w, h);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    assets: &SceneAssets,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, assets).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `handle` is stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>, handle: LoopHandle) {
    if !handle.start() {
        log::warn!("[loop] already started or stopped");
        return;
    }
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        if !handle.is_running() {
            return;
        }
        frame_ctx.borrow_mut().frame(timestamp_ms);
        if handle.is_running() {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &FrameCallback) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
