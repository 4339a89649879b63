use crate::core::input::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("#{0} is not an HTML element")]
    NotHtml(&'static str),
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_element(document: &web::Document, id: &'static str) -> Result<web::HtmlElement, UiError> {
    document
        .get_element_by_id(id)
        .ok_or(UiError::MissingElement(id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| UiError::NotHtml(id))
}

#[inline]
pub fn add_click_listener(el: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a long-lived listener to the window. The closure is leaked on
/// purpose: it lives as long as the page.
pub fn on_window<E, F>(event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn viewport_size() -> (f64, f64) {
    web::window()
        .map(|w| {
            let css = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64());
            (
                css(w.inner_width()).unwrap_or(0.0),
                css(w.inner_height()).unwrap_or(0.0),
            )
        })
        .unwrap_or((0.0, 0.0))
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Largest scroll offset the document allows.
pub fn scroll_limit() -> f64 {
    let (_, inner_h) = viewport_size();
    (document_scroll_height() - inner_h).max(0.0)
}

pub fn document_scroll_height() -> f64 {
    window_document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Current CSS viewport with the capped device pixel ratio.
pub fn current_viewport() -> Viewport {
    let (w, h) = viewport_size();
    Viewport::new(w, h, device_pixel_ratio())
}

#[inline]
pub fn scroll_offset() -> Option<f64> {
    web::window().and_then(|w| w.scroll_y().ok())
}

#[inline]
pub fn scroll_window_to(offset: f64) {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, offset);
    }
}

/// Size the canvas backing store and its CSS box for `viewport`.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w, h) = viewport.surface_size();
    canvas.set_width(w);
    canvas.set_height(h);
    set_style(canvas, "width", &format!("{}px", viewport.css_width));
    set_style(canvas, "height", &format!("{}px", viewport.css_height));
}
