use crate::constants::*;
use crate::core::constants::SECRET_TOAST_MS;
use crate::core::rewards::Secret;
use crate::core::scroll::ScrollView;
use crate::dom::{self, UiError};
use crate::modal::Modal;
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page elements that react to scrolling, looked up once at startup.
pub struct Ui {
    progress_fill: web::HtmlElement,
    progress_text: web::HtmlElement,
    scarcity_text: web::HtmlElement,
    intro_text: web::HtmlElement,
    secret_toast: web::HtmlElement,
    secret_toast_text: web::HtmlElement,
    gallery_hud: web::HtmlElement,
    testimonial_hud: web::HtmlElement,
    modal: Modal,
    toast_timer: Cell<Option<i32>>,
}

impl Ui {
    pub fn lookup(document: &web::Document) -> Result<Self, UiError> {
        Ok(Self {
            progress_fill: dom::html_element(document, ID_PROGRESS_FILL)?,
            progress_text: dom::html_element(document, ID_PROGRESS_TEXT)?,
            scarcity_text: dom::html_element(document, ID_SCARCITY_TEXT)?,
            intro_text: dom::html_element(document, ID_INTRO_TEXT)?,
            secret_toast: dom::html_element(document, ID_SECRET_TOAST)?,
            secret_toast_text: dom::html_element(document, ID_SECRET_TOAST_TEXT)?,
            gallery_hud: dom::html_element(document, ID_GALLERY_HUD)?,
            testimonial_hud: dom::html_element(document, ID_TESTIMONIAL_HUD)?,
            modal: Modal::lookup(document)?,
            toast_timer: Cell::new(None),
        })
    }

    pub fn wire_modal(&self, document: &web::Document) -> Result<(), UiError> {
        self.modal.wire(document, &self.secret_toast)
    }

    pub fn apply_scroll(&self, view: &ScrollView) {
        dom::set_style(&self.progress_fill, "transform", &view.fill_transform_css());
        self.progress_text.set_inner_text(&view.progress_label());
        self.scarcity_text.set_inner_text(view.scarcity.message());
        dom::set_style(&self.intro_text, "opacity", view.intro_opacity());

        dom::set_style(&self.gallery_hud, "opacity", view.gallery.opacity());
        if let Some(transform) = view.gallery.transform_css() {
            dom::set_style(&self.gallery_hud, "transform", &transform);
        }
        dom::set_style(&self.testimonial_hud, "opacity", view.testimonial.opacity());
    }

    /// Show the toast for a secret; it hides itself after a few seconds.
    /// A newer secret restarts the countdown.
    pub fn show_secret(&self, secret: Secret) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(handle) = self.toast_timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        self.secret_toast_text.set_inner_text(&secret.toast_text());
        _ = self
            .secret_toast
            .class_list()
            .remove_2(CLASS_HIDDEN, CLASS_NO_POINTER);

        let toast = self.secret_toast.clone();
        let hide = Closure::once_into_js(move || {
            _ = toast.class_list().add_2(CLASS_HIDDEN, CLASS_NO_POINTER);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            hide.unchecked_ref::<js_sys::Function>(),
            SECRET_TOAST_MS,
        ) {
            Ok(handle) => self.toast_timer.set(Some(handle)),
            Err(e) => log::error!("toast timer error: {:?}", e),
        }
    }
}
