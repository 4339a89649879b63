use crate::constants::*;
use crate::dom::{self, UiError};
use web_sys as web;

/// The "enter the sanctuary" dialog. Visibility is driven purely by
/// utility classes on the backdrop and the content panel.
#[derive(Clone)]
pub struct Modal {
    backdrop: web::HtmlElement,
    content: web::HtmlElement,
}

impl Modal {
    pub fn lookup(document: &web::Document) -> Result<Self, UiError> {
        Ok(Self {
            backdrop: dom::html_element(document, ID_MODAL)?,
            content: dom::html_element(document, ID_MODAL_CONTENT)?,
        })
    }

    pub fn open(&self) {
        _ = self.backdrop.class_list().remove_2(CLASS_NO_POINTER, CLASS_HIDDEN);
        let cl = self.content.class_list();
        _ = cl.remove_1(CLASS_SCALE_CLOSED);
        _ = cl.add_1(CLASS_SCALE_OPEN);
    }

    pub fn close(&self) {
        _ = self.backdrop.class_list().add_2(CLASS_NO_POINTER, CLASS_HIDDEN);
        let cl = self.content.class_list();
        _ = cl.add_1(CLASS_SCALE_CLOSED);
        _ = cl.remove_1(CLASS_SCALE_OPEN);
    }

    /// Hook the buttons (and the secret toast) that open and close the dialog.
    pub fn wire(&self, document: &web::Document, toast: &web::HtmlElement) -> Result<(), UiError> {
        let enter = dom::html_element(document, ID_ENTER_SANCTUARY)?;
        let close = dom::html_element(document, ID_CLOSE_MODAL)?;
        let claim = dom::html_element(document, ID_CLAIM)?;
        for opener in [&enter, toast] {
            let m = self.clone();
            dom::add_click_listener(opener, move || m.open());
        }
        for closer in [&close, &claim] {
            let m = self.clone();
            dom::add_click_listener(closer, move || m.close());
        }
        Ok(())
    }
}
