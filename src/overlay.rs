use crate::constants::{CONTENT_ELEMENT_ID, HIDDEN_CLASS, INTRO_ELEMENT_ID};
use crate::style::{has_display_none, with_display_none, without_display_none};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // only undo the inline fallback; the host page may style this element
        if let Some(style) = el.get_attribute("style") {
            let kept = without_display_none(&style);
            if kept.is_empty() {
                _ = el.remove_attribute("style");
            } else {
                _ = el.set_attribute("style", &kept);
            }
        }
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        let style = el.get_attribute("style").unwrap_or_default();
        _ = el.set_attribute("style", &with_display_none(&style));
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document.get_element_by_id(id).is_some_and(|el| {
        el.class_list().contains(HIDDEN_CLASS)
            || el
                .get_attribute("style")
                .is_some_and(|s| has_display_none(&s))
    })
}

/// Show `#site-content` and hide the intro wrapper. Idempotent.
pub fn reveal_content(document: &web::Document) {
    if !is_hidden(document, CONTENT_ELEMENT_ID) && is_hidden(document, INTRO_ELEMENT_ID) {
        return;
    }
    log::info!("[intro] revealing #{CONTENT_ELEMENT_ID}");
    show(document, CONTENT_ELEMENT_ID);
    hide(document, INTRO_ELEMENT_ID);
}
