use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::tracker::SectionId;

/// Current vertical scroll offset of the page, 0 when unavailable.
pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn header_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("header").ok().flatten())
        .map(|header| header.client_height() as f64)
        .unwrap_or(config::FALLBACK_HEADER_HEIGHT_PX)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scrolls so the section's top edge sits just below the fixed header.
pub fn scroll_to_section(section: SectionId) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.as_str()))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    match element {
        Some(element) => smooth_scroll_to(element.offset_top() as f64 - header_height()),
        None => warn!("No element for section {}", section),
    }
}
