use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, DomError};

/// Replaces the jump of `a[href="#gallery"]` with a smooth scroll. Pages
/// without the link are left alone.
pub fn setup_gallery_link() -> Result<(), DomError> {
    let Some(link) = dom::document()?.query_selector(r##"a[href="#gallery"]"##)? else {
        return Ok(());
    };
    dom::listen(&link, "click", |event| {
        event.prevent_default();
        match dom::query_selector::<Element>(".gallery-section") {
            Ok(section) => smooth_scroll_to(&section),
            Err(error) => zoon::eprintln!("Cannot scroll to gallery: {error}"),
        }
    })
}

fn smooth_scroll_to(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
