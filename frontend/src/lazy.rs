//! Intersection observers: deferred image sources and reveal-on-scroll.

use js_sys::Array;
use shared::RevealSection;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom::{self, DomError};

const LAZY_IMAGES: &str = "img[data-src]";
const REVEALED_ELEMENTS: &str = ".song-card, .thumbnail-item";

fn visibility_observer(
    mut on_visible: impl FnMut(&Element, &IntersectionObserver) + 'static,
    options: Option<&IntersectionObserverInit>,
) -> Result<IntersectionObserver, DomError> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_visible(&entry.target(), &observer);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = match options {
        Some(options) => {
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };
    callback.forget();
    Ok(observer)
}

/// Loads `data-src` into `src` the first time an image scrolls into view.
pub fn setup_lazy_images() -> Result<(), DomError> {
    let images = dom::query_all::<Element>(LAZY_IMAGES)?;
    if images.is_empty() {
        return Ok(());
    }

    let observer = visibility_observer(
        |target, observer| {
            if let Some(source) = target.get_attribute("data-src") {
                let _ = target.set_attribute("src", &source);
            }
            let _ = target.class_list().remove_1("lazy");
            observer.unobserve(target);
        },
        None,
    )?;
    for image in &images {
        observer.observe(image);
    }
    Ok(())
}

/// Starts the entry animation of cards and thumbnails as they come into
/// view.
pub fn setup_reveal(reveal: &RevealSection) -> Result<(), DomError> {
    let targets = dom::query_all::<Element>(REVEALED_ELEMENTS)?;
    if targets.is_empty() {
        return Ok(());
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal.threshold));
    options.set_root_margin(&reveal.root_margin);

    let observer = visibility_observer(
        |target, _observer| {
            if let Some(element) = target.dyn_ref::<HtmlElement>() {
                let _ = element
                    .style()
                    .set_property("animation-play-state", "running");
            }
            let _ = target.class_list().add_1("animate");
        },
        Some(&options),
    )?;
    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}
