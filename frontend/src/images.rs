use shared::fallback_source;
use web_sys::HtmlImageElement;

use crate::dom::{self, DomError};

const TRACKED_IMAGES: &str = ".gallery-image, .song-image";

/// Fades images in once loaded and swaps broken ones for the inline
/// placeholder.
pub fn setup_load_states() -> Result<(), DomError> {
    for image in dom::query_all::<HtmlImageElement>(TRACKED_IMAGES)? {
        let loaded = image.clone();
        dom::listen(&image, "load", move |_event| {
            if let Err(error) = loaded.style().set_property("opacity", "1") {
                zoon::eprintln!("Failed to reveal loaded image: {error:?}");
            }
        })?;

        let broken = image.clone();
        dom::listen(&image, "error", move |_event| {
            if let Some(placeholder) = fallback_source(&broken.src()) {
                broken.set_src(placeholder);
            }
        })?;
    }
    Ok(())
}
