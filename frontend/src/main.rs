//! Studio Bragi page scripts: artist gallery, contact button and the small
//! page effects, bound to markup the site already serves.

use std::cell::RefCell;

use zoon::Task;

mod config;
mod contact;
mod dom;
mod gallery;
mod images;
mod lazy;
mod scroll;
mod timers;
mod view;

use gallery::{SetupError, SharedGallery};

thread_local! {
    /// The page's gallery. Listeners and timers only hold weak handles.
    static GALLERY: RefCell<Option<SharedGallery>> = const { RefCell::new(None) };
}

pub fn main() {
    Task::start(async {
        if let Err(error) = dom::dom_content_loaded().await {
            zoon::eprintln!("Page not ready: {error}");
            return;
        }
        boot();
    });
}

fn boot() {
    let config = config::load();

    match gallery::setup(&config.gallery) {
        Ok(gallery) => GALLERY.with(|cell| *cell.borrow_mut() = Some(gallery)),
        // Pages other than the artist pages carry no carousel.
        Err(SetupError::Dom(dom::DomError::MissingElement(selector))) => {
            zoon::println!("No gallery on this page ({selector} missing)");
        }
        Err(error) => zoon::eprintln!("Gallery not started: {error}"),
    }

    if let Err(error) = contact::setup(&config.contact) {
        zoon::eprintln!("WhatsApp button not bound: {error}");
    }
    if let Err(error) = lazy::setup_lazy_images() {
        zoon::eprintln!("Lazy images disabled: {error}");
    }
    if let Err(error) = lazy::setup_reveal(&config.reveal) {
        zoon::eprintln!("Reveal animations disabled: {error}");
    }
    if let Err(error) = images::setup_load_states() {
        zoon::eprintln!("Image fallbacks not bound: {error}");
    }
    if let Err(error) = scroll::setup_gallery_link() {
        zoon::eprintln!("Gallery link not bound: {error}");
    }

    zoon::println!("🎵 Studio Bragi - página carregada com sucesso!");
}
