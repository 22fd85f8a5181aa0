//! Binds the artist page carousel markup to `shared::ArtistGallery`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use shared::{ArtistGallery, GalleryError, GalleryKey, GallerySection, Slide, SlideDeck};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent, TouchEvent};

use crate::dom::{self, DomError};
use crate::timers::BrowserScheduler;
use crate::view::DomGalleryView;

pub type Gallery = ArtistGallery<DomGalleryView, BrowserScheduler>;
pub type SharedGallery = Rc<RefCell<Gallery>>;
pub type WeakGallery = Weak<RefCell<Gallery>>;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

/// Runs `action` on the gallery if it is still alive and not already
/// borrowed by an outer handler.
pub fn with_gallery(gallery: &WeakGallery, action: impl FnOnce(&mut Gallery)) {
    let Some(gallery) = gallery.upgrade() else {
        return;
    };
    match gallery.try_borrow_mut() {
        Ok(mut gallery) => action(&mut gallery),
        Err(_) => zoon::eprintln!("Gallery busy, dropping re-entrant event"),
    };
}

fn on(
    gallery: &SharedGallery,
    target: &EventTarget,
    event: &str,
    mut action: impl FnMut(&mut Gallery, &Event) + 'static,
) -> Result<(), DomError> {
    let gallery = Rc::downgrade(gallery);
    dom::listen(target, event, move |event| {
        with_gallery(&gallery, |gallery| action(gallery, &event));
    })
}

fn report(result: Result<(), GalleryError>) {
    if let Err(error) = result {
        zoon::eprintln!("Gallery navigation ignored: {error}");
    }
}

struct GalleryElements {
    track: HtmlElement,
    dots_container: Element,
    prev_button: Element,
    next_button: Element,
    slide_images: Vec<HtmlImageElement>,
    gallery_images: Vec<Element>,
    thumbnails: Vec<Element>,
    modal: HtmlElement,
    modal_image: HtmlImageElement,
    modal_close: Element,
    modal_prev: Element,
    modal_next: Element,
    container: Element,
}

impl GalleryElements {
    fn find() -> Result<Self, DomError> {
        Ok(Self {
            track: dom::element_by_id("carouselTrack")?,
            dots_container: dom::element_by_id("carouselDots")?,
            prev_button: dom::element_by_id("prevBtn")?,
            next_button: dom::element_by_id("nextBtn")?,
            slide_images: dom::query_all(".carousel-slide img")?,
            gallery_images: dom::query_all(".gallery-image")?,
            thumbnails: dom::query_all(".thumbnail-item")?,
            modal: dom::element_by_id("imageModal")?,
            modal_image: dom::element_by_id("modalImage")?,
            modal_close: dom::element_by_id("modalClose")?,
            modal_prev: dom::element_by_id("modalPrev")?,
            modal_next: dom::element_by_id("modalNext")?,
            container: dom::query_selector(".carousel-container")?,
        })
    }
}

fn create_dots(container: &Element, count: usize) -> Result<Vec<Element>, DomError> {
    let document = dom::document()?;
    (0..count)
        .map(|index| -> Result<Element, DomError> {
            let dot = document.create_element("div")?;
            dot.set_class_name(if index == 0 {
                "carousel-dot active"
            } else {
                "carousel-dot"
            });
            container.append_child(&dot)?;
            Ok(dot)
        })
        .collect()
}

/// Finds the carousel markup, builds the controller and wires every
/// listener. Fails without side effects on the page when markup is missing.
pub fn setup(settings: &GallerySection) -> Result<SharedGallery, SetupError> {
    let elements = GalleryElements::find()?;

    let deck = SlideDeck::new(
        elements
            .slide_images
            .iter()
            .map(|image| Slide::new(image.src(), image.alt()))
            .collect(),
    )?;
    if deck.len() != settings.total_slides {
        zoon::eprintln!(
            "Gallery expected {} slides, page has {}",
            settings.total_slides,
            deck.len()
        );
    }
    if elements.thumbnails.len() != deck.len() {
        zoon::eprintln!(
            "Gallery has {} thumbnails for {} slides",
            elements.thumbnails.len(),
            deck.len()
        );
    }

    let dots = create_dots(&elements.dots_container, deck.len())?;
    let body = dom::document()?.body();
    let view = DomGalleryView::new(
        elements.track.clone(),
        dots.clone(),
        elements.thumbnails.clone(),
        elements.modal.clone(),
        elements.modal_image.clone(),
        body,
    );

    let gallery: SharedGallery = Rc::new_cyclic(|weak| {
        RefCell::new(ArtistGallery::new(
            deck,
            settings.clone(),
            view,
            BrowserScheduler::new(weak.clone()),
        ))
    });

    bind_carousel(&gallery, &elements, &dots)?;
    bind_modal(&gallery, &elements)?;
    bind_pointer(&gallery, &elements.container)?;

    gallery.borrow_mut().start();
    zoon::println!(
        "Gallery ready with {} slides",
        gallery.borrow().total_slides()
    );
    Ok(gallery)
}

fn bind_carousel(
    gallery: &SharedGallery,
    elements: &GalleryElements,
    dots: &[Element],
) -> Result<(), DomError> {
    for (index, dot) in dots.iter().enumerate() {
        on(gallery, dot, "click", move |gallery, _| {
            report(gallery.go_to_slide(index))
        })?;
    }
    for (index, thumbnail) in elements.thumbnails.iter().enumerate() {
        on(gallery, thumbnail, "click", move |gallery, _| {
            report(gallery.go_to_slide(index))
        })?;
    }
    on(gallery, &elements.prev_button, "click", |gallery, _| {
        gallery.previous_slide()
    })?;
    on(gallery, &elements.next_button, "click", |gallery, _| {
        gallery.next_slide()
    })?;
    Ok(())
}

fn bind_modal(gallery: &SharedGallery, elements: &GalleryElements) -> Result<(), DomError> {
    for (index, image) in elements.gallery_images.iter().enumerate() {
        on(gallery, image, "click", move |gallery, _| {
            report(gallery.open_modal(index))
        })?;
    }

    on(gallery, &elements.modal_close, "click", |gallery, _| {
        gallery.close_modal()
    })?;

    let modal = elements.modal.clone();
    on(gallery, &elements.modal, "click", move |gallery, event| {
        // Only the backdrop itself, not the image or the controls.
        let on_backdrop = event
            .target()
            .is_some_and(|target| target.dyn_ref::<HtmlElement>() == Some(&modal));
        if on_backdrop {
            gallery.close_modal();
        }
    })?;

    on(gallery, &elements.modal_prev, "click", |gallery, _| {
        gallery.modal_previous_image()
    })?;
    on(gallery, &elements.modal_next, "click", |gallery, _| {
        gallery.modal_next_image()
    })?;

    let document = dom::document()?;
    on(gallery, &document, "keydown", |gallery, event| {
        let key = event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|event| GalleryKey::from_key(&event.key()));
        if let Some(key) = key {
            gallery.handle_key(key);
        }
    })?;
    Ok(())
}

fn first_touch_x(event: &Event, changed: bool) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touches = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    touches.item(0).map(|touch| f64::from(touch.client_x()))
}

fn bind_pointer(gallery: &SharedGallery, container: &Element) -> Result<(), DomError> {
    on(gallery, container, "mouseenter", |gallery, _| {
        gallery.pointer_entered()
    })?;
    on(gallery, container, "mouseleave", |gallery, _| {
        gallery.pointer_left()
    })?;
    on(gallery, container, "touchstart", |gallery, event| {
        if let Some(x) = first_touch_x(event, false) {
            gallery.touch_started(x);
        }
    })?;
    on(gallery, container, "touchend", |gallery, event| {
        if let Some(x) = first_touch_x(event, true) {
            gallery.touch_ended(x);
        }
    })?;
    Ok(())
}
