use shared::{GalleryView, Slide};
use web_sys::{Element, HtmlElement, HtmlImageElement};

const ACTIVE_CLASS: &str = "active";

/// `GalleryView` over the artist page markup.
pub struct DomGalleryView {
    track: HtmlElement,
    dots: Vec<Element>,
    thumbnails: Vec<Element>,
    modal: HtmlElement,
    modal_image: HtmlImageElement,
    body: Option<HtmlElement>,
}

impl DomGalleryView {
    pub fn new(
        track: HtmlElement,
        dots: Vec<Element>,
        thumbnails: Vec<Element>,
        modal: HtmlElement,
        modal_image: HtmlImageElement,
        body: Option<HtmlElement>,
    ) -> Self {
        Self {
            track,
            dots,
            thumbnails,
            modal,
            modal_image,
            body,
        }
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(error) = element.style().set_property(property, value) {
        zoon::eprintln!("Failed to set {property}: {value}: {error:?}");
    }
}

fn set_active(elements: &[Element], index: usize, active: bool) {
    if let Some(element) = elements.get(index) {
        if let Err(error) = element
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, active)
        {
            zoon::eprintln!("Failed to toggle active class: {error:?}");
        }
    }
}

impl GalleryView for DomGalleryView {
    fn set_track_offset(&mut self, percent: i64) {
        set_style(&self.track, "transform", &format!("translateX({percent}%)"));
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        set_active(&self.dots, index, active);
    }

    fn set_thumbnail_active(&mut self, index: usize, active: bool) {
        set_active(&self.thumbnails, index, active);
    }

    fn set_modal_visible(&mut self, visible: bool) {
        set_style(&self.modal, "display", if visible { "block" } else { "none" });
    }

    fn set_modal_opacity(&mut self, opacity: f32) {
        set_style(&self.modal, "opacity", &opacity.to_string());
    }

    fn set_modal_image(&mut self, slide: &Slide) {
        self.modal_image.set_src(&slide.src);
        self.modal_image.set_alt(&slide.alt);
    }

    fn set_modal_image_opacity(&mut self, opacity: f32) {
        set_style(&self.modal_image, "opacity", &opacity.to_string());
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        if let Some(body) = &self.body {
            set_style(body, "overflow", if locked { "hidden" } else { "auto" });
        }
    }
}
