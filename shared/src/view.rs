//! Presentation seam between the gallery controller and whatever draws it.
//!
//! The controller never reads back from the view; every method is a
//! write of presentation state and must be idempotent.

use crate::slides::Slide;

pub trait GalleryView {
    /// Horizontal offset of the slide track, in percent of one slide width.
    fn set_track_offset(&mut self, percent: i64);

    fn set_dot_active(&mut self, index: usize, active: bool);

    fn set_thumbnail_active(&mut self, index: usize, active: bool);

    fn set_modal_visible(&mut self, visible: bool);

    fn set_modal_opacity(&mut self, opacity: f32);

    /// Source and alt text of the single enlarged image.
    fn set_modal_image(&mut self, slide: &Slide);

    fn set_modal_image_opacity(&mut self, opacity: f32);

    /// Locks (or restores) scrolling of the page behind the modal.
    fn set_page_scroll_locked(&mut self, locked: bool);
}
