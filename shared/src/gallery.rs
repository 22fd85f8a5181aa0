//! Carousel and lightbox controller for the artist gallery.
//!
//! `ArtistGallery` owns the slide index, the modal state and the swipe
//! tracker. It pushes every change into a [`GalleryView`] and asks a
//! [`Scheduler`] for timers; the host page calls back in when a timer fires
//! ([`ArtistGallery::auto_advance_tick`], [`ArtistGallery::run_deferred`]).
//!
//! The dot, the thumbnail and the track offset always mirror
//! `current_slide`. Modal navigation keeps its own index and never moves the
//! carousel.

use crate::config::GallerySection;
use crate::error::GalleryError;
use crate::scheduler::{Deferred, Scheduler};
use crate::slides::SlideDeck;
use crate::swipe::{SwipeDirection, SwipeTracker};
use crate::view::GalleryView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    /// Fading out. Still shown and still answering keys.
    Closing,
}

/// Keys the gallery reacts to while the modal is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl GalleryKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct ModalState {
    phase: ModalPhase,
    current_image: usize,
    // Bumped by open and close.
    visibility_generation: u64,
    // Bumped by open and by every modal navigation.
    image_generation: u64,
}

#[derive(Debug)]
pub struct ArtistGallery<V, S> {
    deck: SlideDeck,
    settings: GallerySection,
    current_slide: usize,
    modal: ModalState,
    swipe: SwipeTracker,
    view: V,
    scheduler: S,
}

impl<V: GalleryView, S: Scheduler> ArtistGallery<V, S> {
    pub fn new(deck: SlideDeck, settings: GallerySection, view: V, scheduler: S) -> Self {
        let swipe = SwipeTracker::new(settings.swipe_threshold_px);
        Self {
            deck,
            settings,
            current_slide: 0,
            modal: ModalState {
                phase: ModalPhase::Closed,
                current_image: 0,
                visibility_generation: 0,
                image_generation: 0,
            },
            swipe,
            view,
            scheduler,
        }
    }

    /// Draws the initial state (slide 0) and arms auto-advance.
    pub fn start(&mut self) {
        self.sync_views();
        self.start_auto_advance();
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn total_slides(&self) -> usize {
        self.deck.len()
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // ===== CAROUSEL =====

    /// Jumps to `index`. Indices past the deck are rejected and leave the
    /// carousel untouched.
    pub fn go_to_slide(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.deck.len() {
            return Err(GalleryError::SlideOutOfRange {
                index,
                total: self.deck.len(),
            });
        }
        self.current_slide = index;
        self.sync_views();
        Ok(())
    }

    pub fn next_slide(&mut self) {
        self.current_slide = self.deck.next_index(self.current_slide);
        self.sync_views();
    }

    pub fn previous_slide(&mut self) {
        self.current_slide = self.deck.previous_index(self.current_slide);
        self.sync_views();
    }

    fn sync_views(&mut self) {
        let current = self.current_slide;
        self.view.set_track_offset(-(current as i64) * 100);
        for index in 0..self.deck.len() {
            self.view.set_dot_active(index, index == current);
            self.view.set_thumbnail_active(index, index == current);
        }
    }

    // ===== AUTO-ADVANCE =====

    pub fn start_auto_advance(&mut self) {
        self.scheduler.stop_interval();
        self.scheduler
            .start_interval(self.settings.auto_slide_delay_ms);
    }

    pub fn stop_auto_advance(&mut self) {
        if self.scheduler.is_interval_armed() {
            self.scheduler.stop_interval();
        }
    }

    pub fn auto_advance_tick(&mut self) {
        self.next_slide();
    }

    pub fn pointer_entered(&mut self) {
        self.stop_auto_advance();
    }

    pub fn pointer_left(&mut self) {
        self.start_auto_advance();
    }

    // ===== SWIPE =====

    pub fn touch_started(&mut self, x: f64) {
        self.swipe.touch_started(x);
    }

    pub fn touch_ended(&mut self, x: f64) -> Option<SwipeDirection> {
        let direction = self.swipe.touch_ended(x)?;
        match direction {
            SwipeDirection::Next => self.next_slide(),
            SwipeDirection::Previous => self.previous_slide(),
        }
        Some(direction)
    }

    // ===== MODAL =====

    pub fn modal_phase(&self) -> ModalPhase {
        self.modal.phase
    }

    /// True from `open_modal` until the fade-out has finished.
    pub fn is_modal_shown(&self) -> bool {
        self.modal.phase != ModalPhase::Closed
    }

    pub fn current_modal_image(&self) -> usize {
        self.modal.current_image
    }

    /// Shows slide `index` enlarged and starts the fade-in. Reopening during
    /// a fade-out cancels the pending hide.
    pub fn open_modal(&mut self, index: usize) -> Result<(), GalleryError> {
        let slide = self.deck.get(index)?;

        self.modal.phase = ModalPhase::Open;
        self.modal.current_image = index;
        self.modal.visibility_generation += 1;
        self.modal.image_generation += 1;

        self.view.set_modal_image(slide);
        self.view.set_modal_image_opacity(1.0);
        self.view.set_modal_visible(true);
        self.view.set_page_scroll_locked(true);
        self.view.set_modal_opacity(0.0);

        self.scheduler.defer(
            self.settings.fade_in_delay_ms,
            Deferred::RevealModal {
                generation: self.modal.visibility_generation,
            },
        );
        Ok(())
    }

    /// Starts the fade-out. The modal is hidden and scrolling restored only
    /// once the fade has run.
    pub fn close_modal(&mut self) {
        if self.modal.phase != ModalPhase::Open {
            return;
        }
        self.modal.phase = ModalPhase::Closing;
        self.modal.visibility_generation += 1;
        self.view.set_modal_opacity(0.0);
        self.scheduler.defer(
            self.settings.fade_out_ms,
            Deferred::HideModal {
                generation: self.modal.visibility_generation,
            },
        );
    }

    pub fn modal_next_image(&mut self) {
        let next = self.deck.next_index(self.modal.current_image);
        self.cross_fade_to(next);
    }

    pub fn modal_previous_image(&mut self) {
        let previous = self.deck.previous_index(self.modal.current_image);
        self.cross_fade_to(previous);
    }

    fn cross_fade_to(&mut self, index: usize) {
        self.modal.current_image = index;
        self.modal.image_generation += 1;
        self.view
            .set_modal_image_opacity(self.settings.cross_fade_dim_opacity);
        self.scheduler.defer(
            self.settings.cross_fade_ms,
            Deferred::SwapModalImage {
                generation: self.modal.image_generation,
            },
        );
    }

    /// Returns whether the key was consumed. Keys are ignored while the
    /// modal is closed.
    pub fn handle_key(&mut self, key: GalleryKey) -> bool {
        if !self.is_modal_shown() {
            return false;
        }
        match key {
            GalleryKey::Escape => self.close_modal(),
            GalleryKey::ArrowLeft => self.modal_previous_image(),
            GalleryKey::ArrowRight => self.modal_next_image(),
        }
        true
    }

    /// Completes a fade step. Tasks from a superseded generation do nothing.
    pub fn run_deferred(&mut self, task: Deferred) {
        match task {
            Deferred::RevealModal { generation } => {
                if generation == self.modal.visibility_generation
                    && self.modal.phase == ModalPhase::Open
                {
                    self.view.set_modal_opacity(1.0);
                }
            }
            Deferred::HideModal { generation } => {
                if generation == self.modal.visibility_generation
                    && self.modal.phase == ModalPhase::Closing
                {
                    self.modal.phase = ModalPhase::Closed;
                    self.view.set_modal_visible(false);
                    self.view.set_page_scroll_locked(false);
                }
            }
            Deferred::SwapModalImage { generation } => {
                if generation != self.modal.image_generation {
                    return;
                }
                if let Ok(slide) = self.deck.get(self.modal.current_image) {
                    self.view.set_modal_image(slide);
                    self.view.set_modal_image_opacity(1.0);
                }
            }
        }
    }
}
