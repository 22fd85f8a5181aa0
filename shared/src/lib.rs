//! Browser-independent core of the Studio Bragi site scripts: the artist
//! gallery controller, site configuration and the small pure helpers the
//! page glue needs.

pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod placeholder;
pub mod scheduler;
pub mod slides;
pub mod swipe;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::{ContactSection, GallerySection, RevealSection, SiteConfig};
pub use contact::whatsapp_url;
pub use error::{ConfigError, GalleryError};
pub use gallery::{ArtistGallery, GalleryKey, ModalPhase};
pub use placeholder::{BROKEN_IMAGE_PLACEHOLDER, fallback_source};
pub use scheduler::{Deferred, DeferredSlot, Scheduler};
pub use slides::{Slide, SlideDeck};
pub use swipe::{SwipeDirection, SwipeTracker};
pub use view::GalleryView;
