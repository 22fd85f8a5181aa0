use crate::error::GalleryError;

/// One image of the carousel, as found in the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

impl Slide {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Fixed, non-empty sequence of slides. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, GalleryError> {
        if slides.is_empty() {
            return Err(GalleryError::EmptyDeck);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    // A deck is never empty, but clippy wants the pair.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Slide, GalleryError> {
        self.slides.get(index).ok_or(GalleryError::SlideOutOfRange {
            index,
            total: self.slides.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Index after `index`, wrapping past the last slide to the first.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    /// Index before `index`, wrapping from the first slide to the last.
    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.len() - 1) % self.len()
    }
}
