//! Test doubles for driving `ArtistGallery` without a browser.

use crate::config::GallerySection;
use crate::gallery::ArtistGallery;
use crate::scheduler::{Deferred, Scheduler};
use crate::slides::{Slide, SlideDeck};
use crate::view::GalleryView;

/// Keeps the last value written through every `GalleryView` method.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub track_offset: i64,
    pub dots: Vec<bool>,
    pub thumbnails: Vec<bool>,
    pub modal_visible: bool,
    pub modal_opacity: f32,
    pub modal_image: Option<Slide>,
    pub modal_image_writes: usize,
    pub modal_image_opacity: f32,
    pub scroll_locked: bool,
}

impl RecordingView {
    pub fn new(count: usize) -> Self {
        Self {
            dots: vec![false; count],
            thumbnails: vec![false; count],
            modal_opacity: 1.0,
            modal_image_opacity: 1.0,
            ..Self::default()
        }
    }
}

fn set_flag(flags: &mut Vec<bool>, index: usize, value: bool) {
    if flags.len() <= index {
        flags.resize(index + 1, false);
    }
    flags[index] = value;
}

impl GalleryView for RecordingView {
    fn set_track_offset(&mut self, percent: i64) {
        self.track_offset = percent;
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        set_flag(&mut self.dots, index, active);
    }

    fn set_thumbnail_active(&mut self, index: usize, active: bool) {
        set_flag(&mut self.thumbnails, index, active);
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    fn set_modal_opacity(&mut self, opacity: f32) {
        self.modal_opacity = opacity;
    }

    fn set_modal_image(&mut self, slide: &Slide) {
        self.modal_image = Some(slide.clone());
        self.modal_image_writes += 1;
    }

    fn set_modal_image_opacity(&mut self, opacity: f32) {
        self.modal_image_opacity = opacity;
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

#[derive(Debug, Clone, Copy)]
struct ArmedInterval {
    period_ms: u64,
    next_due_ms: u64,
}

#[derive(Debug, Clone, Copy)]
struct PendingTask {
    due_ms: u64,
    seq: u64,
    task: Deferred,
}

pub enum Fired {
    Tick,
    Deferred(Deferred),
}

/// Virtual-clock scheduler. Like raw `setInterval`, starting an interval
/// without stopping the previous one leaks it, so double arming shows up
/// in `armed_intervals`.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    seq: u64,
    intervals: Vec<ArmedInterval>,
    pending: Vec<PendingTask>,
}

impl ManualScheduler {
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn armed_intervals(&self) -> usize {
        self.intervals.len()
    }

    pub fn pending_deferred(&self) -> usize {
        self.pending.len()
    }

    /// Pops the earliest timer due at or before `until_ms` and moves the
    /// clock to it.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired> {
        let next_task = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due_ms <= until_ms)
            .min_by_key(|(_, pending)| (pending.due_ms, pending.seq))
            .map(|(position, pending)| (position, pending.due_ms));
        let next_tick = self
            .intervals
            .iter()
            .enumerate()
            .filter(|(_, interval)| interval.next_due_ms <= until_ms)
            .min_by_key(|(_, interval)| interval.next_due_ms)
            .map(|(position, interval)| (position, interval.next_due_ms));

        match (next_task, next_tick) {
            (Some((position, due)), tick) if tick.is_none_or(|(_, tick_due)| due <= tick_due) => {
                self.now_ms = due;
                Some(Fired::Deferred(self.pending.remove(position).task))
            }
            (_, Some((position, due))) => {
                self.now_ms = due;
                let interval = &mut self.intervals[position];
                interval.next_due_ms += interval.period_ms;
                Some(Fired::Tick)
            }
            _ => None,
        }
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl Scheduler for ManualScheduler {
    fn start_interval(&mut self, period_ms: u32) {
        let period_ms = u64::from(period_ms.max(1));
        self.intervals.push(ArmedInterval {
            period_ms,
            next_due_ms: self.now_ms + period_ms,
        });
    }

    fn stop_interval(&mut self) {
        self.intervals.pop();
    }

    fn is_interval_armed(&self) -> bool {
        !self.intervals.is_empty()
    }

    fn defer(&mut self, delay_ms: u32, task: Deferred) {
        self.pending.retain(|pending| pending.task.slot() != task.slot());
        self.seq += 1;
        self.pending.push(PendingTask {
            due_ms: self.now_ms + u64::from(delay_ms),
            seq: self.seq,
            task,
        });
    }
}

/// Deck of `count` slides named `Foto 0`, `Foto 1`, ... with default timings.
pub fn gallery_with(count: usize) -> ArtistGallery<RecordingView, ManualScheduler> {
    let slides = (0..count)
        .map(|i| Slide::new(format!("img/artista1/{i}.jpg"), format!("Foto {i}")))
        .collect();
    let deck = SlideDeck::new(slides).expect("test deck is not empty");
    ArtistGallery::new(
        deck,
        GallerySection::default(),
        RecordingView::new(count),
        ManualScheduler::default(),
    )
}

/// Moves the virtual clock forward by `ms`, firing every timer that comes
/// due on the way in order.
pub fn advance<V: GalleryView>(gallery: &mut ArtistGallery<V, ManualScheduler>, ms: u64) {
    let until_ms = gallery.scheduler().now_ms() + ms;
    while let Some(fired) = gallery.scheduler_mut().pop_due(until_ms) {
        match fired {
            Fired::Tick => gallery.auto_advance_tick(),
            Fired::Deferred(task) => gallery.run_deferred(task),
        }
    }
    gallery.scheduler_mut().set_now(until_ms);
}
