use std::collections::HashMap;

use gloo_timers::callback::{Interval, Timeout};
use shared::{Deferred, DeferredSlot, Scheduler};

use crate::gallery::{WeakGallery, with_gallery};

/// `Scheduler` on browser timers. Timer callbacks hold only a weak handle,
/// so a dropped gallery is never revived by a late tick.
pub struct BrowserScheduler {
    gallery: WeakGallery,
    interval: Option<Interval>,
    deferred: HashMap<DeferredSlot, Timeout>,
}

impl BrowserScheduler {
    pub fn new(gallery: WeakGallery) -> Self {
        Self {
            gallery,
            interval: None,
            deferred: HashMap::new(),
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn start_interval(&mut self, period_ms: u32) {
        let gallery = self.gallery.clone();
        let interval = Interval::new(period_ms, move || {
            with_gallery(&gallery, |gallery| gallery.auto_advance_tick());
        });
        // Dropping the old handle clears it.
        self.interval = Some(interval);
    }

    fn stop_interval(&mut self) {
        self.interval = None;
    }

    fn is_interval_armed(&self) -> bool {
        self.interval.is_some()
    }

    fn defer(&mut self, delay_ms: u32, task: Deferred) {
        let gallery = self.gallery.clone();
        let timeout = Timeout::new(delay_ms, move || {
            with_gallery(&gallery, |gallery| gallery.run_deferred(task));
        });
        // Dropping the superseded timeout in this slot clears it.
        self.deferred.insert(task.slot(), timeout);
    }
}
