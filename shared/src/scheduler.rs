//! Timer seam. The controller asks for timers, the host runs them and calls
//! back into the controller when they fire.

/// Deferred modal work. Each variant carries the generation it was issued
/// under; the controller ignores it once that generation is superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Second half of the fade-in: raise the modal to full opacity.
    RevealModal { generation: u64 },
    /// End of the fade-out: hide the modal and give scrolling back.
    HideModal { generation: u64 },
    /// Middle of the cross-fade: show the current modal image again.
    SwapModalImage { generation: u64 },
}

/// Slot a deferred task occupies on the host. A new task in a slot replaces
/// (and cancels) the pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredSlot {
    Reveal,
    Hide,
    Swap,
}

impl Deferred {
    pub fn slot(&self) -> DeferredSlot {
        match self {
            Deferred::RevealModal { .. } => DeferredSlot::Reveal,
            Deferred::HideModal { .. } => DeferredSlot::Hide,
            Deferred::SwapModalImage { .. } => DeferredSlot::Swap,
        }
    }
}

pub trait Scheduler {
    /// Arms the recurring auto-advance timer. The controller always stops
    /// the previous one first.
    fn start_interval(&mut self, period_ms: u32);

    /// Disarms the most recently armed auto-advance timer. No-op when
    /// nothing is armed.
    fn stop_interval(&mut self);

    fn is_interval_armed(&self) -> bool;

    /// Runs `task` once after `delay_ms`, replacing whatever waits in the
    /// same slot.
    fn defer(&mut self, delay_ms: u32, task: Deferred);
}
