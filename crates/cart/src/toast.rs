//! Toast lifecycle: replacement, visibility, fade, expiry.
//!
//! The browser version scheduled a fire-and-forget dismiss timer per
//! toast. Here the schedule is explicit: [`ToastRack`] holds at most one
//! active toast tagged with a generation counter, and a new `show` cancels
//! the previous toast immediately (no visual overlap). Expiry is evaluated
//! against a caller-supplied [`Instant`], so there is no background timer
//! and tests never sleep.

use std::time::{Duration, Instant};

/// How long a toast stays fully visible.
pub const TOAST_VISIBLE: Duration = Duration::from_millis(2500);

/// How long the fade-out transition runs after the visible window.
pub const TOAST_FADE: Duration = Duration::from_millis(300);

/// Display phase of a toast at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Fully visible.
    Visible,
    /// Fade-out transition running.
    Fading,
    /// Past the fade window; the element is gone.
    Expired,
}

/// One scheduled toast.
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    shown_at: Instant,
    /// Cancellation token: a toast whose generation no longer matches the
    /// rack's is already replaced.
    generation: u64,
}

impl Toast {
    /// The displayed message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Generation token assigned by the rack.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Phase of this toast at `now`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> ToastPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < TOAST_VISIBLE {
            ToastPhase::Visible
        } else if elapsed < TOAST_VISIBLE + TOAST_FADE {
            ToastPhase::Fading
        } else {
            ToastPhase::Expired
        }
    }
}

/// Holder of the single active toast.
#[derive(Debug, Default)]
pub struct ToastRack {
    active: Option<Toast>,
    generation: u64,
}

impl ToastRack {
    /// Create an empty rack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: None,
            generation: 0,
        }
    }

    /// Show a toast, replacing and cancelling any active one.
    ///
    /// Returns the generation token of the new toast; a dismiss callback
    /// holding a stale token must not remove the current toast.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.generation += 1;
        self.active = Some(Toast {
            message: message.into(),
            shown_at: now,
            generation: self.generation,
        });
        self.generation
    }

    /// The active toast, if it has not expired by `now`.
    #[must_use]
    pub fn active(&self, now: Instant) -> Option<&Toast> {
        self.active
            .as_ref()
            .filter(|t| t.phase(now) != ToastPhase::Expired)
    }

    /// Drop the active toast if it has expired by `now`.
    ///
    /// Returns `true` if a toast was removed.
    pub fn sweep(&mut self, now: Instant) -> bool {
        match &self.active {
            Some(toast) if toast.phase(now) == ToastPhase::Expired => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Dismiss the toast with the given generation token, if it is still
    /// the active one. Stale tokens are ignored.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        match &self.active {
            Some(toast) if toast.generation == generation => {
                self.active = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        let mut rack = ToastRack::new();
        let start = Instant::now();
        rack.show("added", start);

        let toast = rack.active(start).expect("visible").clone();
        assert_eq!(toast.phase(start), ToastPhase::Visible);
        assert_eq!(
            toast.phase(start + TOAST_VISIBLE + Duration::from_millis(1)),
            ToastPhase::Fading
        );
        assert_eq!(
            toast.phase(start + TOAST_VISIBLE + TOAST_FADE),
            ToastPhase::Expired
        );
    }

    #[test]
    fn test_show_replaces_active_toast() {
        let mut rack = ToastRack::new();
        let start = Instant::now();
        let first = rack.show("first", start);
        let second = rack.show("second", start + Duration::from_millis(100));

        assert_ne!(first, second);
        let active = rack
            .active(start + Duration::from_millis(100))
            .expect("active");
        assert_eq!(active.message(), "second");
    }

    #[test]
    fn test_stale_dismiss_token_ignored() {
        let mut rack = ToastRack::new();
        let start = Instant::now();
        let first = rack.show("first", start);
        rack.show("second", start);

        assert!(!rack.dismiss(first));
        assert!(rack.active(start).is_some());
    }

    #[test]
    fn test_sweep_removes_expired() {
        let mut rack = ToastRack::new();
        let start = Instant::now();
        rack.show("added", start);

        let before_expiry = start + TOAST_VISIBLE;
        assert!(!rack.sweep(before_expiry));
        assert!(rack.active(before_expiry).is_some());

        let after_expiry = start + TOAST_VISIBLE + TOAST_FADE;
        assert!(rack.sweep(after_expiry));
        assert!(rack.active(after_expiry).is_none());
    }
}
