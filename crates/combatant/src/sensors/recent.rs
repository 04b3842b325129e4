/// Number of event times a [`RecentEventTracker`] remembers.
pub const TRACKER_CAPACITY: usize = 16;

/// Fixed-size ring buffer of event times with a reaction-delay window test.
///
/// Empty slots hold `-inf`, which never satisfies the window test.
#[derive(Clone, Debug)]
pub struct RecentEventTracker {
    times: [f32; TRACKER_CAPACITY],
    next: usize,
}

impl RecentEventTracker {
    pub fn new() -> Self {
        Self {
            times: [f32::NEG_INFINITY; TRACKER_CAPACITY],
            next: 0,
        }
    }

    /// Records an event, overwriting the oldest slot once full.
    pub fn push(&mut self, time: f32) {
        self.times[self.next] = time;
        self.next = (self.next + 1) % TRACKER_CAPACITY;
    }

    pub fn reset(&mut self) {
        self.times = [f32::NEG_INFINITY; TRACKER_CAPACITY];
        self.next = 0;
    }

    /// True if some event `t` satisfies `0 <= now - t - delay < timeout`:
    /// it has been noticed already and not yet forgotten.
    pub fn any_within(&self, now: f32, delay: f32, timeout: f32) -> bool {
        self.times.iter().any(|&t| {
            let age = now - t - delay;
            (0.0..timeout).contains(&age)
        })
    }

    /// Time at which the most recent already-noticed event was noticed
    /// (`t + delay`), or `-inf` if none.
    pub fn latest_noticed(&self, now: f32, delay: f32) -> f32 {
        self.times
            .iter()
            .map(|&t| t + delay)
            .filter(|&noticed| noticed.is_finite() && noticed <= now)
            .fold(f32::NEG_INFINITY, f32::max)
    }
}

impl Default for RecentEventTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_reports_nothing() {
        let tracker = RecentEventTracker::new();
        assert!(!tracker.any_within(0.0, 0.0, 100.0));
        assert_eq!(tracker.latest_noticed(0.0, 0.0), f32::NEG_INFINITY);
    }

    #[test]
    fn reaction_delay_postpones_and_timeout_expires() {
        let mut tracker = RecentEventTracker::new();
        tracker.push(10.0);
        assert!(!tracker.any_within(10.1, 0.25, 3.0));
        assert!(tracker.any_within(10.25, 0.25, 3.0));
        assert!(tracker.any_within(13.0, 0.25, 3.0));
        assert!(!tracker.any_within(13.25, 0.25, 3.0));
    }

    #[test]
    fn oldest_slot_is_overwritten() {
        let mut tracker = RecentEventTracker::new();
        tracker.push(1.0);
        for i in 0..TRACKER_CAPACITY {
            tracker.push(100.0 + i as f32);
        }
        // The event at t=1 is gone, so a window around it finds nothing.
        assert!(!tracker.any_within(1.5, 0.0, 1.0));
        assert_eq!(tracker.latest_noticed(200.0, 0.0), 115.0);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut tracker = RecentEventTracker::new();
        tracker.push(5.0);
        tracker.reset();
        assert!(!tracker.any_within(5.0, 0.0, 10.0));
    }
}
