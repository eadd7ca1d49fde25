//! A manual clock for driving timers without real time.
//!
//! Timers fire in due-time order; timers due at the same instant fire in the
//! order they were scheduled, matching how a browser event loop delivers
//! `setTimeout` callbacks.

use pagenav_traits::TimerScheduler;
use pagenav_types::Timer;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<(Duration, u64, Timer)>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers not yet fired.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse((due, _, _))| *due)
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Timer> {
        match self.queue.peek() {
            Some(Reverse((due, _, _))) if *due <= until => {}
            _ => return None,
        }
        let Reverse((due, _, timer)) = self.queue.pop()?;
        self.now = self.now.max(due);
        Some(timer)
    }

    /// Moves the clock forward. Never moves it backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl TimerScheduler for VirtualClock {
    fn schedule(&mut self, delay: Duration, timer: Timer) {
        let due = self.now + delay;
        self.queue.push(Reverse((due, self.seq, timer)));
        self.seq += 1;
    }

    fn name(&self) -> &'static str {
        "VirtualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut clock = VirtualClock::new();
        clock.schedule(ms(3000), Timer::HideCheck { epoch: 1 });
        clock.schedule(ms(500), Timer::DebounceClose { epoch: 1 });

        assert_eq!(clock.next_due(), Some(ms(500)));
        assert_eq!(clock.pop_due(ms(10_000)), Some(Timer::DebounceClose { epoch: 1 }));
        assert_eq!(clock.now(), ms(500));
        assert_eq!(clock.pop_due(ms(10_000)), Some(Timer::HideCheck { epoch: 1 }));
        assert_eq!(clock.pop_due(ms(10_000)), None);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut clock = VirtualClock::new();
        clock.schedule(ms(100), Timer::HideCheck { epoch: 9 });
        clock.schedule(ms(100), Timer::DebounceClose { epoch: 2 });

        assert_eq!(clock.pop_due(ms(100)), Some(Timer::HideCheck { epoch: 9 }));
        assert_eq!(clock.pop_due(ms(100)), Some(Timer::DebounceClose { epoch: 2 }));
    }

    #[test]
    fn test_not_due_yet() {
        let mut clock = VirtualClock::new();
        clock.schedule(ms(500), Timer::DebounceClose { epoch: 1 });
        assert_eq!(clock.pop_due(ms(499)), None);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut clock = VirtualClock::new();
        clock.set_now(ms(200));
        clock.schedule(ms(3000), Timer::HideCheck { epoch: 2 });
        assert_eq!(clock.next_due(), Some(ms(3200)));

        clock.set_now(ms(100));
        assert_eq!(clock.now(), ms(200));
    }
}
