// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Cooperative tick source fed from a periodic 1 ms interrupt.
//!
//! The interrupt handler calls [`TickSource::on_interrupt`] once per millisecond. Every `period_ms`
//! interrupts the source raises a single "due" flag, which the main loop drains with
//! [`TickSource::consume_pending`] or [`TickSource::wait`]. Pending ticks are not queued: a second
//! period that elapses before the flag is drained folds into the first one.
//!
//! ```ignore
//! static TICKS: TickSource = TickSource::new();
//!
//! #[exception]
//! fn SysTick() {
//!     TICKS.on_interrupt();
//! }
//!
//! TICKS.arm(50);
//! loop {
//!     TICKS.wait();
//!     // ... one step every 50 ms
//! }
//! ```

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Interrupt-to-main-loop tick flag with a reloading millisecond countdown.
///
/// This is the only state touched from interrupt context. The main loop only writes the countdown
/// inside a critical section, so the handler's load/store pair can never interleave with it.
pub struct TickSource {
    period_ms: AtomicU32,
    /// Interrupts left until the next tick. 0 means disarmed.
    countdown: AtomicU32,
    due: AtomicBool,
}

impl TickSource {
    /// Create a disarmed tick source. `const` so it can live in a `static`.
    pub const fn new() -> Self {
        Self {
            period_ms: AtomicU32::new(1),
            countdown: AtomicU32::new(0),
            due: AtomicBool::new(false),
        }
    }

    /// Set the tick period and restart the countdown. Any pending tick is dropped.
    ///
    /// A period of 0 is treated as 1 ms.
    pub fn arm(&self, period_ms: u32) {
        let period_ms = period_ms.max(1);
        critical_section::with(|_| {
            self.period_ms.store(period_ms, Ordering::Relaxed);
            self.countdown.store(period_ms, Ordering::Relaxed);
            self.due.store(false, Ordering::Release);
        });
    }

    /// Stop producing ticks until the next [`arm`](Self::arm).
    pub fn disarm(&self) {
        critical_section::with(|_| {
            self.countdown.store(0, Ordering::Relaxed);
            self.due.store(false, Ordering::Release);
        });
    }

    #[inline]
    pub fn period_ms(&self) -> u32 {
        self.period_ms.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.countdown.load(Ordering::Relaxed) != 0
    }

    /// Interrupt handler body. Call once per millisecond.
    pub fn on_interrupt(&self) {
        match self.countdown.load(Ordering::Relaxed) {
            0 => {}
            1 => {
                self.due.store(true, Ordering::Release);
                self.countdown
                    .store(self.period_ms.load(Ordering::Relaxed), Ordering::Relaxed);
            }
            n => self.countdown.store(n - 1, Ordering::Relaxed),
        }
    }

    /// Test-and-clear the due flag.
    #[inline]
    pub fn consume_pending(&self) -> bool {
        self.due.swap(false, Ordering::AcqRel)
    }

    /// Busy-wait until a tick is due, then clear it.
    pub fn wait(&self) {
        while !self.consume_pending() {
            core::hint::spin_loop();
        }
    }
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything the game loop can block on for "one tick".
pub trait TickWait {
    fn wait_tick(&mut self);

    fn wait_ticks(&mut self, n: u32) {
        for _ in 0..n {
            self.wait_tick();
        }
    }
}

impl TickWait for &TickSource {
    #[inline]
    fn wait_tick(&mut self) {
        TickSource::wait(*self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(ticks: &TickSource, n: u32) {
        for _ in 0..n {
            ticks.on_interrupt();
        }
    }

    #[test]
    fn disarmed_source_never_ticks() {
        let ticks = TickSource::new();
        assert!(!ticks.is_armed());
        fire(&ticks, 1_000);
        assert!(!ticks.consume_pending());
    }

    #[test]
    fn tick_is_due_after_one_period() {
        let ticks = TickSource::new();
        ticks.arm(50);

        fire(&ticks, 49);
        assert!(!ticks.consume_pending());

        fire(&ticks, 1);
        assert!(ticks.consume_pending());
        assert!(!ticks.consume_pending());
    }

    #[test]
    fn pending_ticks_do_not_queue() {
        let ticks = TickSource::new();
        ticks.arm(5);

        fire(&ticks, 15);
        assert!(ticks.consume_pending());
        assert!(!ticks.consume_pending());

        // The countdown kept reloading while nobody was looking.
        fire(&ticks, 5);
        assert!(ticks.consume_pending());
    }

    #[test]
    fn tight_loop_sees_one_tick_per_period() {
        let ticks = TickSource::new();
        ticks.arm(10);

        let mut seen = 0;
        for _ in 0..100 {
            ticks.on_interrupt();
            for _ in 0..3 {
                if ticks.consume_pending() {
                    seen += 1;
                }
            }
        }
        assert_eq!(seen, 10);
    }

    #[test]
    fn rearm_drops_pending_tick_and_restarts_countdown() {
        let ticks = TickSource::new();
        ticks.arm(2);
        fire(&ticks, 2);

        ticks.arm(3);
        assert_eq!(ticks.period_ms(), 3);
        assert!(!ticks.consume_pending());
        fire(&ticks, 2);
        assert!(!ticks.consume_pending());
        fire(&ticks, 1);
        assert!(ticks.consume_pending());
    }

    #[test]
    fn zero_period_is_one_millisecond() {
        let ticks = TickSource::new();
        ticks.arm(0);
        assert_eq!(ticks.period_ms(), 1);
        ticks.on_interrupt();
        assert!(ticks.consume_pending());
    }

    #[test]
    fn disarm_stops_ticks() {
        let ticks = TickSource::new();
        ticks.arm(1);
        ticks.on_interrupt();
        ticks.disarm();
        assert!(!ticks.consume_pending());
        fire(&ticks, 10);
        assert!(!ticks.consume_pending());
    }

    #[test]
    fn wait_returns_once_tick_is_pending() {
        let ticks = TickSource::new();
        ticks.arm(1);
        ticks.on_interrupt();

        let mut waiter = &ticks;
        waiter.wait_tick();
        assert!(!ticks.consume_pending());
    }
}
