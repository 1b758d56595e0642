// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Square-wave tone generator.
//!
//! The generator drives a timer that toggles its output pin on every compare match and restarts
//! counting from zero, so the pin frequency is set entirely by the compare value:
//!
//! ```text
//! compare = floor(clock_hz / (prescaler * hz)) - 1
//! ```
//!
//! `prescaler` is the total division between the timer clock and one output period, which for a
//! toggled output is twice the counter prescaler. Requests outside the representable range saturate
//! to the slowest (`compare = 0xFFFF`) or fastest (`compare = 0`) tone.

/// Register-level operations the generator needs from a compare-match timer.
pub trait ToneTimer {
    /// Select toggle-on-match output and clear-on-match counting. Leaves the counter stopped.
    fn configure(&mut self);

    /// Program the compare value that ends one half period.
    fn set_compare(&mut self, compare: u16);

    /// Zero the running count.
    fn reset_counter(&mut self);

    /// Let the counter run.
    fn start(&mut self);

    /// Halt the counter. The output pin keeps its configuration.
    fn stop(&mut self);

    /// Undo [`configure`](Self::configure) and stop everything.
    fn disable(&mut self);
}

/// Anything that can sound a single pitch. `0.0` is silence.
pub trait Voice {
    fn set_frequency(&mut self, hz: f32);

    #[inline]
    fn silence(&mut self) {
        self.set_frequency(0.0);
    }
}

/// Timer clock and total output divider.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToneClock {
    pub clock_hz: u32,
    pub prescaler: u32,
}

impl ToneClock {
    pub const fn new(clock_hz: u32, prescaler: u32) -> Self {
        Self {
            clock_hz,
            prescaler,
        }
    }

    /// Compare-register counts per second of output.
    #[inline]
    fn counts_per_second(&self) -> f32 {
        self.clock_hz as f32 / self.prescaler.max(1) as f32
    }

    /// Slowest representable tone (compare = `0xFFFF`).
    #[inline]
    pub fn min_hz(&self) -> f32 {
        self.counts_per_second() / 65_536.0
    }

    /// Fastest representable tone (compare = 0).
    #[inline]
    pub fn max_hz(&self) -> f32 {
        self.counts_per_second()
    }

    /// Compare value for a non-zero frequency, saturated to the register range.
    pub fn compare_for(&self, hz: f32) -> u16 {
        // NaN and negative requests fall through to the slow end as well.
        if !(hz >= self.min_hz()) {
            return u16::MAX;
        }
        if hz >= self.max_hz() {
            return 0;
        }
        let counts = (self.counts_per_second() / hz) as u32;
        counts.saturating_sub(1).min(u16::MAX as u32) as u16
    }
}

/// Tone generator over a [`ToneTimer`].
///
/// Hardware is only reprogrammed when the requested pitch changes, so calling
/// [`set_frequency`](Self::set_frequency) every tick with the same value keeps the waveform phase
/// intact.
pub struct ToneGenerator<T: ToneTimer> {
    timer: T,
    clock: ToneClock,
    /// Last applied frequency. `None` forces the next request through.
    current: Option<f32>,
    on: bool,
}

impl<T: ToneTimer> ToneGenerator<T> {
    /// Wrap a timer. The generator starts off; call [`turn_on`](Self::turn_on).
    pub fn new(timer: T, clock: ToneClock) -> Self {
        Self {
            timer,
            clock,
            current: None,
            on: false,
        }
    }

    /// Configure the waveform mode and start silent.
    pub fn turn_on(&mut self) {
        self.timer.configure();
        self.on = true;
        self.current = None;
        self.set_frequency(0.0);
    }

    /// Fully disable the timer. Requests are ignored until the next [`turn_on`](Self::turn_on).
    pub fn turn_off(&mut self) {
        self.timer.disable();
        self.on = false;
        self.current = None;
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Frequency currently applied to the hardware, if any.
    #[inline]
    pub fn frequency(&self) -> Option<f32> {
        self.current
    }

    #[inline]
    pub fn clock(&self) -> ToneClock {
        self.clock
    }

    /// Sound `hz`, or stop the counter for `0.0`.
    ///
    /// NaN and negative requests all count as one request for the slowest tone, recorded as
    /// negative infinity.
    pub fn set_frequency(&mut self, hz: f32) {
        let hz = if hz.is_nan() || hz < 0.0 {
            f32::NEG_INFINITY
        } else {
            hz
        };
        if !self.on || self.current == Some(hz) {
            return;
        }

        if hz == 0.0 {
            self.timer.stop();
        } else {
            self.timer.set_compare(self.clock.compare_for(hz));
            self.timer.start();
        }
        self.timer.reset_counter();
        self.current = Some(hz);
    }

    pub fn free(self) -> T {
        self.timer
    }
}

impl<T: ToneTimer> Voice for ToneGenerator<T> {
    #[inline]
    fn set_frequency(&mut self, hz: f32) {
        ToneGenerator::set_frequency(self, hz);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Configure,
        Compare(u16),
        Reset,
        Start,
        Stop,
        Disable,
    }

    #[derive(Default)]
    struct FakeTimer {
        ops: Vec<Op>,
    }

    impl ToneTimer for FakeTimer {
        fn configure(&mut self) {
            self.ops.push(Op::Configure);
        }
        fn set_compare(&mut self, compare: u16) {
            self.ops.push(Op::Compare(compare));
        }
        fn reset_counter(&mut self) {
            self.ops.push(Op::Reset);
        }
        fn start(&mut self) {
            self.ops.push(Op::Start);
        }
        fn stop(&mut self) {
            self.ops.push(Op::Stop);
        }
        fn disable(&mut self) {
            self.ops.push(Op::Disable);
        }
    }

    /// 8 MHz clock, /64 counter prescaler, toggled output.
    const AVR_CLOCK: ToneClock = ToneClock::new(8_000_000, 128);

    fn generator() -> ToneGenerator<FakeTimer> {
        let mut tone = ToneGenerator::new(FakeTimer::default(), AVR_CLOCK);
        tone.turn_on();
        tone.timer.ops.clear();
        tone
    }

    #[test]
    fn compare_value_follows_formula() {
        assert_eq!(AVR_CLOCK.compare_for(523.251), 118);
        assert_eq!(AVR_CLOCK.compare_for(329.63), 188);
        assert_eq!(AVR_CLOCK.compare_for(392.0), 158);
        assert_eq!(AVR_CLOCK.compare_for(493.88), 125);
    }

    #[test]
    fn slow_requests_saturate_to_slowest_tone() {
        assert_eq!(AVR_CLOCK.compare_for(0.5), u16::MAX);
        assert_eq!(AVR_CLOCK.compare_for(0.001), u16::MAX);
        assert_eq!(AVR_CLOCK.compare_for(-440.0), u16::MAX);
        assert_eq!(AVR_CLOCK.compare_for(f32::NAN), u16::MAX);
        assert_eq!(AVR_CLOCK.compare_for(AVR_CLOCK.min_hz()), u16::MAX);
    }

    #[test]
    fn fast_requests_saturate_to_fastest_tone() {
        assert_eq!(AVR_CLOCK.compare_for(62_500.0), 0);
        assert_eq!(AVR_CLOCK.compare_for(1_000_000.0), 0);
        assert_eq!(AVR_CLOCK.compare_for(f32::INFINITY), 0);
        // Just below the top: one count, compare 0.
        assert_eq!(AVR_CLOCK.compare_for(40_000.0), 0);
    }

    #[test]
    fn turn_on_configures_and_starts_silent() {
        let mut tone = ToneGenerator::new(FakeTimer::default(), AVR_CLOCK);
        tone.turn_on();
        assert!(tone.is_on());
        assert_eq!(tone.frequency(), Some(0.0));
        assert_eq!(tone.timer.ops, [Op::Configure, Op::Stop, Op::Reset]);
    }

    #[test]
    fn new_pitch_programs_compare_and_starts() {
        let mut tone = generator();
        tone.set_frequency(392.0);
        assert_eq!(tone.timer.ops, [Op::Compare(158), Op::Start, Op::Reset]);
        assert_eq!(tone.frequency(), Some(392.0));
    }

    #[test]
    fn repeated_pitch_does_not_touch_hardware() {
        let mut tone = generator();
        tone.set_frequency(493.88);
        let writes = tone.timer.ops.len();

        tone.set_frequency(493.88);
        tone.set_frequency(493.88);
        assert_eq!(tone.timer.ops.len(), writes);
    }

    #[test]
    fn repeated_nan_or_negative_writes_once() {
        let mut tone = generator();
        tone.set_frequency(f32::NAN);
        assert_eq!(
            tone.timer.ops,
            [Op::Compare(u16::MAX), Op::Start, Op::Reset]
        );

        tone.set_frequency(f32::NAN);
        tone.set_frequency(-440.0);
        tone.set_frequency(f32::NEG_INFINITY);
        assert_eq!(tone.timer.ops.len(), 3);
        assert_eq!(tone.frequency(), Some(f32::NEG_INFINITY));
    }

    #[test]
    fn zero_stops_the_counter() {
        let mut tone = generator();
        tone.set_frequency(329.63);
        tone.timer.ops.clear();

        tone.silence();
        assert_eq!(tone.timer.ops, [Op::Stop, Op::Reset]);
        tone.silence();
        assert_eq!(tone.timer.ops.len(), 2);
    }

    #[test]
    fn requests_while_off_are_ignored() {
        let mut tone = generator();
        tone.turn_off();
        assert_eq!(tone.timer.ops, [Op::Disable]);

        tone.set_frequency(440.0);
        assert_eq!(tone.timer.ops, [Op::Disable]);
        assert_eq!(tone.frequency(), None);
    }

    #[test]
    fn turn_on_after_off_reprograms_same_pitch() {
        let mut tone = generator();
        tone.set_frequency(440.0);
        tone.turn_off();
        tone.turn_on();
        tone.timer.ops.clear();

        tone.set_frequency(440.0);
        assert!(tone.timer.ops.contains(&Op::Start));
    }
}
