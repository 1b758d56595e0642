// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! TIM4 channel 1 as a square-wave tone timer.
//!
//! The counter runs from the APB1 timer clock through the prescaler, resets when it reaches ARR,
//! and toggles CH1 (PD12) on every CCR1 match. ARR and CCR1 always hold the same compare value, so
//! one output period is two compare periods.

use simon::hw::ToneTimer;
use stm32f7xx_hal::pac;

/// Output-compare mode "toggle on match" for OC1M.
const OC1M_TOGGLE: u32 = 0b011;
const OC1M_SHIFT: u32 = 4;
const OC1M_MASK: u32 = 0b111 << OC1M_SHIFT;

pub struct TimerTone<TIM> {
    tim: TIM,
    prescaler: u16,
}

impl<TIM> TimerTone<TIM> {
    /// Consume the wrapper and return the underlying timer peripheral.
    #[inline]
    pub fn free(self) -> TIM {
        self.tim
    }
}

impl TimerTone<pac::TIM4> {
    /// Enable the TIM4 clock. `prescaler` is the counter division (PSC + 1).
    pub fn tim4(tim4: pac::TIM4, prescaler: u16) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

        Self {
            tim: tim4,
            prescaler: prescaler.max(1),
        }
    }
}

impl ToneTimer for TimerTone<pac::TIM4> {
    fn configure(&mut self) {
        let tim = &self.tim;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| unsafe { w.bits(u32::from(self.prescaler - 1)) });
        tim.arr.write(|w| unsafe { w.bits(0xFFFF) });
        tim.ccr1.write(|w| unsafe { w.bits(0xFFFF) });

        // CH1 as output, toggle on match, no preload so new compare values apply immediately.
        tim.ccmr1_output().modify(|r, w| unsafe {
            w.bits((r.bits() & !(OC1M_MASK | 0b11 | (1 << 3))) | (OC1M_TOGGLE << OC1M_SHIFT))
        });
        tim.ccer.modify(|_, w| w.cc1e().set_bit().cc1p().clear_bit());

        // Latch PSC
        tim.egr.write(|w| w.ug().set_bit());
        tim.cnt.write(|w| unsafe { w.bits(0) });
    }

    fn set_compare(&mut self, compare: u16) {
        self.tim.arr.write(|w| unsafe { w.bits(u32::from(compare)) });
        self.tim.ccr1.write(|w| unsafe { w.bits(u32::from(compare)) });
    }

    #[inline]
    fn reset_counter(&mut self) {
        self.tim.cnt.write(|w| unsafe { w.bits(0) });
    }

    #[inline]
    fn start(&mut self) {
        self.tim.cr1.modify(|_, w| w.cen().set_bit());
    }

    #[inline]
    fn stop(&mut self) {
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
    }

    fn disable(&mut self) {
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
        self.tim.ccer.modify(|_, w| w.cc1e().clear_bit());
        self.tim
            .ccmr1_output()
            .modify(|r, w| unsafe { w.bits(r.bits() & !OC1M_MASK) });
    }
}
