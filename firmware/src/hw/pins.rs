// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the Simon board on an STM32F767ZI Nucleo.

use stm32f7xx_hal::{
    gpio::{gpiod, gpioe, Alternate, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub buttons: ButtonPins,
    pub leds: LedPins,
    pub buzzer: BuzzerPins,
    pub usart2: Usart2Pins,
    pub usart3: Usart3Pins,
}

/// Active-low push buttons, internal pull-ups.
pub struct ButtonPins {
    pub north: gpioe::PE2<Input<PullUp>>,
    pub east: gpioe::PE3<Input<PullUp>>,
    pub south: gpioe::PE4<Input<PullUp>>,
    pub west: gpioe::PE5<Input<PullUp>>,
}

/// Active-high direction LEDs.
pub struct LedPins {
    pub north: gpioe::PE7<Output<PushPull>>,
    pub east: gpioe::PE8<Output<PushPull>>,
    pub south: gpioe::PE10<Output<PushPull>>,
    pub west: gpioe::PE12<Output<PushPull>>,
}

pub struct BuzzerPins {
    pub out: gpiod::PD12<Alternate<2>>, // TIM4_CH1
}

/// USART2 TX/RX (debug log)
pub struct Usart2Pins {
    pub tx: gpiod::PD5<Alternate<7>>,
    pub rx: gpiod::PD6<Alternate<7>>,
}

/// USART3 TX/RX (ST-LINK virtual COM port, display terminal)
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            buttons: ButtonPins {
                north: gpioe.pe2.into_pull_up_input(),
                east: gpioe.pe3.into_pull_up_input(),
                south: gpioe.pe4.into_pull_up_input(),
                west: gpioe.pe5.into_pull_up_input(),
            },

            leds: LedPins {
                north: gpioe.pe7.into_push_pull_output(),
                east: gpioe.pe8.into_push_pull_output(),
                south: gpioe.pe10.into_push_pull_output(),
                west: gpioe.pe12.into_push_pull_output(),
            },

            buzzer: BuzzerPins {
                out: gpiod.pd12.into_alternate::<2>(),
            },

            usart2: Usart2Pins {
                tx: gpiod.pd5.into_alternate::<7>(),
                rx: gpiod.pd6.into_alternate::<7>(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },
        }
    }
}
