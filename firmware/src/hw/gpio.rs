// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `embedded-hal` 1.0 digital pin adapters for HAL pins.
//!
//! The core library only speaks `embedded_hal::digital`; these wrappers forward to the HAL pins'
//! inherent level methods.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use stm32f7xx_hal::gpio::{self, Input, Output, PullUp, PushPull};

/// Pulled-up button input.
pub struct Button<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Input<PullUp>>,
}

impl<const P: char, const N: u8> Button<P, N> {
    pub fn new(pin: gpio::Pin<P, N, Input<PullUp>>) -> Self {
        Self { pin }
    }

    pub fn free(self) -> gpio::Pin<P, N, Input<PullUp>> {
        self.pin
    }
}

impl<const P: char, const N: u8> ErrorType for Button<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> InputPin for Button<P, N> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_high())
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_low())
    }
}

/// Push-pull LED output.
pub struct Lamp<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> Lamp<P, N> {
    pub fn new(pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
        Self { pin }
    }

    pub fn free(self) -> gpio::Pin<P, N, Output<PushPull>> {
        self.pin
    }
}

impl<const P: char, const N: u8> ErrorType for Lamp<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> OutputPin for Lamp<P, N> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.pin.set_low();
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.pin.set_high();
        Ok(())
    }
}
