// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simon on an STM32F767ZI Nucleo.
//!
//! SysTick fires every millisecond and feeds the game's tick source. Everything else runs in the
//! cooperative loop inside [`GameEngine::run`].

#![no_main]
#![no_std]

use core::fmt::Write;

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};
use panic_halt as _;
use rand::rngs::SmallRng;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use simon::drivers::RngSymbols;
use simon::game::{GameConfig, GameEngine};
use simon::hw::{InputSampler, LedBank, TickSource, ToneClock, ToneGenerator};

mod hw;
use hw::{BoardPins, Button, Lamp, TerminalDisplay, TimerTone, Usart};

/// Shared with the SysTick handler.
static TICKS: TickSource = TickSource::new();

/// TIM4 counter prescaler. The toggled output halves the compare rate again.
const TONE_PSC: u16 = 64;

/// Base seed; the engine mixes in how long the player waited before the first press.
const RANDOM_SEED: u64 = 0x5135_0000_C0DE_F00D;

#[exception]
fn SysTick() {
    TICKS.on_interrupt();
}

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let pins = BoardPins::new(dp.GPIOD, dp.GPIOE);

    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };

    // USART2 (DBG)
    let serial = Serial::new(
        dp.USART2,
        (pins.usart2.tx, pins.usart2.rx),
        &clocks,
        usart_cfg,
    );
    let mut log = Usart::new(serial);

    // USART3 (display)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    let display = TerminalDisplay::new(Usart::new(serial));

    let config = GameConfig::new();
    if let Err(err) = config.validate() {
        let _ = write!(log, "simon: bad config: {}\r\n", err);
        log.flush();
        park();
    }

    // 1 ms SysTick
    let sysclk = clocks.sysclk().raw();
    cp.SYST.set_clock_source(SystClkSource::Core);
    cp.SYST.set_reload(sysclk / 1_000 - 1);
    cp.SYST.clear_current();
    cp.SYST.enable_interrupt();
    cp.SYST.enable_counter();
    TICKS.arm(config.tick_period_ms);

    // Tone on TIM4 CH1. APB1 is undivided with the default clock tree, so TIM4 sees sysclk.
    let mut tone = ToneGenerator::new(
        TimerTone::tim4(dp.TIM4, TONE_PSC),
        ToneClock::new(sysclk, 2 * u32::from(TONE_PSC)),
    );
    tone.turn_on();
    // Hold PD12 in AF2 for as long as the tone runs.
    let _buzzer = pins.buzzer.out;

    let buttons = InputSampler::new(
        Button::new(pins.buttons.north),
        Button::new(pins.buttons.east),
        Button::new(pins.buttons.south),
        Button::new(pins.buttons.west),
    );
    let leds = LedBank::active_high(
        Lamp::new(pins.leds.north),
        Lamp::new(pins.leds.east),
        Lamp::new(pins.leds.south),
        Lamp::new(pins.leds.west),
    );
    let random = RngSymbols::<SmallRng>::seed_from_u64(RANDOM_SEED);

    log.write_line("simon: board up");
    let mut engine =
        GameEngine::new(config, &TICKS, buttons, leds, tone, display, random, log).unwrap();
    engine.run();

    park();
}

fn park() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
