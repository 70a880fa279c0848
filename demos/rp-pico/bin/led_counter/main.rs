#![no_std]
#![no_main]

use core::cell::RefCell;

use critical_section::Mutex;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::pac::interrupt;
use rp_pico::hal::{Sio, clocks::init_clocks_and_plls, pac, timer::Timer, watchdog::Watchdog};
use rtt_target::{rprintln, rtt_init_print};

use rp_pico_demos::{AlarmTimer, DisplayLines, display_lines};
use seven_seg_mux::{MultiplexConfig, MultiplexDisplay, PinLayout, TimerControl};

type Display = MultiplexDisplay<DisplayLines>;

/// Display driven from the timer interrupt
static DISPLAY: Mutex<RefCell<Option<Display>>> = Mutex::new(RefCell::new(None));

/// Alarm re-armed after every tick
static TICK_TIMER: Mutex<RefCell<Option<AlarmTimer>>> = Mutex::new(RefCell::new(None));

/// ALARM0 interrupt - lights exactly one digit per call
#[interrupt]
fn TIMER_IRQ_0() {
    critical_section::with(|cs| {
        let control = DISPLAY
            .borrow_ref_mut(cs)
            .as_mut()
            .map(|display| display.on_tick());

        if let Some(timer) = TICK_TIMER.borrow_ref_mut(cs).as_mut() {
            timer.acknowledge();
            if let Some(TimerControl::Continue) = control {
                timer.rearm();
            }
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("Starting multiplexed LED counter...");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Segments on GPIO 2-9 (active-low), digit selects on GPIO 10-17
    let config = MultiplexConfig::MILLISECONDS;
    let mut display = MultiplexDisplay::new(display_lines(pins), PinLayout::PICO_DEFAULT, config);
    rprintln!(
        "Tick every {} us, count every {} us",
        config.tick_interval_us(),
        config.count_period_us()
    );

    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let Some(alarm) = timer.alarm_0() else {
        rprintln!("Failed to add timer: ALARM0 already taken");
        halt();
    };
    let mut tick_timer = AlarmTimer::new(alarm, timer);

    if let Err(e) = display.start(&mut tick_timer) {
        rprintln!("{}", e);
        halt();
    }

    critical_section::with(|cs| {
        DISPLAY.borrow(cs).replace(Some(display));
        TICK_TIMER.borrow(cs).replace(Some(tick_timer));
    });

    // SAFETY: both statics are populated before the handler can run
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
    }

    rprintln!("Display running");

    loop {
        cortex_m::asm::wfi();
    }
}

/// Park the core without ever driving the display
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
