//! Pico GPIO wiring for the multiplexed display.
//!
//! Segments A-G and DP on GPIO 2-9, digit selects on GPIO 10-17. Connect each
//! segment through its own resistor.

use rp_pico::hal::gpio::{DynPinId, FunctionSioOutput, Pin, PullDown};
use seven_seg_mux::PinBank;

/// A push-pull output with its pin number erased
pub type OutputLine = Pin<DynPinId, FunctionSioOutput, PullDown>;

/// GPIO 2-17 as one bank of display lines
pub type DisplayLines = PinBank<OutputLine, 16>;

/// GPIO number of the first display line
pub const FIRST_DISPLAY_LINE: u8 = 2;

/// Take GPIO 2-17 as push-pull outputs addressed by GPIO number
pub fn display_lines(pins: rp_pico::Pins) -> DisplayLines {
    let lines: [OutputLine; 16] = [
        pins.gpio2.into_push_pull_output().into_dyn_pin(),
        pins.gpio3.into_push_pull_output().into_dyn_pin(),
        pins.gpio4.into_push_pull_output().into_dyn_pin(),
        pins.gpio5.into_push_pull_output().into_dyn_pin(),
        pins.gpio6.into_push_pull_output().into_dyn_pin(),
        pins.gpio7.into_push_pull_output().into_dyn_pin(),
        pins.gpio8.into_push_pull_output().into_dyn_pin(),
        pins.gpio9.into_push_pull_output().into_dyn_pin(),
        pins.gpio10.into_push_pull_output().into_dyn_pin(),
        pins.gpio11.into_push_pull_output().into_dyn_pin(),
        pins.gpio12.into_push_pull_output().into_dyn_pin(),
        pins.gpio13.into_push_pull_output().into_dyn_pin(),
        pins.gpio14.into_push_pull_output().into_dyn_pin(),
        pins.gpio15.into_push_pull_output().into_dyn_pin(),
        pins.gpio16.into_push_pull_output().into_dyn_pin(),
        pins.gpio17.into_push_pull_output().into_dyn_pin(),
    ];

    PinBank::new(lines, FIRST_DISPLAY_LINE)
}
