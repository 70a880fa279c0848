//! Per-tick derived display state.

use crate::config::{DIGITS_NUM, DIVISORS, MultiplexConfig};
use crate::segments::{Digit, SegmentPattern, encode};

/// Everything the display needs to drive for one tick.
///
/// A `Frame` is a pure function of the tick counter and the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Tick counter the frame was derived from.
    pub tick: u32,

    /// The counter value shown across all digit positions.
    pub value: u32,

    /// Digit position refreshed this tick (`0..DIGITS_NUM`).
    pub slot: u8,

    /// Decimal digit at `slot`.
    pub digit: Digit,

    /// Digit-select line to assert (`0..2 * DIGITS_NUM`).
    ///
    /// Even values light the lower bank of digit selects, odd values the upper
    /// bank, so two physical 4-digit banks share one set of multiplex lines.
    pub pin_index: u8,

    /// Segment pattern for `digit`.
    pub pattern: SegmentPattern,
}

impl Frame {
    /// Derives the frame for `tick`.
    pub fn at(tick: u32, config: &MultiplexConfig) -> Self {
        let value = tick / config.round_per_count() / DIGITS_NUM;
        let slot = tick % DIGITS_NUM;
        let digit = Digit::of_remainder(value / DIVISORS[slot as usize]);
        let pin_index = slot + DIGITS_NUM * (value % 2);

        debug_assert!(pin_index < 2 * DIGITS_NUM);

        Self {
            tick,
            value,
            slot: slot as u8,
            digit,
            pin_index: pin_index as u8,
            pattern: encode(digit),
        }
    }

    /// Returns true if the frame lights the upper digit bank.
    #[inline]
    pub fn upper_bank(&self) -> bool {
        self.pin_index >= DIGITS_NUM as u8
    }
}
