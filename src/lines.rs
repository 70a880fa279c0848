//! Output line abstraction for the segment and digit-select wiring.
//!
//! Defines the [`OutputLines`] trait the display drives, and [`PinBank`], an
//! implementation over a fixed array of `embedded-hal` output pins.

use embedded_hal::digital::OutputPin;

/// Trait for abstracting a bank of GPIO output lines addressed by bit masks.
///
/// Bit *n* of every mask refers to line *n*. Implement this for your GPIO
/// peripheral (direct register access, pin arrays, port expanders, etc.).
/// Handle any hardware errors internally - these methods cannot fail.
pub trait OutputLines {
    /// Claims the lines in `mask` as outputs.
    fn configure_outputs(&mut self, mask: u32);

    /// Marks `line` as active-low: a logical 1 drives the line low.
    fn set_output_inversion(&mut self, line: u8);

    /// Deasserts every line in `mask`.
    fn clear_lines(&mut self, mask: u32);

    /// Sets every line in `mask` to the corresponding bit of `values`.
    ///
    /// Lines outside `mask` keep their current level.
    fn write_lines(&mut self, mask: u32, values: u32);
}

impl<T: OutputLines + ?Sized> OutputLines for &mut T {
    fn configure_outputs(&mut self, mask: u32) {
        (**self).configure_outputs(mask)
    }

    fn set_output_inversion(&mut self, line: u8) {
        (**self).set_output_inversion(line)
    }

    fn clear_lines(&mut self, mask: u32) {
        (**self).clear_lines(mask)
    }

    fn write_lines(&mut self, mask: u32, values: u32) {
        (**self).write_lines(mask, values)
    }
}

/// [`OutputLines`] over `N` output pins mapped to consecutive line numbers.
///
/// `pins[i]` is line `first_line + i`. Writes to lines that were never claimed
/// through [`OutputLines::configure_outputs`] are ignored, and inversion is
/// applied in software.
pub struct PinBank<P: OutputPin, const N: usize> {
    pins: [P; N],
    first_line: u8,
    claimed: u32,
    inverted: u32,
}

impl<P: OutputPin, const N: usize> PinBank<P, N> {
    /// Creates a bank whose first pin is line `first_line`.
    ///
    /// Pins that would fall past line 31 are never driven.
    pub fn new(pins: [P; N], first_line: u8) -> Self {
        Self {
            pins,
            first_line,
            claimed: 0,
            inverted: 0,
        }
    }

    /// Release the bank and return the pins.
    pub fn release(self) -> [P; N] {
        self.pins
    }

    /// Returns the pins in line order.
    pub fn pins(&self) -> &[P; N] {
        &self.pins
    }

    /// Lines currently claimed as outputs.
    pub fn claimed(&self) -> u32 {
        self.claimed
    }

    /// Lines currently marked active-low.
    pub fn inverted(&self) -> u32 {
        self.inverted
    }

    /// Mask of the line numbers this bank can drive.
    pub fn line_mask(&self) -> u32 {
        (0..N).fold(0, |mask, i| mask | Self::bit(self.first_line as usize + i))
    }

    fn bit(line: usize) -> u32 {
        if line < 32 { 1 << line } else { 0 }
    }
}

impl<P: OutputPin, const N: usize> OutputLines for PinBank<P, N> {
    fn configure_outputs(&mut self, mask: u32) {
        self.claimed |= mask & self.line_mask();
    }

    fn set_output_inversion(&mut self, line: u8) {
        self.inverted |= Self::bit(line as usize) & self.line_mask();
    }

    fn clear_lines(&mut self, mask: u32) {
        self.write_lines(mask, 0);
    }

    fn write_lines(&mut self, mask: u32, values: u32) {
        let mask = mask & self.claimed;
        for (i, pin) in self.pins.iter_mut().enumerate() {
            let bit = Self::bit(self.first_line as usize + i);
            if mask & bit == 0 {
                continue;
            }

            let high = (values ^ self.inverted) & bit != 0;
            let _ = if high { pin.set_high() } else { pin.set_low() };
        }
    }
}
