//! Shared test infrastructure for seven-seg-mux integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin};
use seven_seg_mux::{MultiplexDisplay, OutputLines, RepeatingTimer, TimerControl};

// ============================================================================
// Mock Output Lines
// ============================================================================

/// One request made to the output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOp {
    Configure(u32),
    Invert(u8),
    Clear(u32),
    Write { mask: u32, values: u32 },
}

/// Mock GPIO bank that tracks logical line state and records every request
pub struct MockLines {
    configured: u32,
    inverted: u32,
    state: u32,
    history: heapless::Vec<LineOp, 64>,
}

impl MockLines {
    pub fn new() -> Self {
        Self {
            configured: 0,
            inverted: 0,
            state: 0,
            history: heapless::Vec::new(),
        }
    }

    /// Logical level of every line (1 = asserted)
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Electrical level of every configured line after inversion (1 = high)
    pub fn levels(&self) -> u32 {
        (self.state ^ self.inverted) & self.configured
    }

    pub fn configured(&self) -> u32 {
        self.configured
    }

    pub fn inverted(&self) -> u32 {
        self.inverted
    }

    pub fn history(&self) -> &[LineOp] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn record(&mut self, op: LineOp) {
        // Oldest entries are dropped once the history is full
        if self.history.is_full() {
            self.history.remove(0);
        }
        let _ = self.history.push(op);
    }
}

impl OutputLines for MockLines {
    fn configure_outputs(&mut self, mask: u32) {
        self.configured |= mask;
        self.record(LineOp::Configure(mask));
    }

    fn set_output_inversion(&mut self, line: u8) {
        self.inverted |= 1 << line;
        self.record(LineOp::Invert(line));
    }

    fn clear_lines(&mut self, mask: u32) {
        self.state &= !mask;
        self.record(LineOp::Clear(mask));
    }

    fn write_lines(&mut self, mask: u32, values: u32) {
        self.state = (self.state & !mask) | (values & mask);
        self.record(LineOp::Write { mask, values });
    }
}

// ============================================================================
// Mock Output Pin
// ============================================================================

/// Mock embedded-hal output pin that remembers its last driven level
#[derive(Debug, Default)]
pub struct MockPin {
    high: Option<bool>,
}

impl MockPin {
    /// `None` until the pin is first driven
    pub fn is_high(&self) -> Option<bool> {
        self.high
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = Some(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = Some(true);
        Ok(())
    }
}

// ============================================================================
// Mock Timer
// ============================================================================

/// Registration failure reported by the mock timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoAlarmAvailable;

/// Mock repeating timer that records the registered interval
pub struct MockTimer {
    interval_us: Option<u32>,
    fail: bool,
}

impl MockTimer {
    pub fn new() -> Self {
        Self {
            interval_us: None,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            interval_us: None,
            fail: true,
        }
    }

    pub fn interval_us(&self) -> Option<u32> {
        self.interval_us
    }
}

impl RepeatingTimer for MockTimer {
    type Error = NoAlarmAvailable;

    fn schedule_fixed_delay(&mut self, interval_us: u32) -> Result<(), Self::Error> {
        if self.fail {
            return Err(NoAlarmAvailable);
        }
        self.interval_us = Some(interval_us);
        Ok(())
    }
}

// ============================================================================
// Virtual Clock
// ============================================================================

/// Deterministic stand-in for the hardware timer interrupt.
///
/// Fires the display's tick callback at exact multiples of the registered
/// interval on a virtual microsecond timeline.
pub struct VirtualClock {
    now_us: u64,
    interval_us: u64,
    fired: u64,
}

impl VirtualClock {
    pub fn new(interval_us: u32) -> Self {
        Self {
            now_us: 0,
            interval_us: interval_us as u64,
            fired: 0,
        }
    }

    pub fn now_us(&self) -> u64 {
        self.now_us
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Advance virtual time, firing every tick whose deadline has passed
    pub fn advance<L: OutputLines>(&mut self, display: &mut MultiplexDisplay<L>, micros: u64) {
        let target = self.now_us + micros;
        while (self.fired + 1) * self.interval_us <= target {
            self.fired += 1;
            self.now_us = self.fired * self.interval_us;
            assert_eq!(display.on_tick(), TimerControl::Continue);
        }
        self.now_us = target;
    }

    /// Fire exactly `ticks` callbacks
    pub fn run_ticks<L: OutputLines>(&mut self, display: &mut MultiplexDisplay<L>, ticks: u64) {
        let micros = (self.fired + ticks) * self.interval_us - self.now_us;
        self.advance(display, micros);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Number of asserted lines within `mask`
pub fn asserted_count(state: u32, mask: u32) -> u32 {
    (state & mask).count_ones()
}
