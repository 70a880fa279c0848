//! Multiplexed display driver.
//!
//! Provides [`MultiplexDisplay`] which owns the output lines and the
//! [`MultiplexScheduler`], performs one-time line setup, registers the refresh
//! timer, and drives exactly one digit per tick.

use crate::config::{LINES_PER_GROUP, MultiplexConfig, PinLayout};
use crate::frame::Frame;
use crate::lines::OutputLines;
use crate::scheduler::MultiplexScheduler;
use crate::timer::{RepeatingTimer, TimerControl};

/// Errors that can occur while bringing the display up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError<E> {
    /// The refresh timer could not be registered. Nothing will ever be driven.
    TimerRegistration(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for StartupError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StartupError::TimerRegistration(e) => {
                write!(f, "failed to add refresh timer: {:?}", e)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for StartupError<E> {}

/// Drives a multiplexed seven-segment display from a periodic tick.
///
/// # Type Parameters
/// * `L` - Output line implementation type
pub struct MultiplexDisplay<L: OutputLines> {
    lines: L,
    layout: PinLayout,
    scheduler: MultiplexScheduler,
}

impl<L: OutputLines> MultiplexDisplay<L> {
    /// Claims the display lines and marks the segment lines active-low.
    ///
    /// The segments of the supported displays light when driven low, so all
    /// [`LINES_PER_GROUP`] segment lines (including the decimal point) are
    /// inverted.
    pub fn new(mut lines: L, layout: PinLayout, config: MultiplexConfig) -> Self {
        lines.configure_outputs(layout.output_mask());
        for i in 0..LINES_PER_GROUP {
            lines.set_output_inversion(layout.segment_line(i));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "display lines claimed: mask={=u32:#x}, segments inverted from line {=u8}",
            layout.output_mask(),
            layout.first_segment_line()
        );

        Self {
            lines,
            layout,
            scheduler: MultiplexScheduler::new(config),
        }
    }

    /// Registers the refresh timer at the configured tick interval.
    ///
    /// Failure is fatal: without its refresh clock the display is never driven.
    pub fn start<T: RepeatingTimer>(
        &mut self,
        timer: &mut T,
    ) -> Result<(), StartupError<T::Error>> {
        let interval_us = self.scheduler.config().tick_interval_us();
        timer
            .schedule_fixed_delay(interval_us)
            .map_err(StartupError::TimerRegistration)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "refresh timer running: tick={=u32}us, count period={=u64}us",
            interval_us,
            self.scheduler.config().count_period_us()
        );

        Ok(())
    }

    /// Timer callback: drives the current frame, then advances the counter.
    ///
    /// Always returns [`TimerControl::Continue`]; the display runs until power-off.
    pub fn on_tick(&mut self) -> TimerControl {
        let frame = self.scheduler.step();
        self.drive(&frame);
        TimerControl::Continue
    }

    /// Drives the current frame without advancing the counter.
    pub fn render(&mut self) -> Frame {
        let frame = self.scheduler.frame();
        self.drive(&frame);
        frame
    }

    fn drive(&mut self, frame: &Frame) {
        let digit_mask = self.layout.digit_mask();

        self.lines.clear_lines(digit_mask);
        self.lines.write_lines(
            self.layout.segment_mask(),
            self.layout.segment_value(frame.pattern.bits()),
        );
        self.lines
            .write_lines(digit_mask, self.layout.digit_value(frame.pin_index));
    }

    /// Returns the scheduler.
    pub fn scheduler(&self) -> &MultiplexScheduler {
        &self.scheduler
    }

    /// Returns the line layout.
    pub fn layout(&self) -> &PinLayout {
        &self.layout
    }

    /// Returns a reference to the output lines.
    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// Release the display and return the output lines.
    pub fn release(self) -> L {
        self.lines
    }
}
