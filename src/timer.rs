//! Periodic timer abstraction.

/// What the timer should do after a tick callback returns.
///
/// The display refreshes until power-off, so the only signal is to keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerControl {
    /// Keep invoking the callback at the registered interval.
    Continue,
}

/// Trait for abstracting a repeating hardware timer.
///
/// Implementations arrange for the tick callback (typically
/// [`MultiplexDisplay::on_tick`](crate::MultiplexDisplay::on_tick), called from
/// the timer interrupt) to run every `interval_us` microseconds with exact
/// spacing: each deadline is the previous deadline plus the interval, not the
/// callback's return time plus the interval.
pub trait RepeatingTimer {
    /// Error reported when the timer cannot be registered.
    type Error;

    /// Registers the repeating tick at a fixed interval.
    fn schedule_fixed_delay(&mut self, interval_us: u32) -> Result<(), Self::Error>;
}

impl<T: RepeatingTimer + ?Sized> RepeatingTimer for &mut T {
    type Error = T::Error;

    fn schedule_fixed_delay(&mut self, interval_us: u32) -> Result<(), Self::Error> {
        (**self).schedule_fixed_delay(interval_us)
    }
}
