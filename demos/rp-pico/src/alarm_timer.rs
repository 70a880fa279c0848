//! Hardware alarm wrapper for the seven-seg-mux timer trait.
//!
//! Drives the refresh tick from RP2040 `ALARM0`. Deadlines are kept on an
//! absolute timeline (previous deadline plus interval) so the tick spacing is
//! exact rather than a minimum delay.

use fugit::MicrosDurationU64;
use rp_pico::hal::timer::{Alarm, Alarm0, Instant, ScheduleAlarmError, Timer};
use seven_seg_mux::RepeatingTimer;

/// Repeating tick source backed by a single RP2040 alarm
pub struct AlarmTimer {
    alarm: Alarm0,
    timer: Timer,
    interval: MicrosDurationU64,
    deadline: Instant,
}

impl AlarmTimer {
    /// Wrap an alarm. Nothing fires until `schedule_fixed_delay` is called.
    pub fn new(alarm: Alarm0, timer: Timer) -> Self {
        let deadline = timer.get_counter();
        Self {
            alarm,
            timer,
            interval: MicrosDurationU64::from_ticks(0),
            deadline,
        }
    }

    /// Clear the pending alarm interrupt. Call first thing in `TIMER_IRQ_0`.
    pub fn acknowledge(&mut self) {
        self.alarm.clear_interrupt();
    }

    /// Schedule the next tick one interval after the previous deadline.
    ///
    /// If the handler overran and that deadline already passed, the timeline
    /// restarts one interval from now.
    pub fn rearm(&mut self) {
        self.deadline += self.interval;
        if self.alarm.schedule_at(self.deadline).is_err() {
            self.deadline = self.timer.get_counter() + self.interval;
            let _ = self.alarm.schedule_at(self.deadline);
        }
    }
}

impl RepeatingTimer for AlarmTimer {
    type Error = ScheduleAlarmError;

    fn schedule_fixed_delay(&mut self, interval_us: u32) -> Result<(), Self::Error> {
        self.interval = MicrosDurationU64::micros(interval_us as u64);
        self.deadline = self.timer.get_counter() + self.interval;
        self.alarm.schedule_at(self.deadline)?;
        self.alarm.enable_interrupt();
        Ok(())
    }
}
