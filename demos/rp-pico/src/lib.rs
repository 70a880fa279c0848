#![no_std]

pub mod alarm_timer;
pub mod display_lines;

pub use alarm_timer::AlarmTimer;
pub use display_lines::{DisplayLines, FIRST_DISPLAY_LINE, OutputLine, display_lines};
