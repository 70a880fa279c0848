#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`MultiplexDisplay`**: Owns the output lines and drives one digit per timer tick
//! - **`MultiplexScheduler`**: Owns the tick counter, derives frames and wraps the counter
//! - **`Frame`**: The displayed value, slot, digit, digit-select line and segment pattern for one tick
//! - **`MultiplexConfig`**: The refresh rate knob (`round_per_count`) and tick interval
//! - **`PinLayout`**: Where the segment and digit-select line groups live
//! - **`OutputLines`**: Trait to implement for your GPIO hardware (or use `PinBank`)
//! - **`RepeatingTimer`**: Trait to implement for your periodic timer
//! - **`Digit`** / **`encode`**: Decimal digit to segment pattern lookup
//!
//! All state lives in plain owned values; nothing allocates and nothing in the
//! tick path can fail.

pub mod config;
pub mod display;
pub mod frame;
pub mod lines;
pub mod scheduler;
pub mod segments;
pub mod timer;

pub use config::{
    COUNT_LIMIT, ConfigError, DIGITS_NUM, DIVISORS, MultiplexConfig, MultiplexConfigBuilder,
    PinLayout,
};
pub use display::{MultiplexDisplay, StartupError};
pub use frame::Frame;
pub use lines::{OutputLines, PinBank};
pub use scheduler::MultiplexScheduler;
pub use segments::{DIGIT_PATTERNS, Digit, InvalidDigit, Segment, SegmentPattern, encode};
pub use timer::{RepeatingTimer, TimerControl};
