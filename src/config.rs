//! Timing and wiring configuration.

/// Number of digit positions refreshed round-robin.
pub const DIGITS_NUM: u32 = 4;

/// Positional divisors used to pick the decimal digit shown at each slot.
pub const DIVISORS: [u32; DIGITS_NUM as usize] = [1, 10, 100, 1000];

/// Displayed values range over `0..COUNT_LIMIT` before the tick counter wraps.
pub const COUNT_LIMIT: u32 = 10_000;

/// Number of consecutive lines in each of the segment and digit-select groups.
pub const LINES_PER_GROUP: u8 = 8;

/// Default number of full refreshes per displayed count.
///
/// At the default 10 us tick this gives one count per millisecond.
pub const DEFAULT_ROUND_PER_COUNT: u32 = 25;

/// Default tick period in microseconds.
pub const DEFAULT_TICK_INTERVAL_US: u32 = 10;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `round_per_count` was zero.
    ZeroRoundPerCount,

    /// `tick_interval_us` was zero.
    ZeroTickInterval,

    /// `DIGITS_NUM * round_per_count * COUNT_LIMIT` does not fit in a `u32`.
    WrapPeriodOverflow,

    /// A line group extends past line 31.
    GroupOutOfRange,

    /// The segment and digit-select groups share lines.
    GroupsOverlap,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroRoundPerCount => write!(f, "round_per_count must be at least 1"),
            ConfigError::ZeroTickInterval => write!(f, "tick interval must be at least 1 us"),
            ConfigError::WrapPeriodOverflow => {
                write!(f, "tick wrap period does not fit in 32 bits")
            }
            ConfigError::GroupOutOfRange => {
                write!(f, "line group must lie within lines 0-31")
            }
            ConfigError::GroupsOverlap => {
                write!(f, "segment and digit-select lines overlap")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Multiplexing rate configuration.
///
/// One full refresh of all digit positions takes [`DIGITS_NUM`] ticks.
/// `round_per_count` full refreshes make up one step of the displayed value, so
/// the value advances every `round_per_count * DIGITS_NUM * tick_interval_us`
/// microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MultiplexConfig {
    round_per_count: u32,
    tick_interval_us: u32,
    wrap_period: u32,
}

impl MultiplexConfig {
    /// One count per millisecond at a 10 us tick.
    pub const MILLISECONDS: MultiplexConfig = MultiplexConfig {
        round_per_count: DEFAULT_ROUND_PER_COUNT,
        tick_interval_us: DEFAULT_TICK_INTERVAL_US,
        wrap_period: DIGITS_NUM * DEFAULT_ROUND_PER_COUNT * COUNT_LIMIT,
    };

    /// One count per second at a 10 us tick.
    pub const SECONDS: MultiplexConfig = MultiplexConfig {
        round_per_count: 25_000,
        tick_interval_us: DEFAULT_TICK_INTERVAL_US,
        wrap_period: DIGITS_NUM * 25_000 * COUNT_LIMIT,
    };

    /// Creates a validated configuration.
    pub fn new(round_per_count: u32, tick_interval_us: u32) -> Result<Self, ConfigError> {
        if round_per_count == 0 {
            return Err(ConfigError::ZeroRoundPerCount);
        }
        if tick_interval_us == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        let wrap_period = DIGITS_NUM
            .checked_mul(round_per_count)
            .and_then(|ticks| ticks.checked_mul(COUNT_LIMIT))
            .ok_or(ConfigError::WrapPeriodOverflow)?;

        Ok(Self {
            round_per_count,
            tick_interval_us,
            wrap_period,
        })
    }

    /// Creates a configuration builder starting from the defaults.
    pub fn builder() -> MultiplexConfigBuilder {
        MultiplexConfigBuilder::new()
    }

    /// Full refreshes per displayed count.
    #[inline]
    pub fn round_per_count(&self) -> u32 {
        self.round_per_count
    }

    /// Tick period in microseconds.
    #[inline]
    pub fn tick_interval_us(&self) -> u32 {
        self.tick_interval_us
    }

    /// Ticks per displayed count.
    #[inline]
    pub fn ticks_per_count(&self) -> u32 {
        self.round_per_count * DIGITS_NUM
    }

    /// The tick counter wraps to zero on reaching this value.
    #[inline]
    pub fn wrap_period(&self) -> u32 {
        self.wrap_period
    }

    /// Microseconds between increments of the displayed value.
    pub fn count_period_us(&self) -> u64 {
        self.ticks_per_count() as u64 * self.tick_interval_us as u64
    }
}

impl Default for MultiplexConfig {
    fn default() -> Self {
        Self::MILLISECONDS
    }
}

/// Builder for [`MultiplexConfig`].
#[derive(Debug, Clone, Copy)]
pub struct MultiplexConfigBuilder {
    round_per_count: u32,
    tick_interval_us: u32,
}

impl MultiplexConfigBuilder {
    /// Creates a builder with the default rate.
    pub fn new() -> Self {
        Self {
            round_per_count: DEFAULT_ROUND_PER_COUNT,
            tick_interval_us: DEFAULT_TICK_INTERVAL_US,
        }
    }

    /// Sets the number of full refreshes per displayed count.
    pub fn round_per_count(mut self, rounds: u32) -> Self {
        self.round_per_count = rounds;
        self
    }

    /// Sets the tick period in microseconds.
    pub fn tick_interval_us(mut self, micros: u32) -> Self {
        self.tick_interval_us = micros;
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<MultiplexConfig, ConfigError> {
        MultiplexConfig::new(self.round_per_count, self.tick_interval_us)
    }
}

impl Default for MultiplexConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Placement of the segment and digit-select line groups.
///
/// Each group is [`LINES_PER_GROUP`] consecutive lines. Segment line *i* drives
/// segment bit *i* (bit 7 is the decimal point). Digit-select line *i* enables
/// physical digit *i*; lines 0-3 form the lower bank and 4-7 the upper bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinLayout {
    first_segment_line: u8,
    first_digit_line: u8,
}

impl PinLayout {
    /// Segments on lines 2-9, digit selects on lines 10-17.
    pub const PICO_DEFAULT: PinLayout = PinLayout {
        first_segment_line: 2,
        first_digit_line: 10,
    };

    /// Creates a validated layout.
    pub fn new(first_segment_line: u8, first_digit_line: u8) -> Result<Self, ConfigError> {
        let last_line = 32 - LINES_PER_GROUP;
        if first_segment_line > last_line || first_digit_line > last_line {
            return Err(ConfigError::GroupOutOfRange);
        }

        let layout = Self {
            first_segment_line,
            first_digit_line,
        };
        if layout.segment_mask() & layout.digit_mask() != 0 {
            return Err(ConfigError::GroupsOverlap);
        }

        Ok(layout)
    }

    /// First segment line (segment A).
    pub fn first_segment_line(&self) -> u8 {
        self.first_segment_line
    }

    /// First digit-select line.
    pub fn first_digit_line(&self) -> u8 {
        self.first_digit_line
    }

    /// Mask covering all segment lines.
    #[inline]
    pub fn segment_mask(&self) -> u32 {
        0xff << self.first_segment_line
    }

    /// Mask covering all digit-select lines.
    #[inline]
    pub fn digit_mask(&self) -> u32 {
        0xff << self.first_digit_line
    }

    /// Mask covering every line the display uses.
    #[inline]
    pub fn output_mask(&self) -> u32 {
        self.segment_mask() | self.digit_mask()
    }

    /// Line number of segment line `index` (`0..LINES_PER_GROUP`).
    #[inline]
    pub fn segment_line(&self, index: u8) -> u8 {
        self.first_segment_line + index
    }

    /// Line values that put `bits` on the segment lines.
    #[inline]
    pub fn segment_value(&self, bits: u8) -> u32 {
        (bits as u32) << self.first_segment_line
    }

    /// Line values that assert only digit-select line `pin_index`.
    #[inline]
    pub fn digit_value(&self, pin_index: u8) -> u32 {
        (1u32 << pin_index) << self.first_digit_line
    }
}

impl Default for PinLayout {
    fn default() -> Self {
        Self::PICO_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_validated_construction() {
        assert_eq!(MultiplexConfig::new(25, 10), Ok(MultiplexConfig::MILLISECONDS));
        assert_eq!(MultiplexConfig::new(25_000, 10), Ok(MultiplexConfig::SECONDS));
    }

    #[test]
    fn builder_uses_defaults() {
        let config = MultiplexConfig::builder().build().unwrap();
        assert_eq!(config.round_per_count(), DEFAULT_ROUND_PER_COUNT);
        assert_eq!(config.tick_interval_us(), DEFAULT_TICK_INTERVAL_US);
    }

    #[test]
    fn rejects_zero_rates() {
        assert_eq!(MultiplexConfig::new(0, 10), Err(ConfigError::ZeroRoundPerCount));
        assert_eq!(MultiplexConfig::new(25, 0), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn rejects_wrap_period_overflow() {
        // 4 * 107_374 * 10_000 still fits, one more round does not
        assert!(MultiplexConfig::new(107_374, 10).is_ok());
        assert_eq!(
            MultiplexConfig::new(107_375, 10),
            Err(ConfigError::WrapPeriodOverflow)
        );
    }

    #[test]
    fn pico_layout_masks() {
        let layout = PinLayout::default();
        assert_eq!(layout.segment_mask(), 0x0000_03fc);
        assert_eq!(layout.digit_mask(), 0x0003_fc00);
        assert_eq!(layout.output_mask(), 0x0003_fffc);
        assert_eq!(layout.digit_value(4), 1 << 14);
        assert_eq!(layout.segment_value(0x3f), 0x3f << 2);
    }

    #[test]
    fn layout_validation() {
        assert_eq!(PinLayout::new(0, 24).map(|l| l.digit_mask()), Ok(0xff00_0000));
        assert_eq!(PinLayout::new(25, 0), Err(ConfigError::GroupOutOfRange));
        assert_eq!(PinLayout::new(2, 9), Err(ConfigError::GroupsOverlap));
    }
}
