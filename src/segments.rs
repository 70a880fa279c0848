//! Decimal digit to seven-segment pattern encoding.
//!
//! Segment layout and bit assignment:
//!
//! ```text
//!   --A--        A = bit 0
//!   F   B        B = bit 1
//!   --G--        ...
//!   E   C        G = bit 6
//!   --D--
//! ```

/// Segment patterns for the digits 0-9, indexed by digit.
pub const DIGIT_PATTERNS: [u8; 10] = [
    0x3f, // 0
    0x06, // 1
    0x5b, // 2
    0x4f, // 3
    0x66, // 4
    0x6d, // 5
    0x7d, // 6
    0x07, // 7
    0x7f, // 8
    0x6f, // 9
];

/// A single decimal digit, guaranteed to be in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, returning `None` if `value > 9`.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    /// Creates the digit `n % 10`. Total over all inputs.
    #[inline]
    pub const fn of_remainder(n: u32) -> Self {
        Self((n % 10) as u8)
    }

    /// Returns the digit as an integer.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Error returned when converting an integer above 9 into a [`Digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidDigit(pub u8);

impl core::fmt::Display for InvalidDigit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} is not a decimal digit", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidDigit {}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(InvalidDigit(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// One of the seven display segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    /// Top horizontal.
    A,
    /// Top right vertical.
    B,
    /// Bottom right vertical.
    C,
    /// Bottom horizontal.
    D,
    /// Bottom left vertical.
    E,
    /// Top left vertical.
    F,
    /// Middle horizontal.
    G,
}

impl Segment {
    /// All segments in bit order.
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    /// Bit mask of this segment within a [`SegmentPattern`].
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A 7-bit segment illumination pattern. Bit *i* set means segment *i* is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// All segments off.
    pub const BLANK: SegmentPattern = SegmentPattern(0);

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if `segment` is lit.
    #[inline]
    pub const fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    /// Number of lit segments.
    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Encodes a decimal digit into its segment pattern.
#[inline]
pub const fn encode(digit: Digit) -> SegmentPattern {
    SegmentPattern(DIGIT_PATTERNS[digit.0 as usize])
}
