//! Integration tests for the segment encoder

use seven_seg_mux::{Digit, InvalidDigit, Segment, SegmentPattern, encode};

fn pattern(digit: u8) -> SegmentPattern {
    encode(Digit::new(digit).unwrap())
}

#[test]
fn encodes_documented_table() {
    let expected: [u8; 10] = [0x3f, 0x06, 0x5b, 0x4f, 0x66, 0x6d, 0x7d, 0x07, 0x7f, 0x6f];
    for (digit, bits) in expected.iter().enumerate() {
        assert_eq!(pattern(digit as u8).bits(), *bits, "digit {}", digit);
    }
}

#[test]
fn rejects_every_value_above_nine() {
    for value in 10..=u8::MAX {
        assert_eq!(Digit::new(value), None);
        assert_eq!(Digit::try_from(value), Err(InvalidDigit(value)));
    }
}

#[test]
fn remainder_construction_is_always_encodable() {
    for n in [0u32, 9, 10, 99, 12_345, u32::MAX] {
        let digit = Digit::of_remainder(n);
        assert_eq!(digit.value() as u32, n % 10);
        assert_ne!(encode(digit), SegmentPattern::BLANK);
    }
}

#[test]
fn every_digit_pattern_is_distinct() {
    for a in 0..10 {
        for b in (a + 1)..10 {
            assert_ne!(pattern(a), pattern(b));
        }
    }
}

#[test]
fn zero_leaves_middle_segment_dark() {
    let zero = pattern(0);
    assert!(!zero.is_lit(Segment::G));
    assert_eq!(zero.lit_count(), 6);
}

#[test]
fn seven_lights_top_and_right() {
    let seven = pattern(7);
    assert!(seven.is_lit(Segment::A));
    assert!(seven.is_lit(Segment::B));
    assert!(seven.is_lit(Segment::C));
    assert!(!seven.is_lit(Segment::D));
}
