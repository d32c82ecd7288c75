//! Integration tests for the NDC data model.

use std::str::FromStr;

use ndc_model::{Confidence, Direction, NdcCode, NdcError, SegmentVariant};

#[test]
fn variant_display_round_trips() {
    for variant in [
        SegmentVariant::FourFourTwo,
        SegmentVariant::FiveThreeTwo,
        SegmentVariant::FiveFourOne,
        SegmentVariant::FiveFourTwo,
        SegmentVariant::Unknown,
    ] {
        let parsed = SegmentVariant::from_str(variant.as_str()).expect("parse own notation");
        assert_eq!(parsed, variant);
    }
    assert!(SegmentVariant::from_str("6-3-2").is_err());
}

#[test]
fn hyphenate_matches_layout() {
    assert_eq!(
        SegmentVariant::FiveFourTwo.hyphenate("54868012345"),
        Some("54868-0123-45".to_string())
    );
    assert_eq!(
        SegmentVariant::FourFourTwo.hyphenate("0091234567"),
        Some("0091-2345-67".to_string())
    );
    // Wrong digit count for the layout
    assert_eq!(SegmentVariant::FourFourTwo.hyphenate("54868012345"), None);
    assert_eq!(SegmentVariant::Unknown.hyphenate("5486812345"), None);
}

#[test]
fn direction_properties() {
    assert_eq!(Direction::TenToEleven.source_digits(), 10);
    assert_eq!(Direction::TenToEleven.target_digits(), 11);
    assert_eq!(Direction::TenToEleven.column_suffix(), "_11digit");
    assert_eq!(Direction::ElevenToTen.source_digits(), 11);
    assert_eq!(Direction::ElevenToTen.target_digits(), 10);
    assert_eq!(Direction::ElevenToTen.column_suffix(), "_10digit");

    assert_eq!(Direction::from_str("10to11"), Ok(Direction::TenToEleven));
    assert_eq!(Direction::from_str("11TO10"), Ok(Direction::ElevenToTen));
    assert!(Direction::from_str("sideways").is_err());
}

#[test]
fn code_accepts_both_lengths() {
    let ten = NdcCode::new("5486812345").expect("10 digits");
    assert_eq!(ten.digit_count(), 10);
    assert_eq!(ten.digit(0), Some('5'));
    assert_eq!(ten.digit(10), None);

    let eleven = NdcCode::new("54868012345").expect("11 digits");
    assert_eq!(eleven.digit_count(), 11);
    assert_eq!(eleven.to_string(), "54868012345");
}

#[test]
fn code_reports_first_bad_character() {
    let error = NdcCode::new("1-234567890").expect_err("separator not allowed here");
    assert_eq!(
        error,
        NdcError::InvalidCharacter {
            character: '-',
            position: 1
        }
    );
}

#[test]
fn confidence_orders_by_certainty() {
    assert!(Confidence::Certain < Confidence::Heuristic);
    assert!(Confidence::Heuristic < Confidence::Ambiguous);
}

#[test]
fn code_serde_round_trip() {
    let code = NdcCode::new("0091234567").expect("valid code");
    let json = serde_json::to_string(&code).expect("serialize");
    assert_eq!(json, "\"0091234567\"");
    let back: NdcCode = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, code);

    let bad: Result<NdcCode, _> = serde_json::from_str("\"123\"");
    assert!(bad.is_err());
}
