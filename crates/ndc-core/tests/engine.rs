//! Integration tests for the full normalize -> classify -> convert path.

use proptest::prelude::*;

use ndc_core::{classify, convert, convert_detected, normalize};
use ndc_model::{Confidence, Direction, NdcError, SegmentVariant};

#[test]
fn normalized_input_flows_through_conversion() {
    let code = normalize("5486-8123-45").expect("valid 10-digit input");
    let result = convert_detected(&code, Direction::TenToEleven).expect("5-3-2 heuristic");
    assert_eq!(result.output.as_str(), "54868012345");
    assert_eq!(result.variant, SegmentVariant::FiveThreeTwo);
    assert_eq!(result.confidence, Confidence::Heuristic);
}

#[test]
fn eleven_digit_origin_is_structurally_determined() {
    let code = normalize("00091234567").expect("valid 11-digit input");
    let result = convert_detected(&code, Direction::ElevenToTen).expect("4-4-2 origin");
    assert_eq!(result.output.as_str(), "0091234567");
    assert_eq!(result.confidence, Confidence::Certain);
}

#[test]
fn malformed_inputs_fail_in_the_guard() {
    assert!(matches!(
        normalize("12A4-5678-90"),
        Err(NdcError::InvalidCharacter {
            character: 'A',
            position: 2
        })
    ));
    assert!(matches!(
        normalize("123-456-789"),
        Err(NdcError::InvalidLength(9))
    ));
}

#[test]
fn ambiguous_eleven_digit_code_is_reported_not_guessed() {
    let code = normalize("12345678911").expect("valid digits");
    let classification = classify(&code);
    assert_eq!(classification.variant, SegmentVariant::Unknown);
    assert_eq!(classification.confidence, Confidence::Ambiguous);
    assert!(convert_detected(&code, Direction::ElevenToTen).is_err());
}

#[test]
fn forced_variant_overrides_an_ambiguous_ten_digit_code() {
    let code = normalize("1234567890").expect("valid digits");
    assert_eq!(classify(&code).confidence, Confidence::Ambiguous);
    let result = convert(&code, SegmentVariant::FourFourTwo, Direction::TenToEleven)
        .expect("forced layout");
    assert_eq!(result.output.as_str(), "01234567890");
}

proptest! {
    // Round-trip law: padding under a known layout then stripping under the
    // same layout recovers the original code exactly.
    #[test]
    fn known_variant_round_trips(digits in "[0-9]{10}", which in 0usize..3) {
        let variant = SegmentVariant::ten_digit_variants()[which];
        let code = normalize(&digits).expect("10 digits");
        let padded = convert(&code, variant, Direction::TenToEleven).expect("pad");
        prop_assert_eq!(padded.output.digit_count(), 11);
        let stripped = convert(&padded.output, variant, Direction::ElevenToTen).expect("strip");
        prop_assert_eq!(stripped.output, code);
    }

    // Totality: the classifier never panics and always pairs a variant with
    // a confidence, for both valid lengths.
    #[test]
    fn classifier_is_total(digits in "[0-9]{10,11}") {
        let code = normalize(&digits).expect("valid digits");
        let classification = classify(&code);
        match classification.variant {
            SegmentVariant::Unknown => {
                prop_assert_eq!(classification.confidence, Confidence::Ambiguous);
            }
            _ => {
                prop_assert!(classification.confidence <= Confidence::Heuristic);
            }
        }
    }

    // Idempotence: re-normalizing a normalized code changes nothing.
    #[test]
    fn normalization_is_idempotent(raw in "[0-9- .]{10,16}") {
        if let Ok(code) = normalize(&raw) {
            let again = normalize(code.as_str()).expect("already normalized");
            prop_assert_eq!(again, code);
        }
    }
}
