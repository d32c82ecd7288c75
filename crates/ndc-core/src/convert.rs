//! Paired transforms between the 10- and 11-digit representations.
//!
//! Both directions move exactly one zero at the layout-specific boundary:
//! before the labeler for 4-4-2, at the start of the product code for 5-3-2,
//! at the start of the package code for 5-4-1. Insertion and removal are
//! exact inverses, so a known-layout conversion round-trips losslessly.

use ndc_model::{Confidence, ConversionResult, Direction, NdcCode, NdcError, SegmentVariant};

use crate::classify::classify;

/// Convert a code whose layout the caller already knows (or forces).
///
/// The result is tagged `Certain` since the variant was asserted by the
/// caller rather than inferred.
pub fn convert(
    code: &NdcCode,
    variant: SegmentVariant,
    direction: Direction,
) -> Result<ConversionResult, NdcError> {
    let output = apply(code, variant, direction)?;
    Ok(ConversionResult {
        output,
        variant,
        confidence: Confidence::Certain,
    })
}

/// Classify a code, then convert it, propagating the classifier's
/// confidence into the result.
///
/// Fails with [`NdcError::Unconvertible`] when the classifier reports
/// `Unknown`; the caller may retry with [`convert`] and a forced variant.
pub fn convert_detected(code: &NdcCode, direction: Direction) -> Result<ConversionResult, NdcError> {
    let classification = classify(code);
    if classification.variant == SegmentVariant::Unknown {
        return Err(NdcError::Unconvertible(format!(
            "layout of {code} could not be determined"
        )));
    }
    let output = apply(code, classification.variant, direction)?;
    Ok(ConversionResult {
        output,
        variant: classification.variant,
        confidence: classification.confidence,
    })
}

/// Index of the padding zero each 10-digit layout gains in 11-digit form.
fn padding_index(variant: SegmentVariant) -> Option<usize> {
    match variant {
        SegmentVariant::FourFourTwo => Some(0),
        SegmentVariant::FiveThreeTwo => Some(5),
        SegmentVariant::FiveFourOne => Some(9),
        SegmentVariant::FiveFourTwo | SegmentVariant::Unknown => None,
    }
}

fn apply(
    code: &NdcCode,
    variant: SegmentVariant,
    direction: Direction,
) -> Result<NdcCode, NdcError> {
    if code.digit_count() != direction.source_digits() {
        return Err(NdcError::InvalidLength(code.digit_count()));
    }
    let index = padding_index(variant).ok_or_else(|| {
        NdcError::Unconvertible(format!("no transform defined for layout {variant}"))
    })?;
    let digits = code.as_str();
    match direction {
        Direction::TenToEleven => {
            let mut padded = String::with_capacity(11);
            padded.push_str(&digits[..index]);
            padded.push('0');
            padded.push_str(&digits[index..]);
            NdcCode::new(padded)
        }
        Direction::ElevenToTen => {
            // Removing anything but the padding zero would drop a
            // significant digit; refuse rather than lose information.
            if code.digit(index) != Some('0') {
                return Err(NdcError::Unconvertible(format!(
                    "digit {} of {code} is not the padding zero a {variant} origin implies",
                    index + 1
                )));
            }
            let mut stripped = String::with_capacity(10);
            stripped.push_str(&digits[..index]);
            stripped.push_str(&digits[index + 1..]);
            NdcCode::new(stripped)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(digits: &str) -> NdcCode {
        NdcCode::new(digits).expect("test code")
    }

    #[test]
    fn pads_at_each_layout_boundary() {
        let padded = convert(
            &code("9999999999"),
            SegmentVariant::FourFourTwo,
            Direction::TenToEleven,
        )
        .expect("4-4-2 pad");
        assert_eq!(padded.output.as_str(), "09999999999");

        let padded = convert(
            &code("5486812345"),
            SegmentVariant::FiveThreeTwo,
            Direction::TenToEleven,
        )
        .expect("5-3-2 pad");
        assert_eq!(padded.output.as_str(), "54868012345");

        let padded = convert(
            &code("5486812345"),
            SegmentVariant::FiveFourOne,
            Direction::TenToEleven,
        )
        .expect("5-4-1 pad");
        assert_eq!(padded.output.as_str(), "54868123405");
    }

    #[test]
    fn strips_the_classified_origin_zero() {
        let stripped = convert_detected(&code("00091234567"), Direction::ElevenToTen)
            .expect("4-4-2 origin");
        assert_eq!(stripped.output.as_str(), "0091234567");
        assert_eq!(stripped.variant, SegmentVariant::FourFourTwo);
        assert_eq!(stripped.confidence, Confidence::Certain);
    }

    #[test]
    fn refuses_lossy_forced_strip() {
        let error = convert(
            &code("54868123456"),
            SegmentVariant::FourFourTwo,
            Direction::ElevenToTen,
        )
        .expect_err("leading digit is not zero");
        assert!(matches!(error, NdcError::Unconvertible(_)));
    }

    #[test]
    fn refuses_length_direction_mismatch() {
        let error = convert(
            &code("5486812345"),
            SegmentVariant::FiveThreeTwo,
            Direction::ElevenToTen,
        )
        .expect_err("10 digits cannot strip");
        assert_eq!(error, NdcError::InvalidLength(10));
    }

    #[test]
    fn refuses_unknown_and_target_layouts() {
        for variant in [SegmentVariant::Unknown, SegmentVariant::FiveFourTwo] {
            let error = convert(&code("5486812345"), variant, Direction::TenToEleven)
                .expect_err("no transform");
            assert!(matches!(error, NdcError::Unconvertible(_)));
        }
    }

    #[test]
    fn detected_unknown_is_unconvertible() {
        let error =
            convert_detected(&code("12345678911"), Direction::ElevenToTen).expect_err("no probe");
        assert!(matches!(error, NdcError::Unconvertible(_)));
    }
}
