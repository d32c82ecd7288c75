//! Segmentation variants and classification confidence.
//!
//! An NDC is three dash-delimited segments (labeler, product, package). The
//! 10-digit legacy form comes in three layouts; the 11-digit standardized
//! form has exactly one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A segmentation scheme for an NDC digit string.
///
/// The three 10-digit layouts each pad to the single 11-digit `FiveFourTwo`
/// layout by inserting one zero at a layout-specific boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentVariant {
    /// 4-4-2: four-digit labeler code, 10 digits total.
    FourFourTwo,
    /// 5-3-2: three-digit product code, 10 digits total.
    FiveThreeTwo,
    /// 5-4-1: one-digit package code, 10 digits total.
    FiveFourOne,
    /// 5-4-2: the standardized 11-digit layout.
    FiveFourTwo,
    /// Layout could not be determined.
    Unknown,
}

impl SegmentVariant {
    /// Canonical dashed notation, e.g. `4-4-2`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentVariant::FourFourTwo => "4-4-2",
            SegmentVariant::FiveThreeTwo => "5-3-2",
            SegmentVariant::FiveFourOne => "5-4-1",
            SegmentVariant::FiveFourTwo => "5-4-2",
            SegmentVariant::Unknown => "unknown",
        }
    }

    /// Segment lengths as (labeler, product, package); `None` for `Unknown`.
    pub fn segment_lengths(&self) -> Option<(usize, usize, usize)> {
        match self {
            SegmentVariant::FourFourTwo => Some((4, 4, 2)),
            SegmentVariant::FiveThreeTwo => Some((5, 3, 2)),
            SegmentVariant::FiveFourOne => Some((5, 4, 1)),
            SegmentVariant::FiveFourTwo => Some((5, 4, 2)),
            SegmentVariant::Unknown => None,
        }
    }

    /// Total digit count implied by the layout; `None` for `Unknown`.
    pub fn total_digits(&self) -> Option<usize> {
        self.segment_lengths()
            .map(|(labeler, product, package)| labeler + product + package)
    }

    /// The three candidate layouts for a 10-digit code, in probe order.
    pub fn ten_digit_variants() -> [SegmentVariant; 3] {
        [
            SegmentVariant::FourFourTwo,
            SegmentVariant::FiveThreeTwo,
            SegmentVariant::FiveFourOne,
        ]
    }

    /// Render `digits` with dashes at this layout's segment boundaries.
    ///
    /// Returns `None` when the digit count does not match the layout.
    pub fn hyphenate(&self, digits: &str) -> Option<String> {
        let (labeler, product, package) = self.segment_lengths()?;
        if digits.len() != labeler + product + package {
            return None;
        }
        Some(format!(
            "{}-{}-{}",
            &digits[..labeler],
            &digits[labeler..labeler + product],
            &digits[labeler + product..]
        ))
    }
}

impl fmt::Display for SegmentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4-4-2" => Ok(SegmentVariant::FourFourTwo),
            "5-3-2" => Ok(SegmentVariant::FiveThreeTwo),
            "5-4-1" => Ok(SegmentVariant::FiveFourOne),
            "5-4-2" => Ok(SegmentVariant::FiveFourTwo),
            other if other.eq_ignore_ascii_case("unknown") => Ok(SegmentVariant::Unknown),
            other => Err(format!("unknown segment layout: {other}")),
        }
    }
}

/// How certain the classifier is about an inferred variant.
///
/// Ordered from most to least certain so tallies can be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    /// Structurally determined (the 11-digit positional rule).
    Certain,
    /// A single scored candidate dominated.
    Heuristic,
    /// No candidate dominated; the caller must decide.
    Ambiguous,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Certain => "certain",
            Confidence::Heuristic => "heuristic",
            Confidence::Ambiguous => "ambiguous",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion direction between the two representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Pad a legacy 10-digit code to the 11-digit layout.
    TenToEleven,
    /// Strip an 11-digit code back to its 10-digit origin.
    ElevenToTen,
}

impl Direction {
    /// Digit count the input must have.
    pub fn source_digits(&self) -> usize {
        match self {
            Direction::TenToEleven => 10,
            Direction::ElevenToTen => 11,
        }
    }

    /// Digit count the output will have.
    pub fn target_digits(&self) -> usize {
        match self {
            Direction::TenToEleven => 11,
            Direction::ElevenToTen => 10,
        }
    }

    /// Suffix appended to the source column name in batch output.
    pub fn column_suffix(&self) -> &'static str {
        match self {
            Direction::TenToEleven => "_11digit",
            Direction::ElevenToTen => "_10digit",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::TenToEleven => "10to11",
            Direction::ElevenToTen => "11to10",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "10to11" | "10-to-11" => Ok(Direction::TenToEleven),
            "11to10" | "11-to-10" => Ok(Direction::ElevenToTen),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}
