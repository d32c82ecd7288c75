//! Segment classification for normalized NDC codes.
//!
//! The two directions are deliberately asymmetric. An 11-digit code carries
//! its padding zero at a layout-specific boundary, so its 10-digit origin is
//! structurally determined by positional probes. A 10-digit code has no
//! self-describing marker at all, so its layout is scored from enumerable
//! heuristic rules, with a named `Ambiguous` outcome when no candidate
//! dominates.

use tracing::debug;

use ndc_model::{Confidence, NdcCode, SegmentVariant};

/// Outcome of classifying one code. Nothing is retained across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub variant: SegmentVariant,
    pub confidence: Confidence,
}

/// Score for one candidate layout of a 10-digit code.
///
/// `evidence` names the rules that fired, for debug logging and audit.
#[derive(Debug, Clone)]
pub struct CandidateScore {
    pub variant: SegmentVariant,
    pub score: u8,
    pub evidence: Vec<&'static str>,
}

impl CandidateScore {
    /// Human-readable summary, e.g. `5-3-2: 3 (leading digit 4-9; ...)`.
    pub fn explain(&self) -> String {
        format!("{}: {} ({})", self.variant, self.score, self.evidence.join("; "))
    }
}

/// Origin probes for an 11-digit code, in priority order.
///
/// 4-4-2 is probed first: it is the only layout that pads at the labeler
/// boundary rather than internally, and the positions can overlap.
const ORIGIN_PROBES: [(usize, SegmentVariant); 3] = [
    (0, SegmentVariant::FourFourTwo),
    (5, SegmentVariant::FiveThreeTwo),
    (9, SegmentVariant::FiveFourOne),
];

/// Determine the segmentation of a normalized code.
///
/// Total over all valid codes: always returns a variant (possibly
/// `Unknown`) paired with a confidence, and never panics.
pub fn classify(code: &NdcCode) -> Classification {
    match code.digit_count() {
        11 => classify_eleven(code),
        _ => classify_ten(code),
    }
}

/// Reverse detection: which 10-digit layout produced this 11-digit code.
fn classify_eleven(code: &NdcCode) -> Classification {
    for (index, variant) in ORIGIN_PROBES {
        if code.digit(index) == Some('0') {
            debug!(code = %code, probe = index, variant = %variant, "origin determined");
            return Classification {
                variant,
                confidence: Confidence::Certain,
            };
        }
    }
    debug!(code = %code, "no padding zero at any probe position");
    Classification {
        variant: SegmentVariant::Unknown,
        confidence: Confidence::Ambiguous,
    }
}

/// Forward detection: which layout a 10-digit code already is.
fn classify_ten(code: &NdcCode) -> Classification {
    let scores = score_candidates(code);
    let top = scores.iter().map(|candidate| candidate.score).max().unwrap_or(0);
    let mut leaders = scores.iter().filter(|candidate| candidate.score == top);
    match (leaders.next(), leaders.next()) {
        (Some(leader), None) => {
            debug!(code = %code, winner = %leader.explain(), "layout scored");
            Classification {
                variant: leader.variant,
                confidence: Confidence::Heuristic,
            }
        }
        _ => {
            debug!(code = %code, top, "layout tied between candidates");
            Classification {
                variant: SegmentVariant::Unknown,
                confidence: Confidence::Ambiguous,
            }
        }
    }
}

/// Score the three candidate layouts for a 10-digit code.
///
/// The rule set is intentionally small and enumerable:
/// - 4-digit labeler codes are the low-numbered legacy allocations, so a
///   leading `0` is strong evidence for 4-4-2 and `1`-`3` weak evidence.
/// - a leading digit of `4`-`9` points at the 5-digit labeler layouts;
/// - between those, digit 9 decides: a two-digit package code is written
///   without a leading zero, so `0` there reads as the 5-4-1 layout.
pub fn score_candidates(code: &NdcCode) -> Vec<CandidateScore> {
    let digits = code.as_str().as_bytes();
    let leading = digits[0];
    let package_lead = digits[8];

    let mut candidates = Vec::with_capacity(3);
    for variant in SegmentVariant::ten_digit_variants() {
        let mut score = 0u8;
        let mut evidence = Vec::new();
        match variant {
            SegmentVariant::FourFourTwo => {
                if leading == b'0' {
                    score += 2;
                    evidence.push("leading digit 0");
                } else if leading <= b'3' {
                    score += 1;
                    evidence.push("leading digit 1-3");
                }
            }
            SegmentVariant::FiveThreeTwo => {
                if leading >= b'4' {
                    score += 2;
                    evidence.push("leading digit 4-9");
                }
                if package_lead != b'0' {
                    score += 1;
                    evidence.push("two-digit package without leading zero");
                }
            }
            SegmentVariant::FiveFourOne => {
                if leading >= b'4' {
                    score += 2;
                    evidence.push("leading digit 4-9");
                }
                if package_lead == b'0' {
                    score += 1;
                    evidence.push("zero at digit 9 reads as package padding");
                }
            }
            _ => {}
        }
        candidates.push(CandidateScore {
            variant,
            score,
            evidence,
        });
    }
    candidates
}
