use serde::{Deserialize, Serialize};

use crate::{Confidence, NdcCode, SegmentVariant};

/// Outcome of one conversion call.
///
/// `variant` is the layout inferred (or assumed) for the *input* code, so a
/// caller can reverse the transform later. Constructed once per call and
/// returned by value; nothing is retained inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// The converted digit string.
    pub output: NdcCode,
    /// Layout the input was classified as (or forced to).
    pub variant: SegmentVariant,
    /// Classifier certainty for `variant`.
    pub confidence: Confidence,
}
