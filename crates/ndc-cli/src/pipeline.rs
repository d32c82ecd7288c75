//! Per-row batch conversion loop.
//!
//! Each row runs normalize -> classify -> convert independently; the engine
//! is pure, so a failing row never poisons the batch. Failures keep the
//! original value in the output column and are surfaced as warnings.

use anyhow::{Result, bail};
use tracing::{debug, warn};

use ndc_core::{classify, convert, normalize};
use ndc_model::{Confidence, Direction, NdcCode, SegmentVariant};

use crate::types::{RowTally, RowWarning, SamplePair};

/// How many before/after pairs the summary shows.
pub const SAMPLE_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub direction: Direction,
    /// Layout forced for rows the classifier reports ambiguous.
    pub assume: Option<SegmentVariant>,
    /// Abort on the first row failure instead of warning and continuing.
    pub fail_fast: bool,
}

/// Everything the batch loop produced: one output value per input row plus
/// the run accounting.
#[derive(Debug)]
pub struct PipelineOutput {
    pub values: Vec<String>,
    pub tally: RowTally,
    pub samples: Vec<SamplePair>,
    pub warnings: Vec<RowWarning>,
}

/// Convert one column of raw values row by row.
///
/// Only `--fail-fast` makes this return an error; otherwise every row is
/// accounted for in the tally and the output column.
pub fn process_rows(raw_values: &[String], options: &PipelineOptions) -> Result<PipelineOutput> {
    let mut values = Vec::with_capacity(raw_values.len());
    let mut tally = RowTally::default();
    let mut samples = Vec::new();
    let mut warnings = Vec::new();

    for (index, raw) in raw_values.iter().enumerate() {
        let row = index + 1;
        tally.total += 1;

        if raw.trim().is_empty() {
            tally.empty += 1;
            values.push(String::new());
            continue;
        }

        let code = match normalize(raw) {
            Ok(code) => code,
            Err(error) => {
                row_failed(row, raw, error.to_string(), options, &mut tally, &mut warnings)?;
                values.push(raw.clone());
                continue;
            }
        };

        // A row already at the target digit count passes through untouched.
        if code.digit_count() == options.direction.target_digits() {
            debug!(row, code = %code, "already at target length");
            tally.already_target += 1;
            values.push(raw.clone());
            continue;
        }

        match convert_row(&code, options, row, &mut tally, &mut warnings)? {
            Some(output) => {
                tally.converted += 1;
                if samples.len() < SAMPLE_LIMIT {
                    samples.push(SamplePair {
                        row,
                        before: raw.clone(),
                        after: output.clone(),
                    });
                }
                values.push(output);
            }
            None => values.push(raw.clone()),
        }
    }

    Ok(PipelineOutput {
        values,
        tally,
        samples,
        warnings,
    })
}

/// Convert a single normalized code, updating the classification tallies.
///
/// Returns `Ok(None)` when the row could not be converted but the batch
/// should continue.
fn convert_row(
    code: &NdcCode,
    options: &PipelineOptions,
    row: usize,
    tally: &mut RowTally,
    warnings: &mut Vec<RowWarning>,
) -> Result<Option<String>> {
    let classification = classify(code);
    if classification.variant == SegmentVariant::Unknown {
        tally.ambiguous += 1;
        let Some(assumed) = options.assume else {
            row_failed(
                row,
                code.as_str(),
                "layout could not be determined".to_string(),
                options,
                tally,
                warnings,
            )?;
            return Ok(None);
        };
        return match convert(code, assumed, options.direction) {
            Ok(result) => {
                warnings.push(RowWarning {
                    row,
                    value: code.as_str().to_string(),
                    reason: format!("layout ambiguous; assumed {assumed}"),
                });
                Ok(Some(result.output.to_string()))
            }
            Err(error) => {
                row_failed(row, code.as_str(), error.to_string(), options, tally, warnings)?;
                Ok(None)
            }
        };
    }

    match convert(code, classification.variant, options.direction) {
        Ok(result) => {
            match classification.confidence {
                Confidence::Certain => tally.certain += 1,
                Confidence::Heuristic => tally.heuristic += 1,
                Confidence::Ambiguous => {}
            }
            Ok(Some(result.output.to_string()))
        }
        Err(error) => {
            row_failed(row, code.as_str(), error.to_string(), options, tally, warnings)?;
            Ok(None)
        }
    }
}

fn row_failed(
    row: usize,
    value: &str,
    reason: String,
    options: &PipelineOptions,
    tally: &mut RowTally,
    warnings: &mut Vec<RowWarning>,
) -> Result<()> {
    if options.fail_fast {
        bail!("row {row}: {reason} (value: {value})");
    }
    warn!(row, value, %reason, "row not converted");
    tally.failed += 1;
    warnings.push(RowWarning {
        row,
        value: value.to_string(),
        reason,
    });
    Ok(())
}
