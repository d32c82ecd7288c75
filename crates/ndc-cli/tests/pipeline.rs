//! Integration tests for the batch pipeline.

use std::fs;

use ndc_cli::pipeline::{PipelineOptions, process_rows};
use ndc_ingest::{read_csv_table, write_csv_table};
use ndc_model::{Direction, SegmentVariant};

fn options(direction: Direction) -> PipelineOptions {
    PipelineOptions {
        direction,
        assume: None,
        fail_fast: false,
    }
}

fn rows(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn converts_mixed_rows_and_accounts_for_each() {
    let input = rows(&[
        "5486-8123-45", // heuristic 5-3-2
        "0009001001",   // heuristic 4-4-2 (leading zero)
        "54868012345",  // already 11 digits
        "",             // empty
        "12A4567890",   // invalid character
        "1234567890",   // ambiguous, no --assume
    ]);
    let outcome = process_rows(&input, &options(Direction::TenToEleven)).expect("no fail-fast");

    assert_eq!(outcome.values.len(), 6);
    assert_eq!(outcome.values[0], "54868012345");
    assert_eq!(outcome.values[1], "00009001001");
    // Pass-through rows keep their original cell text.
    assert_eq!(outcome.values[2], "54868012345");
    assert_eq!(outcome.values[3], "");
    assert_eq!(outcome.values[4], "12A4567890");
    assert_eq!(outcome.values[5], "1234567890");

    let tally = &outcome.tally;
    assert_eq!(tally.total, 6);
    assert_eq!(tally.converted, 2);
    assert_eq!(tally.heuristic, 2);
    assert_eq!(tally.certain, 0);
    assert_eq!(tally.ambiguous, 1);
    assert_eq!(tally.already_target, 1);
    assert_eq!(tally.empty, 1);
    assert_eq!(tally.failed, 2);

    assert_eq!(outcome.samples.len(), 2);
    assert_eq!(outcome.samples[0].before, "5486-8123-45");
    assert_eq!(outcome.samples[0].after, "54868012345");
    assert_eq!(outcome.warnings.len(), 2);
}

#[test]
fn eleven_to_ten_is_certain_when_a_probe_matches() {
    let input = rows(&["00091234567", "54868012345"]);
    let outcome = process_rows(&input, &options(Direction::ElevenToTen)).expect("process");
    assert_eq!(outcome.values[0], "0091234567");
    assert_eq!(outcome.values[1], "5486812345");
    assert_eq!(outcome.tally.certain, 2);
    assert_eq!(outcome.tally.heuristic, 0);
}

#[test]
fn assume_converts_ambiguous_rows_with_a_warning() {
    let input = rows(&["1234567890"]);
    let mut opts = options(Direction::TenToEleven);
    opts.assume = Some(SegmentVariant::FourFourTwo);
    let outcome = process_rows(&input, &opts).expect("process");

    assert_eq!(outcome.values[0], "01234567890");
    assert_eq!(outcome.tally.converted, 1);
    assert_eq!(outcome.tally.ambiguous, 1);
    assert_eq!(outcome.tally.failed, 0);
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].reason.contains("assumed 4-4-2"));
}

#[test]
fn fail_fast_aborts_on_first_bad_row() {
    let input = rows(&["5486812345", "not-a-code", "0009001001"]);
    let mut opts = options(Direction::TenToEleven);
    opts.fail_fast = true;
    let error = process_rows(&input, &opts).expect_err("second row aborts");
    assert!(error.to_string().contains("row 2"));
}

#[test]
fn batch_over_a_csv_file_appends_the_result_column() {
    let file = tempfile::NamedTempFile::new().expect("temp input");
    fs::write(
        file.path(),
        "item,ndc\naspirin,5486-8123-45\nsaline,0009001001\n",
    )
    .expect("write input");

    let mut table = read_csv_table(file.path(), b',').expect("read");
    let column_index = 1;
    let raw_values: Vec<String> = table
        .column_values(column_index)
        .iter()
        .map(|value| (*value).to_string())
        .collect();
    let outcome =
        process_rows(&raw_values, &options(Direction::TenToEleven)).expect("process");
    table
        .add_column("ndc_11digit", outcome.values)
        .expect("one value per row");

    let out = tempfile::NamedTempFile::new().expect("temp output");
    write_csv_table(out.path(), &table, b',').expect("write");

    let written = read_csv_table(out.path(), b',').expect("re-read");
    assert_eq!(written.headers, vec!["item", "ndc", "ndc_11digit"]);
    assert_eq!(written.rows[0][2], "54868012345");
    assert_eq!(written.rows[1][2], "00009001001");
    assert_eq!(outcome.tally.converted, 2);
}
