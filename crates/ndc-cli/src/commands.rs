use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use ndc_cli::pipeline::{PipelineOptions, process_rows};
use ndc_cli::types::BatchResult;
use ndc_core::{classify, convert, convert_detected, normalize};
use ndc_ingest::{read_csv_table, write_csv_table};
use ndc_model::{Direction, SegmentVariant};

use crate::cli::{CodeArgs, FileArgs, VariantArg};
use crate::summary::apply_table_style;

pub fn run_file(args: &FileArgs) -> Result<BatchResult> {
    let delimiter = delimiter_byte(args.delimiter)?;
    let direction = args.direction.direction();
    let span = info_span!("batch", input = %args.input.display(), direction = %direction);
    let _guard = span.enter();

    let started = Instant::now();
    let mut table = read_csv_table(&args.input, delimiter)?;
    let column_index = args.column.resolve(&table.headers)?;
    let column = table.headers[column_index].clone();
    let output_column = format!("{column}{}", direction.column_suffix());

    let raw_values: Vec<String> = table
        .column_values(column_index)
        .iter()
        .map(|value| (*value).to_string())
        .collect();
    let options = PipelineOptions {
        direction,
        assume: args.assume.map(VariantArg::variant),
        fail_fast: args.fail_fast,
    };
    let outcome = process_rows(&raw_values, &options)?;
    info!(
        rows = outcome.tally.total,
        converted = outcome.tally.converted,
        failed = outcome.tally.failed,
        duration_ms = started.elapsed().as_millis(),
        "batch complete"
    );

    let output = if args.dry_run {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        table.add_column(output_column.clone(), outcome.values)?;
        write_csv_table(&path, &table, delimiter)?;
        Some(path)
    };

    let result = BatchResult {
        input: args.input.clone(),
        output,
        direction,
        column,
        output_column,
        tally: outcome.tally,
        samples: outcome.samples,
        warnings: outcome.warnings,
    };

    if let Some(path) = &args.report_json {
        let json = serde_json::to_string_pretty(&result).context("serialize report")?;
        fs::write(path, json).with_context(|| format!("write report: {}", path.display()))?;
    }

    Ok(result)
}

pub fn run_code(args: &CodeArgs) -> Result<()> {
    let direction = args.direction.direction();
    let code = normalize(&args.raw)?;
    if code.digit_count() == direction.target_digits() {
        bail!("{code} is already {} digits", code.digit_count());
    }

    let classification = classify(&code);
    let (result, assumed) = if classification.variant == SegmentVariant::Unknown {
        match args.assume {
            Some(variant) => (convert(&code, variant.variant(), direction)?, true),
            None => bail!("layout of {code} could not be determined; pass --assume to force one"),
        }
    } else {
        (convert_detected(&code, direction)?, false)
    };

    println!("{}", result.output);
    if assumed {
        println!("Layout: {} (assumed)", result.variant);
    } else {
        println!("Layout: {} ({})", result.variant, result.confidence);
    }
    let output_layout = match direction {
        Direction::TenToEleven => SegmentVariant::FiveFourTwo,
        Direction::ElevenToTen => result.variant,
    };
    if let Some(formatted) = output_layout.hyphenate(result.output.as_str()) {
        println!("Formatted: {formatted}");
    }
    Ok(())
}

pub fn run_variants() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        "Layout", "Digits", "Labeler", "Product", "Package", "Padding",
    ]);
    apply_table_style(&mut table);
    for variant in [
        SegmentVariant::FourFourTwo,
        SegmentVariant::FiveThreeTwo,
        SegmentVariant::FiveFourOne,
        SegmentVariant::FiveFourTwo,
    ] {
        let Some((labeler, product, package)) = variant.segment_lengths() else {
            continue;
        };
        let padding = match variant {
            SegmentVariant::FourFourTwo => "zero before labeler code",
            SegmentVariant::FiveThreeTwo => "zero at start of product code",
            SegmentVariant::FiveFourOne => "zero at start of package code",
            _ => "-",
        };
        table.add_row(vec![
            variant.to_string(),
            (labeler + product + package).to_string(),
            labeler.to_string(),
            product.to_string(),
            package.to_string(),
            padding.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        bail!("delimiter must be an ASCII character, got '{delimiter}'")
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("output");
    let extension = input
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("csv");
    input.with_file_name(format!("{stem}_converted.{extension}"))
}
