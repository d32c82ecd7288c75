use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ndc_cli::types::BatchResult;

pub fn print_summary(result: &BatchResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }
    println!(
        "Direction: {} ({} -> {})",
        result.direction, result.column, result.output_column
    );

    let tally = &result.tally;
    let already_label = format!("Already {}-digit", result.direction.target_digits());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Converted"),
        header_cell("Certain"),
        header_cell("Heuristic"),
        header_cell("Ambiguous"),
        header_cell(&already_label),
        header_cell("Empty"),
        header_cell("Failed"),
    ]);
    apply_table_style(&mut table);
    for index in 0..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(tally.total).add_attribute(Attribute::Bold),
        count_cell(tally.converted, Color::Green),
        count_cell(tally.certain, Color::Green),
        count_cell(tally.heuristic, Color::Cyan),
        count_cell(tally.ambiguous, Color::Yellow),
        count_cell(tally.already_target, Color::DarkGrey),
        count_cell(tally.empty, Color::DarkGrey),
        count_cell(tally.failed, Color::Red),
    ]);
    println!("{table}");

    if !result.samples.is_empty() {
        let mut samples = Table::new();
        samples.set_header(vec![
            header_cell("Row"),
            header_cell("Before"),
            header_cell("After"),
        ]);
        apply_table_style(&mut samples);
        align_column(&mut samples, 0, CellAlignment::Right);
        for sample in &result.samples {
            samples.add_row(vec![
                Cell::new(sample.row),
                Cell::new(&sample.before),
                Cell::new(&sample.after),
            ]);
        }
        println!();
        println!("Sample conversions:");
        println!("{samples}");
    }

    if !result.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &result.warnings {
            eprintln!(
                "- row {}: {} (value: {})",
                warning.row, warning.reason, warning.value
            );
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}
