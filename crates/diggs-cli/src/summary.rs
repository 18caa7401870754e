use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use diggs_cli::types::{ConversionOutcome, ConversionReport, LogSummary};

pub fn print_outcome(outcome: &ConversionOutcome) {
    match outcome {
        ConversionOutcome::Converted(report) => print_report(report),
        ConversionOutcome::Fallback { output, message } => {
            eprintln!("error: {message}");
            println!("Fallback document: {}", output.display());
        }
    }
}

fn print_report(report: &ConversionReport) {
    println!("Input: {}", report.input.display());
    println!("Output: {}", report.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Borehole"),
        header_cell("Measurement"),
        header_cell("Parameters"),
        header_cell("Rows"),
        header_cell("Skipped"),
        header_cell("Max depth (m)"),
        header_cell("Defaults"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(&report.borehole).add_attribute(Attribute::Bold),
        Cell::new(&report.measurement),
        Cell::new(report.parameters),
        Cell::new(report.rows),
        count_cell(report.skipped_lines, Color::Yellow),
        depth_cell(report.max_depth),
        count_cell(report.diagnostics.len(), Color::Yellow),
    ]);
    println!("{table}");

    if report.schema_defaulted {
        println!("No parameter section found; default Datum/Depth schema used.");
    }
    if !report.diagnostics.is_empty() {
        let mut defaults = Table::new();
        defaults.set_header(vec![header_cell("#"), header_cell("Default substituted")]);
        apply_table_style(&mut defaults);
        for (index, diagnostic) in report.diagnostics.iter().enumerate() {
            defaults.add_row(vec![
                dim_cell(index + 1),
                Cell::new(diagnostic.to_string()).fg(Color::Yellow),
            ]);
        }
        println!("{defaults}");
    }
}

pub fn print_log_summary(summary: &LogSummary) {
    println!("Input: {}", summary.path.display());

    let mut header = Table::new();
    header.set_header(vec![header_cell("Header field"), header_cell("Value")]);
    apply_table_style(&mut header);
    for (key, value) in summary.header.iter() {
        let value = if value.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(value)
        };
        header.add_row(vec![Cell::new(key), value]);
    }
    println!("{header}");

    let mut parameters = Table::new();
    parameters.set_header(vec![
        header_cell("#"),
        header_cell("Parameter"),
        header_cell("Unit"),
        header_cell("Property class"),
    ]);
    apply_table_style(&mut parameters);
    align_column(&mut parameters, 0, CellAlignment::Right);
    for (index, parameter) in summary.parameters.iter().enumerate() {
        let class = if parameter.property_class.is_known() {
            Cell::new(parameter.property_class.code())
        } else {
            dim_cell(parameter.property_class.code())
        };
        parameters.add_row(vec![
            dim_cell(index),
            Cell::new(&parameter.name),
            Cell::new(&parameter.unit),
            class,
        ]);
    }
    println!("{parameters}");

    let mut stats = Table::new();
    stats.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut stats);
    align_column(&mut stats, 1, CellAlignment::Right);
    stats.add_row(vec![Cell::new("Rows"), Cell::new(summary.rows)]);
    stats.add_row(vec![
        Cell::new("Columns (first row)"),
        optional_cell(summary.columns),
    ]);
    stats.add_row(vec![
        Cell::new("Skipped lines"),
        count_cell(summary.skipped_lines, Color::Yellow),
    ]);
    stats.add_row(vec![Cell::new("Max depth (m)"), depth_cell(summary.max_depth)]);
    stats.add_row(vec![
        Cell::new("First timestamp"),
        optional_cell(summary.first_timestamp.as_deref()),
    ]);
    stats.add_row(vec![
        Cell::new("Last timestamp"),
        optional_cell(summary.last_timestamp.as_deref()),
    ]);
    stats.add_row(vec![
        Cell::new("Default schema"),
        Cell::new(if summary.schema_defaulted { "yes" } else { "no" }),
    ]);
    println!("{stats}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn depth_cell(depth: Option<f64>) -> Cell {
    match depth {
        Some(depth) => Cell::new(format!("{depth:.2}")),
        None => dim_cell("-"),
    }
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
