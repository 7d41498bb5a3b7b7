use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use geocol_cli::report::DetectReport;
use geocol_model::DetectionResults;

pub fn print_detections(report: &DetectReport) {
    println!("Header cells: {}", report.headers.join(", "));
    if report.detection_count() == 0 {
        println!("No location columns detected.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Decider"),
        header_cell("Column"),
        header_cell("Index"),
        header_cell("Remainder"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for entry in &report.deciders {
        match &entry.results {
            DetectionResults::Pairs { pairs } => {
                for pair in pairs {
                    table.add_row(vec![
                        decider_cell(&entry.decider),
                        Cell::new(format!(
                            "{} + {}",
                            pair.lat.column_name, pair.lon.column_name
                        )),
                        Cell::new(format!("{}, {}", pair.lat.column_index, pair.lon.column_index)),
                        remainder_cell(&pair.lat.prefix, &pair.lat.suffix),
                        percent_cell(pair.confidence),
                    ]);
                }
            }
            DetectionResults::Columns { candidates, .. } => {
                for candidate in candidates {
                    let percent = (candidate.confidence * 100.0).round() as u8;
                    table.add_row(vec![
                        decider_cell(&entry.decider),
                        Cell::new(candidate.column_name.clone()),
                        Cell::new(candidate.column_index),
                        remainder_cell(&candidate.prefix, &candidate.suffix),
                        percent_cell(percent),
                    ]);
                }
            }
        }
    }
    println!("{table}");
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

fn decider_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn percent_cell(percent: u8) -> Cell {
    let cell = Cell::new(format!("{percent}%"));
    if percent >= 90 {
        cell.fg(Color::Green)
    } else if percent >= 50 {
        cell.fg(Color::Yellow)
    } else {
        cell.fg(Color::DarkGrey)
    }
}

fn remainder_cell(prefix: &str, suffix: &str) -> Cell {
    if prefix.is_empty() && suffix.is_empty() {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(format!("{prefix}*{suffix}"))
    }
}
