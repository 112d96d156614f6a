use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{DataFrame, PolarsResult};

use sales_normalization::{ColumnRole, ColumnRoleAssignment};
use sales_output::to_text_frame;

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    let report = &result.report;
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    println!(
        "Rows: {} read, {} dropped, {} written",
        report.input_rows, report.dropped_rows, report.output_rows
    );
    println!("Fill policy: {}", report.fill_policy);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Original"),
        header_cell("Role"),
        header_cell("Fill value"),
        header_cell("Filled"),
        header_cell("Non-numeric"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);

    for (rename, assignment) in report.renames.iter().zip(&report.roles) {
        let fill = report
            .fills
            .iter()
            .find(|fill| fill.column == assignment.column);
        let original = if rename.is_changed() {
            Cell::new(&rename.original)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(&assignment.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            original,
            role_cell(assignment),
            match fill {
                Some(fill) => Cell::new(&fill.fill_value),
                None => dim_cell("-"),
            },
            count_cell(fill.map(|f| f.filled), Color::Yellow),
            count_cell(fill.map(|f| f.non_numeric), Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} renamed", report.renamed_columns())),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(Some(report.filled_cells()), Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(Some(report.non_numeric_cells()), Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

/// Prints the first `rows` rows of the cleaned table.
pub fn print_preview(df: &DataFrame, rows: usize) -> Result<()> {
    let table = preview_table(df, rows)?;
    println!("Preview ({} of {} rows):", rows.min(df.height()), df.height());
    println!("{table}");
    Ok(())
}

fn preview_table(df: &DataFrame, rows: usize) -> Result<Table> {
    let head = to_text_frame(&df.head(Some(rows)))?;
    let mut table = Table::new();
    table.set_header(
        head.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_preview_table_style(&mut table);
    let columns = head
        .get_columns()
        .iter()
        .map(|column| column.str())
        .collect::<PolarsResult<Vec<_>>>()
        .context("read preview cells")?;
    for idx in 0..head.height() {
        let row = columns
            .iter()
            .map(|values| match values.get(idx) {
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            })
            .collect::<Vec<_>>();
        table.add_row(row);
    }
    Ok(table)
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn apply_preview_table_style(table: &mut Table) {
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

fn role_cell(assignment: &ColumnRoleAssignment) -> Cell {
    match assignment.role {
        ColumnRole::Unclassified => dim_cell(assignment.role),
        role if role.is_numeric() => Cell::new(role).fg(Color::Green),
        role => Cell::new(role),
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_preview_table_limits_rows_and_shows_nulls() {
        let df = df! {
            "prodname" => &[Some("Widget"), None, Some("Gizmo")],
            "qty" => &[Some(2i64), Some(0), Some(5)],
        }
        .unwrap();

        let table = preview_table(&df, 2).unwrap();

        assert_eq!(table.row_count(), 2);
        let text = table.to_string();
        assert!(text.contains("prodname"));
        assert!(text.contains("Widget"));
        assert!(text.contains('-'));
        assert!(!text.contains("Gizmo"));
    }
}
