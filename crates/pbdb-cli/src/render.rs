//! Terminal rendering of dictionary results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pbdb_model::{
    CategoryListing, DictionaryDiagnostics, DictionaryStats, FieldInfo, NOT_AVAILABLE,
};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_listing_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn code_cell(code: Option<&str>) -> Cell {
    match code {
        Some(code) => Cell::new(code).fg(Color::Green),
        None => dim_cell(NOT_AVAILABLE),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// One table per category: compact code (or `N/A`) against verbose name.
pub fn category_table(listing: &CategoryListing) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Compact"), header_cell("Verbose")]);
    apply_listing_style(&mut table);
    for field in &listing.fields {
        table.add_row(vec![
            code_cell(field.compact_code.as_deref()),
            Cell::new(&field.verbose_name),
        ]);
    }
    table
}

/// Plain-text lookup result, one line per attribute.
pub fn field_info_lines(info: &FieldInfo) -> Vec<String> {
    let mut lines = vec![
        format!("Compact name: {}", info.compact_code),
        format!("Verbose name: {}", info.verbose_name),
    ];
    if let Some(category) = &info.category {
        lines.push(format!("Category: {category}"));
    }
    lines
}

/// Original and translated names side by side; unchanged names are dimmed.
pub fn rename_table<S: AsRef<str>>(original: &[S], translated: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Translated"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, (before, after)) in original.iter().zip(translated).enumerate() {
        let before = before.as_ref();
        let after_cell = if before == after {
            dim_cell(after)
        } else {
            Cell::new(after).fg(Color::Green)
        };
        table.add_row(vec![Cell::new(index + 1), Cell::new(before), after_cell]);
    }
    table
}

pub fn stats_table(stats: &DictionaryStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Total fields in dictionary", stats.field_count),
        ("Literal table entries", stats.literal_entry_count),
        ("Reverse lookups", stats.reverse_count),
        ("Number of categories", stats.category_count),
        ("Analysis types available", stats.analysis_count),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

pub fn diagnostics_table(diagnostics: &DictionaryDiagnostics) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Subject"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    for shadow in &diagnostics.shadowed_codes {
        table.add_row(vec![
            Cell::new("shadowed code").fg(Color::Yellow),
            Cell::new(&shadow.compact_code),
            Cell::new(format!("{} replaced by {}", shadow.replaced, shadow.replacement)),
        ]);
    }
    for collision in &diagnostics.reverse_collisions {
        table.add_row(vec![
            Cell::new("reverse collision").fg(Color::Yellow),
            Cell::new(&collision.verbose_name),
            Cell::new(format!(
                "{} dropped, {} kept",
                collision.dropped, collision.kept
            )),
        ]);
    }
    for (category, field) in &diagnostics.unmapped_category_fields {
        table.add_row(vec![
            dim_cell("no compact code"),
            Cell::new(field),
            Cell::new(format!("category {category}")),
        ]);
    }
    for (analysis, field) in &diagnostics.unmapped_analysis_fields {
        table.add_row(vec![
            dim_cell("no compact code"),
            Cell::new(field),
            Cell::new(format!("analysis {analysis}")),
        ]);
    }
    table
}
