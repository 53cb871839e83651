use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use pbdb_cli::render::{
    category_table, diagnostics_table, field_info_lines, rename_table, stats_table,
};
use pbdb_ingest::{CsvOptions, read_csv_frame, read_csv_header, write_csv_frame};
use pbdb_map::{ColumnFrame, FieldDictionary};
use pbdb_model::Direction;

use crate::cli::{AnalysisArgs, ColumnsArgs, DescribeArgs, OutputArgs, TranslateArgs};

const RULE: &str = "======================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------------";

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

pub fn run_fields(dictionary: &FieldDictionary, args: &OutputArgs) -> Result<()> {
    let listings = dictionary.list_fields_by_category();
    if args.json {
        return print_json(&listings);
    }
    println!("{RULE}");
    println!("PBDB FIELD REFERENCE - ORGANIZED BY CATEGORY");
    println!("{RULE}");
    for listing in &listings {
        println!();
        println!("{}", listing.title());
        println!("{}", category_table(listing));
    }
    Ok(())
}

pub fn run_describe(dictionary: &FieldDictionary, args: &DescribeArgs) -> Result<()> {
    let info = dictionary.describe_field(&args.field)?;
    if args.output.json {
        return print_json(&info);
    }
    for line in field_info_lines(&info) {
        println!("{line}");
    }
    Ok(())
}

pub fn run_analysis(dictionary: &FieldDictionary, args: &AnalysisArgs) -> Result<()> {
    let Some(name) = args.name.as_deref() else {
        let names: Vec<&str> = dictionary.analysis_names().collect();
        if args.output.json {
            return print_json(&names);
        }
        println!("Analysis types:");
        for name in names {
            println!("  {name}");
        }
        return Ok(());
    };

    if let Some(path) = &args.against {
        let columns = read_csv_header(path, CsvOptions::for_path(path))
            .with_context(|| format!("load {}", path.display()))?;
        let selection = dictionary.select_analysis_columns(&columns, name)?;
        if !selection.is_complete() {
            warn!(
                analysis = name,
                missing = selection.missing.len(),
                "download lacks recommended fields"
            );
        }
        if args.output.json {
            return print_json(&selection);
        }
        println!(
            "Present ({}): {}",
            selection.present.len(),
            selection.present.join(", ")
        );
        println!(
            "Missing ({}): {}",
            selection.missing.len(),
            selection.missing.join(", ")
        );
        return Ok(());
    }

    let fields = dictionary.fields_for_analysis(name)?;
    if args.output.json {
        return print_json(&fields);
    }
    println!("Number of fields: {}", fields.len());
    println!("Fields: {}", fields.join(", "));
    Ok(())
}

pub fn run_columns(dictionary: &FieldDictionary, args: &ColumnsArgs) -> Result<()> {
    let translated = dictionary.translate_columns(&args.names, args.direction);
    println!("{}", rename_table(&args.names, &translated));
    Ok(())
}

pub fn run_translate(dictionary: &FieldDictionary, args: &TranslateArgs) -> Result<()> {
    let span = info_span!(
        "translate",
        input = %args.input.display(),
        direction = %args.direction
    );
    let _guard = span.enter();

    let options = CsvOptions {
        infer_types: args.infer_types,
        ..CsvOptions::for_path(&args.input)
    };
    let Some(path) = &args.output else {
        let columns = read_csv_header(&args.input, options)
            .with_context(|| format!("load {}", args.input.display()))?;
        let translated = report_header(dictionary, &columns, args.direction);
        println!("{}", rename_table(&columns, &translated));
        return Ok(());
    };

    let df = read_csv_frame(&args.input, options)
        .with_context(|| format!("load {}", args.input.display()))?;
    report_header(dictionary, &ColumnFrame::column_names(&df), args.direction);
    let mut out = dictionary
        .translate_frame(&df, args.direction)
        .context("translate header")?;
    let out_options = CsvOptions {
        infer_types: args.infer_types,
        ..CsvOptions::for_path(path)
    };
    write_csv_frame(&mut out, path, out_options)
        .with_context(|| format!("write {}", path.display()))?;
    info!(output = %path.display(), rows = out.height(), "wrote translated table");
    println!("Wrote {} rows to {}", out.height(), path.display());
    Ok(())
}

/// Logs what a header translation will do and returns the translated names.
fn report_header(
    dictionary: &FieldDictionary,
    columns: &[String],
    direction: Direction,
) -> Vec<String> {
    let unknown = columns
        .iter()
        .filter(|column| dictionary.translate_name(column, direction).is_none())
        .count();
    info!(columns = columns.len(), unknown, "translating header");
    warn_lossy_columns(dictionary, columns, direction);
    dictionary.translate_columns(columns, direction)
}

/// Verbose columns whose compact code is ambiguous do not round-trip.
fn warn_lossy_columns(dictionary: &FieldDictionary, columns: &[String], direction: Direction) {
    if direction != Direction::VerboseToCompact {
        return;
    }
    for collision in dictionary.diagnostics().reverse_collisions {
        if columns.contains(&collision.verbose_name) {
            warn!(
                column = %collision.verbose_name,
                code = %collision.kept,
                also = %collision.dropped,
                "verbose name maps back to one of several compact codes"
            );
        }
    }
}

pub fn run_stats(dictionary: &FieldDictionary, args: &OutputArgs) -> Result<()> {
    let stats = dictionary.stats();
    if args.json {
        return print_json(&stats);
    }
    println!("{}", stats_table(&stats));
    Ok(())
}

pub fn run_check(dictionary: &FieldDictionary, args: &OutputArgs) -> Result<()> {
    let diagnostics = dictionary.diagnostics();
    if args.json {
        return print_json(&diagnostics);
    }
    if diagnostics.is_clean() {
        println!("No issues found.");
        return Ok(());
    }
    println!("{}", diagnostics_table(&diagnostics));
    println!("{} issue(s)", diagnostics.issue_count());
    Ok(())
}

pub fn run_demo(dictionary: &FieldDictionary) -> Result<()> {
    println!("PBDB Field Dictionary - Usage Examples");
    println!("{RULE}");

    println!("\n1. All fields organized by category:");
    println!("{THIN_RULE}");
    run_fields(dictionary, &OutputArgs { json: false })?;

    println!("\n\n2. Looking up a specific field:");
    println!("{THIN_RULE}");
    for line in field_info_lines(&dictionary.describe_field("tna")?) {
        println!("{line}");
    }

    println!("\n\n3. Recommended fields for diversity analysis:");
    println!("{THIN_RULE}");
    let fields = dictionary.fields_for_analysis("diversity_analysis")?;
    println!("Number of fields: {}", fields.len());
    println!("Fields: {}", fields.join(", "));

    println!("\n\n4. Dictionary Statistics:");
    println!("{THIN_RULE}");
    println!("{}", stats_table(&dictionary.stats()));

    println!("\n{RULE}");
    println!("Dictionary loaded successfully.");
    println!("{RULE}");
    Ok(())
}
