//! Header translation on polars frames.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use pbdb_map::{ColumnFrame, FieldDictionary, FrameError};
use pbdb_model::Direction;

fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

#[test]
fn translates_compact_frame() {
    let dict = FieldDictionary::pbdb();
    let df = test_df(vec![
        ("oid", vec!["1", "2"]),
        ("tna", vec!["Tyrannosaurus rex", "Triceratops"]),
        ("note", vec!["a", "b"]),
    ]);

    let verbose = dict
        .translate_frame(&df, Direction::CompactToVerbose)
        .unwrap();

    assert_eq!(
        ColumnFrame::column_names(&verbose),
        vec!["occurrence_id", "accepted_name", "note"]
    );
    assert_eq!(ColumnFrame::column_names(&df), vec!["oid", "tna", "note"]);
    assert_eq!(verbose.height(), 2);
    let names = verbose.column("accepted_name").unwrap();
    assert_eq!(names.str().unwrap().get(1), Some("Triceratops"));
}

#[test]
fn translates_verbose_frame_in_place() {
    let dict = FieldDictionary::pbdb();
    let mut df = test_df(vec![("max_ma", vec!["66.0"]), ("min_ma", vec!["61.6"])]);

    let renames = dict
        .translate_frame_in_place(&mut df, Direction::VerboseToCompact)
        .unwrap();

    assert_eq!(renames.len(), 2);
    assert_eq!(ColumnFrame::column_names(&df), vec!["eag", "lag"]);
}

#[test]
fn duplicate_targets_are_rejected() {
    let dict = FieldDictionary::pbdb();
    let mut df = test_df(vec![("cid", vec!["10"]), ("cln", vec!["10"])]);

    let err = dict
        .translate_frame_in_place(&mut df, Direction::CompactToVerbose)
        .unwrap_err();

    assert!(matches!(err, FrameError::DuplicateColumn { .. }));
    assert_eq!(ColumnFrame::column_names(&df), vec!["cid", "cln"]);
}

#[test]
fn identity_names_produce_no_renames() {
    let dict = FieldDictionary::pbdb();
    let mut df = test_df(vec![("lat", vec!["1.0"]), ("lng", vec!["2.0"])]);
    let renames = dict
        .translate_frame_in_place(&mut df, Direction::CompactToVerbose)
        .unwrap();
    assert!(renames.is_empty());
}
