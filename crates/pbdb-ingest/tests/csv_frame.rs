use std::fs;

use pbdb_ingest::{CsvOptions, IngestError, read_csv_frame, write_csv_frame};
use pbdb_map::{ColumnFrame, FieldDictionary};
use pbdb_model::Direction;

#[test]
fn translate_download_and_write_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("occs_compact.csv");
    let output = dir.path().join("occs_verbose.csv");
    fs::write(
        &input,
        "oid,tna,eag,lag,note\n1001,Tyrannosaurus rex,68.0,66.0,x\n1002,Triceratops horridus,68.0,66.0,y\n",
    )
    .expect("write input");

    let dict = FieldDictionary::pbdb();
    let df = read_csv_frame(&input, CsvOptions::default()).expect("read csv");
    let mut verbose = dict
        .translate_frame(&df, Direction::CompactToVerbose)
        .expect("translate");
    write_csv_frame(&mut verbose, &output, CsvOptions::default()).expect("write csv");

    let written = fs::read_to_string(&output).expect("read output");
    let header = written.lines().next().expect("header line");
    assert_eq!(header, "occurrence_id,accepted_name,max_ma,min_ma,note");
    assert!(written.contains("Triceratops horridus"));

    let reloaded = read_csv_frame(&output, CsvOptions::default()).expect("reload");
    assert_eq!(reloaded.height(), 2);
    assert_eq!(
        ColumnFrame::column_names(&reloaded),
        vec!["occurrence_id", "accepted_name", "max_ma", "min_ma", "note"]
    );
}

#[test]
fn reads_tab_separated_download() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("occs.tsv");
    fs::write(&input, "accepted_name\tlat\nAllosaurus\t39.5\n").expect("write input");

    let df = read_csv_frame(&input, CsvOptions::for_path(&input)).expect("read tsv");
    assert_eq!(df.width(), 2);
    assert_eq!(
        ColumnFrame::column_names(&df),
        vec!["accepted_name", "lat"]
    );
}

#[test]
fn write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.csv");
    fs::write(&input, "oid\n1\n").expect("write input");
    let mut df = read_csv_frame(&input, CsvOptions::default()).expect("read csv");

    let err = write_csv_frame(
        &mut df,
        &dir.path().join("missing").join("out.csv"),
        CsvOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, IngestError::FileCreate { .. }));
}
