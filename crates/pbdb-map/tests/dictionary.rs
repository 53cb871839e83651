use pbdb_map::FieldDictionary;
use pbdb_model::{DictionaryError, Direction, ErrorKind, FieldInfo};

#[test]
fn every_compact_code_reverse_resolves() {
    let dict = FieldDictionary::pbdb();
    for entry in dict.entries() {
        let compact = dict
            .verbose_to_compact(&entry.verbose_name)
            .expect("verbose name should reverse-resolve");
        assert_eq!(dict.compact_to_verbose(compact), Some(entry.verbose_name.as_str()));
    }
}

#[test]
fn pass_through_unknown_column() {
    let dict = FieldDictionary::pbdb();
    let out = dict.translate_columns(&["unknown_xyz"], Direction::CompactToVerbose);
    assert_eq!(out, vec!["unknown_xyz"]);
}

#[test]
fn translate_keeps_length_and_order() {
    let dict = FieldDictionary::pbdb();
    let columns = ["eag", "foo", "tna", "lag", "oid"];
    let out = dict.translate_columns(&columns, Direction::CompactToVerbose);
    assert_eq!(
        out,
        vec!["max_ma", "foo", "accepted_name", "min_ma", "occurrence_id"]
    );
    let back = dict.translate_columns(&out, Direction::VerboseToCompact);
    assert_eq!(back, columns);
}

#[test]
fn named_direction_rejects_sideways() {
    let dict = FieldDictionary::pbdb();
    let err = dict
        .translate_columns_named(&["tna"], "sideways")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(matches!(err, DictionaryError::InvalidDirection { .. }));

    let ok = dict
        .translate_columns_named(&["accepted_name"], "verbose_to_compact")
        .unwrap();
    assert_eq!(ok, vec!["tna"]);
}

#[test]
fn named_direction_is_case_sensitive() {
    let dict = FieldDictionary::pbdb();
    for flag in ["COMPACT_TO_VERBOSE", "compact-to-verbose", " compact_to_verbose"] {
        let err = dict.translate_columns_named(&["tna"], flag).unwrap_err();
        assert!(
            matches!(err, DictionaryError::InvalidDirection { ref value } if value == flag),
            "{flag:?}"
        );
    }
}

#[test]
fn category_names_follow_declared_order() {
    let dict = FieldDictionary::pbdb();
    let names: Vec<&str> = dict.category_names().collect();
    let listed: Vec<String> = dict
        .list_fields_by_category()
        .into_iter()
        .map(|listing| listing.category)
        .collect();
    assert_eq!(names.len(), 8);
    assert_eq!(names, listed);
    assert_eq!(names.first(), Some(&"identification"));
}

#[test]
fn diversity_analysis_fields() {
    let dict = FieldDictionary::pbdb();
    let fields = dict.fields_for_analysis("diversity_analysis").unwrap();
    assert_eq!(fields.len(), 13);
    assert!(fields.iter().any(|f| f == "accepted_name"));
    assert!(fields.iter().any(|f| f == "max_ma"));
}

#[test]
fn analysis_result_is_a_copy() {
    let dict = FieldDictionary::pbdb();
    let mut fields = dict.fields_for_analysis("taphonomy").unwrap();
    fields.clear();
    assert_eq!(dict.fields_for_analysis("taphonomy").unwrap().len(), 7);
}

#[test]
fn unknown_analysis_lists_available() {
    let dict = FieldDictionary::pbdb();
    let err = dict.fields_for_analysis("nonexistent_key").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err.available_analyses().to_vec(),
        vec![
            "diversity_analysis",
            "paleogeography",
            "paleoecology",
            "taphonomy",
            "temporal_patterns",
            "sampling_bias",
        ]
    );
}

#[test]
fn describe_compact_code() {
    let dict = FieldDictionary::pbdb();
    assert_eq!(
        dict.describe_field("tna").unwrap(),
        FieldInfo {
            compact_code: "tna".to_string(),
            verbose_name: "accepted_name".to_string(),
            category: Some("taxonomy".to_string()),
        }
    );
}

#[test]
fn describe_verbose_name() {
    let dict = FieldDictionary::pbdb();
    let info = dict.describe_field("paleolat").unwrap();
    assert_eq!(info.compact_code, "pla");
    assert_eq!(info.category.as_deref(), Some("spatial"));
}

#[test]
fn describe_uses_first_category() {
    let dict = FieldDictionary::pbdb();
    let info = dict.describe_field("env").unwrap();
    assert_eq!(info.verbose_name, "environment");
    assert_eq!(info.category.as_deref(), Some("geological"));
}

#[test]
fn describe_field_without_category() {
    let dict = FieldDictionary::pbdb();
    let info = dict.describe_field("cmt").unwrap();
    assert_eq!(info.verbose_name, "comments");
    assert!(info.category.is_none());
}

#[test]
fn describe_unknown_field() {
    let dict = FieldDictionary::pbdb();
    let err = dict.describe_field("not_a_real_field").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err,
        DictionaryError::UnknownField {
            name: "not_a_real_field".to_string()
        }
    );
}

#[test]
fn categories_in_declared_order() {
    let dict = FieldDictionary::pbdb();
    let listing = dict.list_fields_by_category();
    let names: Vec<&str> = listing.iter().map(|l| l.category.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "identification",
            "taxonomy",
            "temporal",
            "spatial",
            "geological",
            "ecology",
            "preservation",
            "abundance",
        ]
    );
    assert_eq!(listing, dict.list_fields_by_category());
    assert_eq!(listing[1].fields.len(), 8);
    assert_eq!(listing[3].fields.len(), 7);
}

#[test]
fn category_listing_marks_unmapped_names() {
    let dict = FieldDictionary::pbdb();
    let listing = dict.list_fields_by_category();
    let identification = &listing[0];
    assert_eq!(identification.fields[0].compact_or_marker(), "oid");
    assert_eq!(identification.fields[1].verbose_name, "collection_id");
    assert_eq!(identification.fields[1].compact_or_marker(), "N/A");

    // `cny` was reassigned to collectors, so county has no code.
    let spatial = &listing[3];
    let county = spatial
        .fields
        .iter()
        .find(|f| f.verbose_name == "county")
        .unwrap();
    assert!(county.compact_code.is_none());
}

#[test]
fn duplicate_literal_entries_resolve_last_wins() {
    let dict = FieldDictionary::pbdb();
    assert_eq!(dict.compact_to_verbose("fmn"), Some("formation"));
    assert_eq!(dict.compact_to_verbose("cln"), Some("collection_no"));
    assert_eq!(dict.compact_to_verbose("cny"), Some("collectors"));
    assert_eq!(dict.verbose_to_compact("collection_no"), Some("cln"));
    assert_eq!(dict.verbose_to_compact("family_no"), None);

    let info = dict.describe_field("collection_no").unwrap();
    assert_eq!(info.compact_code, "cln");
}

#[test]
fn stats_and_diagnostics_for_builtin() {
    let dict = FieldDictionary::pbdb();
    let stats = dict.stats();
    assert_eq!(stats.literal_entry_count, 98);
    assert_eq!(stats.field_count, 95);
    assert_eq!(stats.reverse_count, 94);
    assert_eq!(stats.category_count, 8);
    assert_eq!(stats.analysis_count, 6);

    let diagnostics = dict.diagnostics();
    let shadowed: Vec<&str> = diagnostics
        .shadowed_codes
        .iter()
        .map(|s| s.compact_code.as_str())
        .collect();
    assert_eq!(shadowed, vec!["fmn", "cln", "cny"]);
    assert_eq!(diagnostics.reverse_collisions.len(), 1);
    assert_eq!(diagnostics.reverse_collisions[0].verbose_name, "collection_no");
    assert_eq!(diagnostics.reverse_collisions[0].dropped, "cid");
    assert_eq!(diagnostics.reverse_collisions[0].kept, "cln");
    assert!(
        diagnostics
            .unmapped_category_fields
            .contains(&("temporal".to_string(), "mid_ma".to_string()))
    );
    assert!(
        diagnostics
            .unmapped_analysis_fields
            .contains(&("diversity_analysis".to_string(), "collection_id".to_string()))
    );
}

#[test]
fn dictionary_is_shareable_across_threads() {
    let dict = std::sync::Arc::new(FieldDictionary::pbdb());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dict = std::sync::Arc::clone(&dict);
            std::thread::spawn(move || dict.describe_field("tna").map(|info| info.verbose_name))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "accepted_name");
    }
}
