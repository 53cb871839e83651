//! Built-in PBDB occurrence vocabulary.
//!
//! Field codes follow the data1.2 `occs/list` documentation. The table is kept
//! exactly as authored, including codes that appear twice (`cln`, `fmn`, `cny`);
//! [`FieldDictionary::pbdb`](crate::FieldDictionary::pbdb) resolves those with
//! the later value and reports them through diagnostics.

/// Compact code to verbose name, in authored order.
pub const FIELD_TABLE: &[(&str, &str)] = &[
    // Identification
    ("oid", "occurrence_id"),
    ("cid", "collection_no"),
    ("ids", "species_name"),
    ("rid", "reference_id"),
    ("eid", "early_id"),
    ("lid", "late_id"),
    ("iid", "identified_by_id"),
    ("reid", "reidentified_by_id"),
    // Taxonomy (accepted name)
    ("tna", "accepted_name"),
    ("rnk", "accepted_rank"),
    ("tid", "taxon_id"),
    ("tnr", "taxon_no"),
    ("phl", "phylum"),
    ("cll", "class"),
    ("odl", "order"),
    ("fml", "family"),
    ("gnl", "genus"),
    ("sgn", "subgenus"),
    ("phn", "phylum_no"),
    ("cln", "class_no"),
    ("odn", "order_no"),
    ("fmn", "family_no"),
    ("gnn", "genus_no"),
    // Taxonomy (original identification)
    ("idn", "identified_name"),
    ("idq", "identification_qualifier"),
    ("idr", "identified_rank"),
    // Temporal
    ("eag", "max_ma"),
    ("lag", "min_ma"),
    ("oei", "early_interval"),
    ("oli", "late_interval"),
    // Spatial
    ("lat", "lat"),
    ("lng", "lng"),
    ("pla", "paleolat"),
    ("pln", "paleolng"),
    ("gsc", "geogscale"),
    ("cc", "cc"),
    ("stp", "state"),
    ("cny", "county"),
    // Geological context
    ("fmn", "formation"),
    ("sgr", "stratigraphic_group"),
    ("mbr", "member"),
    ("lth", "lithology1"),
    ("lt2", "lithology2"),
    ("env", "environment"),
    // Taphonomy
    ("prs", "preservation"),
    ("prl", "preservation_quality"),
    // Abundance and ecology
    ("abv", "abundance_value"),
    ("abu", "abundance_unit"),
    ("lif", "life_habit"),
    ("mht", "microhabitat"),
    ("die", "diet"),
    ("vis", "vision"),
    ("loc", "locomotion"),
    ("rep", "reproduction"),
    ("ont", "ontogeny"),
    // Collection
    ("col", "collection_name"),
    ("cln", "collection_no"),
    ("prc", "collection_method"),
    ("siz", "collection_size"),
    ("cc1", "collection_coverage"),
    ("cny", "collectors"),
    ("cdt", "collection_dates"),
    // References and authorizers
    ("ref", "reference_no"),
    ("rft", "ref_type"),
    ("ati", "ref_author"),
    ("pbt", "ref_pubyr"),
    ("rfp", "ref_publication"),
    ("aut", "authorizer"),
    ("eni", "enterer"),
    ("mdf", "modifier"),
    ("ath", "authorized_by"),
    ("ent", "entered_by"),
    ("mdb", "modified_by"),
    ("crd", "created"),
    ("mdd", "modified"),
    // Specimens
    ("spe", "specimen_id"),
    ("sid", "specimen_no"),
    ("sex", "sex"),
    ("prt", "part"),
    // Research group
    ("rgp", "research_group"),
    ("prj", "project_name"),
    // Taxonomic opinions
    ("opi", "opinion_no"),
    ("ops", "opinion_status"),
    ("opb", "opinion_basis"),
    ("opr", "opinion_ref"),
    // Measurements
    ("msf", "measurement_source"),
    ("ms1", "measurement_1"),
    ("ms2", "measurement_2"),
    ("ms3", "measurement_3"),
    // Plants
    ("plo", "plant_organ"),
    ("plf", "plant_form"),
    // Trace fossils
    ("ich", "ichnofossil_type"),
    ("bhv", "behavior"),
    // Miscellaneous
    ("typ", "occurrence_type"),
    ("fld", "associated_fields"),
    ("rer", "reid_reason"),
    ("cmt", "comments"),
    ("pco", "private_comment"),
];

/// Thematic groupings of verbose names, in display order.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "identification",
        &["occurrence_id", "collection_id", "reference_id", "taxon_id"],
    ),
    (
        "taxonomy",
        &[
            "accepted_name",
            "accepted_rank",
            "phylum",
            "class",
            "order",
            "family",
            "genus",
            "subgenus",
        ],
    ),
    (
        "temporal",
        &["max_ma", "min_ma", "mid_ma", "early_interval", "late_interval"],
    ),
    (
        "spatial",
        &[
            "lat", "lng", "paleolat", "paleolng", "country", "state", "county",
        ],
    ),
    (
        "geological",
        &[
            "formation",
            "member",
            "stratigraphic_group",
            "lithology1",
            "lithology2",
            "environment",
        ],
    ),
    (
        "ecology",
        &[
            "life_habit",
            "diet",
            "locomotion",
            "environment",
            "microhabitat",
        ],
    ),
    (
        "preservation",
        &["preservation", "preservation_quality", "part"],
    ),
    ("abundance", &["abundance_value", "abundance_unit"]),
];

/// Recommended verbose fields per research workflow.
pub const ANALYSES: &[(&str, &[&str])] = &[
    (
        "diversity_analysis",
        &[
            "occurrence_id",
            "collection_id",
            "accepted_name",
            "accepted_rank",
            "phylum",
            "class",
            "order",
            "family",
            "genus",
            "max_ma",
            "min_ma",
            "early_interval",
            "late_interval",
        ],
    ),
    (
        "paleogeography",
        &[
            "occurrence_id",
            "accepted_name",
            "lat",
            "lng",
            "paleolat",
            "paleolng",
            "max_ma",
            "min_ma",
        ],
    ),
    (
        "paleoecology",
        &[
            "occurrence_id",
            "accepted_name",
            "environment",
            "life_habit",
            "diet",
            "locomotion",
            "lithology1",
            "max_ma",
            "min_ma",
        ],
    ),
    (
        "taphonomy",
        &[
            "occurrence_id",
            "accepted_name",
            "preservation",
            "preservation_quality",
            "part",
            "lithology1",
            "environment",
        ],
    ),
    (
        "temporal_patterns",
        &[
            "occurrence_id",
            "collection_id",
            "accepted_name",
            "accepted_rank",
            "max_ma",
            "min_ma",
            "early_interval",
            "late_interval",
        ],
    ),
    (
        "sampling_bias",
        &[
            "occurrence_id",
            "collection_id",
            "lat",
            "lng",
            "max_ma",
            "min_ma",
            "formation",
            "lithology1",
            "collection_method",
            "reference_id",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_table_size() {
        assert_eq!(FIELD_TABLE.len(), 98);
        assert_eq!(CATEGORIES.len(), 8);
        assert_eq!(ANALYSES.len(), 6);
    }
}
