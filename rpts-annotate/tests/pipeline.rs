use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::*;

use rpts_annotate::{AnnotatedHits, EnrichWithFamilies, FamilyTable, MissingReason, TypeKey};
use rpts_core::models::{FamilyMap, HitSet};
use rpts_core::schema::TYPED_COLUMNS;
use rpts_core::{Delimiter, HitsSchema};
use rpts_io::{load_families, load_hits};

fn data_path(kind: &str, file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data")
        .join(kind)
        .join(file_name)
}

#[fixture]
fn dummy_hits() -> HitSet {
    load_hits(data_path("hits", "dummy.hits"), &HitsSchema::default()).unwrap()
}

#[fixture]
fn dummy_families() -> FamilyMap {
    load_families(data_path("families", "dummy.json")).unwrap()
}

#[fixture]
fn annotated(dummy_hits: HitSet, dummy_families: FamilyMap) -> AnnotatedHits {
    dummy_hits.enrich(&dummy_families)
}

#[rstest]
fn test_scenario_from_files() {
    let schema = HitsSchema::new(TYPED_COLUMNS, Delimiter::Tab);
    let hits = load_hits(data_path("hits", "scenario.hits"), &schema).unwrap();
    let families = load_families(data_path("families", "scenario.json")).unwrap();

    let annotated = hits.enrich(&families);

    let summary: Vec<(u64, Option<&str>, Option<&str>)> = annotated
        .iter()
        .map(|r| (r.ali_length, r.repeat_type_name(), r.repeat_subtype_name()))
        .collect();

    assert_eq!(
        summary,
        vec![(101, Some("LTR"), Some("Gypsy")), (51, None, None)]
    );
}

#[rstest]
fn test_alignment_length_matches_coordinates(annotated: AnnotatedHits) {
    for row in &annotated {
        let expected = (row.hit.ali_en - row.hit.ali_st).unsigned_abs() + 1;
        assert_eq!(row.ali_length, expected);
        assert!(row.ali_length >= 1);
    }
}

#[rstest]
fn test_labels_are_present_together(annotated: AnnotatedHits) {
    for row in &annotated {
        assert_eq!(
            row.repeat_type_name().is_some(),
            row.repeat_subtype_name().is_some()
        );
    }
}

#[rstest]
fn test_enriched_order_is_input_order(dummy_hits: HitSet, annotated: AnnotatedHits) {
    let enriched: Vec<_> = annotated.iter().map(|r| &r.hit).collect();
    let original: Vec<_> = dummy_hits.iter().collect();
    assert_eq!(enriched, original);
}

#[rstest]
fn test_reload_and_enrich_is_identical(dummy_families: FamilyMap) {
    let path = data_path("hits", "dummy.hits");
    let first = load_hits(&path, &HitsSchema::default())
        .unwrap()
        .enrich(&dummy_families);
    let second = load_hits(&path, &HitsSchema::default())
        .unwrap()
        .enrich(&dummy_families);
    assert_eq!(first, second);
}

#[rstest]
fn test_filters_partition_the_table(annotated: AnnotatedHits) {
    let keys = annotated.distinct_type_keys();
    assert!(keys.contains(&TypeKey::Missing));

    let mut total = 0;
    for key in &keys {
        let part = annotated.filter_by_type_key(key);
        assert!(part.iter().all(|r| r.type_key() == *key));
        total += part.len();
    }
    assert_eq!(total, annotated.len());
}

#[rstest]
fn test_missing_enrichment_reasons(annotated: AnnotatedHits) {
    // DF000000099 is not in the family file, DF000000005 has no subtype
    assert_eq!(annotated.missing_count_for(MissingReason::UnknownAccession), 1);
    assert_eq!(annotated.missing_count_for(MissingReason::IncompleteFamily), 1);
    assert_eq!(annotated.missing_fraction(), 0.25);
}

#[rstest]
fn test_select_a_repeat_type(annotated: AnnotatedHits, dummy_families: FamilyMap) {
    let ltr_hits = annotated.filter_by_repeat_type("LTR");
    let ltr_families = FamilyTable::from(&dummy_families).filter_by_repeat_type("LTR");

    assert_eq!(ltr_hits.len(), 2);
    assert!(ltr_hits.iter().all(|r| r.hit.family_acc == "DF000000003"));

    let accessions: Vec<&str> = ltr_families.iter().map(|r| r.accession.as_str()).collect();
    assert_eq!(accessions, vec!["DF000000003", "DF000000006"]);
}
