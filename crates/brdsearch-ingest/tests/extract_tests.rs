use brdsearch_core::types::DocumentPart;
use brdsearch_ingest::extract_metadata;

#[test]
fn project_and_feature_labels_tolerate_bold_markers() {
    let meta = extract_metadata("**Project Name:** Alpha Platform\n**Feature Name:** Checkout\n");
    assert_eq!(meta.project_name.as_deref(), Some("Alpha Platform"));
    assert_eq!(meta.feature_name.as_deref(), Some("Checkout"));

    let plain = extract_metadata("Project Name: Beta\n");
    assert_eq!(plain.project_name.as_deref(), Some("Beta"));
}

#[test]
fn heading_with_dotted_prefix_splits_number_and_title() {
    let meta = extract_metadata("## 2.1 Scope\nbody text");
    assert_eq!(meta.section_number.as_deref(), Some("2.1"));
    assert_eq!(meta.section_title.as_deref(), Some("Scope"));
}

#[test]
fn heading_without_prefix_sets_only_title() {
    let meta = extract_metadata("# Introduction\nbody");
    assert_eq!(meta.section_number, None);
    assert_eq!(meta.section_title.as_deref(), Some("Introduction"));
}

#[test]
fn no_heading_leaves_section_fields_unset() {
    let meta = extract_metadata("just a paragraph of prose with no structure");
    assert_eq!(meta.section_number, None);
    assert_eq!(meta.section_title, None);
}

#[test]
fn requirement_ids_are_deduplicated() {
    let meta = extract_metadata("| BR-SEC-001 | FR-API-002 |\ntext BR-SEC-001 again NFR-PERF-010");
    let ids: Vec<&str> = meta.requirement_ids.iter().map(String::as_str).collect();
    assert_eq!(ids, vec!["BR-SEC-001", "FR-API-002", "NFR-PERF-010"]);
}

#[test]
fn document_part_priority_first_match_wins() {
    let meta = extract_metadata("Executive Summary\nBR-SEC-001 applies here");
    assert_eq!(meta.document_part, Some(DocumentPart::ExecutiveSummary));
}

#[test]
fn br_identifier_alone_classifies_business_requirements() {
    let meta = extract_metadata("BR-SEC-001 must be met.");
    assert_eq!(meta.document_part, Some(DocumentPart::BusinessRequirements));
}

#[test]
fn nfr_identifier_does_not_trip_the_fr_rule() {
    let meta = extract_metadata("latency target NFR-PERF-001 under load");
    assert_eq!(
        meta.document_part,
        Some(DocumentPart::NonFunctionalRequirements)
    );
}

#[test]
fn keyword_matching_is_case_insensitive() {
    let meta = extract_metadata("this section covers TECHNICAL CONSTRAINTS of the rollout");
    assert_eq!(meta.document_part, Some(DocumentPart::TechnicalConstraints));

    let meta = extract_metadata("key stakeholders include the PMO");
    assert_eq!(meta.document_part, Some(DocumentPart::Stakeholders));
}

#[test]
fn unclassifiable_chunk_has_no_document_part() {
    let meta = extract_metadata("nothing structured to see in this chunk");
    assert_eq!(meta.document_part, None);
}
