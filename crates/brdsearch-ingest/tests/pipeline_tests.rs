use brdsearch_core::types::{DocumentPart, DOCUMENT_TYPE};
use brdsearch_ingest::split::RecursiveSplitter;
use brdsearch_ingest::IngestPipeline;

#[test]
fn empty_document_fails_fast() {
    let pipeline = IngestPipeline::default();
    let err = pipeline.run("   \n\n  ").expect_err("empty input is an error");
    assert!(err.to_string().contains("Empty document"), "got: {err}");
}

#[test]
fn single_chunk_brd_example() {
    let pipeline = IngestPipeline::default();
    let records = pipeline
        .run("**Project Name:** Alpha\n## 2.1 Scope\nBR-SEC-001 must be met.")
        .expect("pipeline run");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, "0");
    let meta = &record.metadata;
    assert_eq!(meta.project_name.as_deref(), Some("Alpha"));
    assert_eq!(meta.section_number.as_deref(), Some("2.1"));
    assert_eq!(meta.section_title.as_deref(), Some("Scope"));
    assert!(meta.requirement_ids.contains("BR-SEC-001"));
    assert_eq!(meta.document_part, Some(DocumentPart::BusinessRequirements));
    assert_eq!(meta.document_type, DOCUMENT_TYPE);
    assert_eq!(meta.chunk_id, 0);
    assert_eq!(meta.total_chunks, 1);

    // Content is cleaned of markdown syntax.
    assert!(!record.content.contains('#'));
    assert!(!record.content.contains("**"));
    assert!(record.content.contains("Project Name: Alpha"));
}

fn multi_chunk_document(feature_paragraph_index: usize, paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|i| {
            if i == feature_paragraph_index {
                "**Feature Name:** Phoenix rollout plan details".to_string()
            } else {
                format!("paragraph number {i} with filler words to pad length")
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[test]
fn late_feature_name_is_backfilled_into_every_chunk() {
    // One paragraph per chunk: overlap budget is smaller than any paragraph.
    let splitter = RecursiveSplitter::new(60, 10);
    let pipeline = IngestPipeline::new(splitter);
    let doc = multi_chunk_document(5, 10);
    let records = pipeline.run(&doc).expect("pipeline run");

    assert_eq!(records.len(), 10);
    for record in &records {
        assert_eq!(
            record.metadata.feature_name.as_deref(),
            Some("Phoenix rollout plan details"),
            "chunk {} missing the propagated feature name",
            record.id
        );
    }
}

#[test]
fn chunk_ids_form_a_contiguous_range() {
    let splitter = RecursiveSplitter::new(60, 10);
    let pipeline = IngestPipeline::new(splitter);
    let doc = multi_chunk_document(0, 8);
    let records = pipeline.run(&doc).expect("pipeline run");

    let total = records.len();
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.metadata.chunk_id, i);
        assert_eq!(record.metadata.total_chunks, total);
        assert_eq!(record.id, i.to_string());
        assert_eq!(record.metadata.document_type, DOCUMENT_TYPE);
    }
}

#[test]
fn chunk_without_own_heading_keeps_section_fields_unset() {
    let splitter = RecursiveSplitter::new(60, 10);
    let pipeline = IngestPipeline::new(splitter);
    let doc = multi_chunk_document(0, 4);
    let records = pipeline.run(&doc).expect("pipeline run");

    for record in records.iter().skip(1) {
        assert_eq!(record.metadata.section_number, None);
        assert_eq!(record.metadata.section_title, None);
    }
}

#[test]
fn own_extraction_wins_over_backfill() {
    let doc = "**Project Name:** Alpha\n\nmiddle filler paragraph keeping things apart\n\n**Project Name:** Omega";
    let splitter = RecursiveSplitter::new(50, 5);
    let pipeline = IngestPipeline::new(splitter);
    let records = pipeline.run(doc).expect("pipeline run");

    assert!(records.len() >= 3);
    let first = &records[0];
    let last = records.last().expect("non-empty");
    assert_eq!(first.metadata.project_name.as_deref(), Some("Alpha"));
    assert_eq!(
        last.metadata.project_name.as_deref(),
        Some("Omega"),
        "a chunk that extracts its own value keeps it"
    );
    // Chunks in between inherit the first discovered name.
    assert_eq!(records[1].metadata.project_name.as_deref(), Some("Alpha"));
}
