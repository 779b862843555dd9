//! Domain types shared by the ingestion pipeline and the index writer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Constant document-type tag stamped onto every chunk record.
pub const DOCUMENT_TYPE: &str = "Business Requirements Document";

/// Coarse classification of which part of a BRD a chunk belongs to.
///
/// Serialized in snake_case so the index stores the same labels the
/// document taxonomy uses (e.g. `business_requirements`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentPart {
    ExecutiveSummary,
    BusinessRequirements,
    FunctionalRequirements,
    NonFunctionalRequirements,
    TechnicalConstraints,
    Stakeholders,
    ProjectOverview,
}

impl DocumentPart {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "executive_summary",
            Self::BusinessRequirements => "business_requirements",
            Self::FunctionalRequirements => "functional_requirements",
            Self::NonFunctionalRequirements => "non_functional_requirements",
            Self::TechnicalConstraints => "technical_constraints",
            Self::Stakeholders => "stakeholders",
            Self::ProjectOverview => "project_overview",
        }
    }
}

/// Structured metadata attached to one chunk.
///
/// - `project_name`/`feature_name`: document identity, backfilled into every
///   chunk once discovered anywhere in the document
/// - `section_number`/`section_title`: per-chunk heading match
/// - `requirement_ids`: deduplicated requirement codes (e.g. `BR-SEC-001`)
/// - `document_part`: coarse section classification, unset when ambiguous
/// - `chunk_id`/`total_chunks`: position within the full chunk sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub project_name: Option<String>,
    pub feature_name: Option<String>,
    pub section_number: Option<String>,
    pub section_title: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub requirement_ids: BTreeSet<String>,
    pub document_part: Option<DocumentPart>,
    pub document_type: String,
    pub chunk_id: usize,
    pub total_chunks: usize,
}

/// The finalized unit of ingestion: cleaned text plus metadata.
///
/// `id` is the string-encoded `chunk_id`, matching the key the vector index
/// upserts on. Created once by the pipeline and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub id: String,
    pub content: String,
    pub metadata: ChunkMetadata,
}
