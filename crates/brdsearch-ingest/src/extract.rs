//! Per-chunk metadata extraction.
//!
//! Pattern matching over a chunk's raw (pre-clean) text. Every field is
//! optional; an absent field is an expected result, not an error. The
//! document-part classifier is a rule table in fixed priority order, so new
//! categories or identifier prefixes are added by extending the table.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use brdsearch_core::types::DocumentPart;

static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*{0,2}Project Name:\*{0,2}[ \t]*([^\n]+)").unwrap());
static FEATURE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*{0,2}Feature Name:\*{0,2}[ \t]*([^\n]+)").unwrap());
// Optional dotted numeric prefix (e.g. `2.1`) followed by the title.
static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,3}\s*(?:(\d+(?:\.\d+)*)\s+)?(.+)$").unwrap());
// Requirement codes, optionally pipe-delimited inside table cells.
static REQUIREMENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|?\s*((?:BR|FR|NFR)-[A-Z]+-\d+)\s*\|?").unwrap());

/// Classification rules in priority order; the first match wins. Keywords
/// match case-insensitively; identifier prefixes are case-sensitive and
/// anchored on a word boundary so an NFR code never satisfies the FR rule.
static PART_RULES: LazyLock<Vec<(Regex, DocumentPart)>> = LazyLock::new(|| {
    [
        (r"(?i:Executive\s+Summary)", DocumentPart::ExecutiveSummary),
        (
            r"(?i:Business\s+Requirements)|\bBR-[A-Z]+-\d+",
            DocumentPart::BusinessRequirements,
        ),
        (
            r"(?i:Functional\s+Requirements)|\bFR-[A-Z]+-\d+",
            DocumentPart::FunctionalRequirements,
        ),
        (
            r"(?i:Non-Functional\s+Requirements)|\bNFR-[A-Z]+-\d+",
            DocumentPart::NonFunctionalRequirements,
        ),
        (
            r"(?i:Technical\s+Constraints)",
            DocumentPart::TechnicalConstraints,
        ),
        (r"(?i:Stakeholders)", DocumentPart::Stakeholders),
        (r"(?i:Project\s+Overview)", DocumentPart::ProjectOverview),
    ]
    .into_iter()
    .map(|(pattern, part)| (Regex::new(pattern).expect("valid part pattern"), part))
    .collect()
});

/// Fields derivable from a single chunk in isolation.
#[derive(Debug, Default, Clone)]
pub struct ExtractedMetadata {
    pub project_name: Option<String>,
    pub feature_name: Option<String>,
    pub section_number: Option<String>,
    pub section_title: Option<String>,
    pub requirement_ids: BTreeSet<String>,
    pub document_part: Option<DocumentPart>,
}

/// Extract whatever metadata this chunk yields on its own.
pub fn extract_metadata(text: &str) -> ExtractedMetadata {
    let mut meta = ExtractedMetadata::default();

    if let Some(caps) = PROJECT_NAME.captures(text) {
        meta.project_name = caps.get(1).map(|m| m.as_str().trim().to_string());
    }
    if let Some(caps) = FEATURE_NAME.captures(text) {
        meta.feature_name = caps.get(1).map(|m| m.as_str().trim().to_string());
    }

    if let Some(caps) = SECTION_HEADING.captures(text) {
        if let Some(number) = caps.get(1) {
            meta.section_number = Some(number.as_str().to_string());
        }
        meta.section_title = caps.get(2).map(|m| m.as_str().trim().to_string());
    }

    meta.requirement_ids = REQUIREMENT_ID
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect();

    meta.document_part = PART_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, part)| *part);

    meta
}
