//! Two-pass metadata propagation and pipeline driver.
//!
//! Pass 1 is a pure fold that discovers at most two document-scoped scalars
//! (project and feature name); pass 2 is a pure map from (chunk, discovered
//! scalars) to a finalized record. No shared mutable state beyond the two
//! scalars, so pass 2 could run per-chunk in parallel if it ever mattered.

use anyhow::Result;

use brdsearch_core::error::Error;
use brdsearch_core::types::{ChunkMetadata, ChunkRecord, DOCUMENT_TYPE};

use crate::clean::clean_markdown;
use crate::extract::extract_metadata;
use crate::split::RecursiveSplitter;

pub struct IngestPipeline {
    splitter: RecursiveSplitter,
}

impl Default for IngestPipeline {
    fn default() -> Self {
        Self::new(RecursiveSplitter::default())
    }
}

impl IngestPipeline {
    pub fn new(splitter: RecursiveSplitter) -> Self {
        Self { splitter }
    }

    /// Run the full pipeline over a raw document: split, discover
    /// document-scoped identity, then finalize one immutable record per
    /// chunk with cleaned text and complete metadata.
    ///
    /// Fails fast on an empty or whitespace-only document rather than
    /// producing zero chunks.
    pub fn run(&self, document: &str) -> Result<Vec<ChunkRecord>> {
        if document.trim().is_empty() {
            return Err(Error::EmptyDocument("document contains no text".to_string()).into());
        }

        let chunks = self.splitter.split(document);

        // Pass 1: first project/feature name anywhere in the document.
        let mut project_name: Option<String> = None;
        let mut feature_name: Option<String> = None;
        for chunk in &chunks {
            let meta = extract_metadata(chunk);
            if project_name.is_none() {
                project_name = meta.project_name;
            }
            if feature_name.is_none() {
                feature_name = meta.feature_name;
            }
            if project_name.is_some() && feature_name.is_some() {
                break;
            }
        }

        // Pass 2: finalize each chunk independently.
        let total_chunks = chunks.len();
        let records = chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| {
                let extracted = extract_metadata(chunk);
                let metadata = ChunkMetadata {
                    project_name: extracted.project_name.or_else(|| project_name.clone()),
                    feature_name: extracted.feature_name.or_else(|| feature_name.clone()),
                    section_number: extracted.section_number,
                    section_title: extracted.section_title,
                    requirement_ids: extracted.requirement_ids,
                    document_part: extracted.document_part,
                    document_type: DOCUMENT_TYPE.to_string(),
                    chunk_id: i,
                    total_chunks,
                };
                ChunkRecord {
                    id: i.to_string(),
                    content: clean_markdown(chunk),
                    metadata,
                }
            })
            .collect();
        Ok(records)
    }
}
