use arrow_schema::{DataType, Field, Schema};
use std::sync::Arc;

/// Vector column width; must match the embedder's dimensionality.
pub const EMBEDDING_DIM: i32 = 3072;

/// Index schema: chunk metadata is flattened into nullable, filterable
/// columns next to the content and the embedding. `requirement_ids` is a
/// `"; "`-joined string; absent metadata is a null, not an empty string.
pub fn build_index_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new("content", DataType::Utf8, false),
        Field::new("project_name", DataType::Utf8, true),
        Field::new("feature_name", DataType::Utf8, true),
        Field::new("section_number", DataType::Utf8, true),
        Field::new("section_title", DataType::Utf8, true),
        Field::new("requirement_ids", DataType::Utf8, true),
        Field::new("document_part", DataType::Utf8, true),
        Field::new("document_type", DataType::Utf8, false),
        Field::new("chunk_id", DataType::Int32, false),
        Field::new("total_chunks", DataType::Int32, false),
        Field::new(
            "vector",
            DataType::FixedSizeList(
                Arc::new(Field::new("item", DataType::Float32, true)),
                EMBEDDING_DIM,
            ),
            true,
        ),
    ]))
}
