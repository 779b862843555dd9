/// Maps cleaned chunk text to fixed-length vectors.
///
/// `dim()` must match the vector column width of the index the embeddings
/// are written to; `embed_batch` returns one vector per input text, in
/// input order.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;
}
