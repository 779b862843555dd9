use anyhow::Result;
use arrow_array::{FixedSizeListArray, Int32Array, RecordBatch, RecordBatchIterator, StringArray};
use indicatif::{ProgressBar, ProgressStyle};
use lancedb::Connection;
use std::path::Path;
use std::sync::Arc;

use crate::schema::{build_index_schema, EMBEDDING_DIM};
use crate::table::{ensure_table, open_db};
use brdsearch_core::types::ChunkRecord;

const UPSERT_BATCH_SIZE: usize = 500;

/// Writes finalized chunk records into the LanceDB index, keyed on `id`.
pub struct IndexWriter {
    db: Connection,
    table_name: String,
}

impl IndexWriter {
    pub async fn new(db_path: &Path, table_name: &str) -> Result<Self> {
        let db = open_db(db_path.to_string_lossy().as_ref()).await?;
        Ok(Self {
            db,
            table_name: table_name.to_string(),
        })
    }

    /// Upsert records with their embeddings: rows with a matching `id` are
    /// replaced, new ids are inserted. Re-ingesting the same document is
    /// therefore idempotent.
    pub async fn upsert(&self, records: &[ChunkRecord], embeddings: &[Vec<f32>]) -> Result<()> {
        if records.is_empty() {
            println!("No records to upsert");
            return Ok(());
        }
        assert_eq!(
            records.len(),
            embeddings.len(),
            "records and embeddings length must match"
        );
        ensure_table(&self.db, &self.table_name, build_index_schema()).await?;
        println!(
            "Upserting {} records into table: {}",
            records.len(),
            self.table_name
        );
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(ProgressStyle::default_bar().template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records ({percent}%)").unwrap().progress_chars("#>-"));
        for (batch_records, batch_embeddings) in records
            .chunks(UPSERT_BATCH_SIZE)
            .zip(embeddings.chunks(UPSERT_BATCH_SIZE))
        {
            let record_batch = records_to_batch(batch_records, batch_embeddings)?;
            let schema = record_batch.schema();
            let reader = Box::new(RecordBatchIterator::new(
                vec![Ok(record_batch)].into_iter(),
                schema,
            ));
            let t = self.db.open_table(&self.table_name).execute().await?;
            let mut mi = t.merge_insert(&["id"]);
            mi.when_matched_update_all(None).when_not_matched_insert_all();
            let _ = mi.execute(reader).await?;
            pb.inc(batch_records.len() as u64);
        }
        pb.finish_with_message("upsert complete");
        Ok(())
    }

    /// Number of rows currently in the index table (0 when absent).
    pub async fn count(&self) -> Result<usize> {
        let names = self.db.table_names().execute().await?;
        if !names.contains(&self.table_name) {
            return Ok(0);
        }
        let t = self.db.open_table(&self.table_name).execute().await?;
        Ok(t.count_rows(None).await?)
    }

    /// Fetch the stored content for a given chunk id, if present.
    pub async fn get_content(&self, id: &str) -> Result<Option<String>> {
        use lancedb::query::{ExecutableQuery, QueryBase};

        let names = self.db.table_names().execute().await?;
        if !names.contains(&self.table_name) {
            return Ok(None);
        }
        let t = self.db.open_table(&self.table_name).execute().await?;
        let mut stream = t
            .query()
            .only_if(format!("id = '{}'", id.replace('\'', "''")))
            .execute()
            .await?;
        while let Some(batch) = futures::TryStreamExt::try_next(&mut stream).await? {
            if batch.num_rows() == 0 {
                continue;
            }
            let col = batch
                .column_by_name("content")
                .and_then(|c| c.as_any().downcast_ref::<StringArray>())
                .ok_or_else(|| anyhow::anyhow!("content column missing"))?;
            return Ok(Some(col.value(0).to_string()));
        }
        Ok(None)
    }
}

fn records_to_batch(records: &[ChunkRecord], embeddings: &[Vec<f32>]) -> Result<RecordBatch> {
    let schema = build_index_schema();
    let mut ids = Vec::new();
    let mut contents = Vec::new();
    let mut project_names: Vec<Option<String>> = Vec::new();
    let mut feature_names: Vec<Option<String>> = Vec::new();
    let mut section_numbers: Vec<Option<String>> = Vec::new();
    let mut section_titles: Vec<Option<String>> = Vec::new();
    let mut requirement_ids: Vec<Option<String>> = Vec::new();
    let mut document_parts: Vec<Option<String>> = Vec::new();
    let mut document_types = Vec::new();
    let mut chunk_ids = Vec::new();
    let mut total_chunks = Vec::new();
    let mut vectors: Vec<Option<Vec<Option<f32>>>> = Vec::new();
    for (record, embedding) in records.iter().zip(embeddings.iter()) {
        let m = &record.metadata;
        ids.push(record.id.clone());
        contents.push(record.content.clone());
        project_names.push(m.project_name.clone());
        feature_names.push(m.feature_name.clone());
        section_numbers.push(m.section_number.clone());
        section_titles.push(m.section_title.clone());
        requirement_ids.push(if m.requirement_ids.is_empty() {
            None
        } else {
            Some(
                m.requirement_ids
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        });
        document_parts.push(m.document_part.map(|p| p.as_str().to_string()));
        document_types.push(m.document_type.clone());
        chunk_ids.push(m.chunk_id as i32);
        total_chunks.push(m.total_chunks as i32);
        vectors.push(Some(embedding.iter().map(|&x| Some(x)).collect()));
    }
    let record_batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(ids)),
            Arc::new(StringArray::from(contents)),
            Arc::new(StringArray::from(project_names)),
            Arc::new(StringArray::from(feature_names)),
            Arc::new(StringArray::from(section_numbers)),
            Arc::new(StringArray::from(section_titles)),
            Arc::new(StringArray::from(requirement_ids)),
            Arc::new(StringArray::from(document_parts)),
            Arc::new(StringArray::from(document_types)),
            Arc::new(Int32Array::from(chunk_ids)),
            Arc::new(Int32Array::from(total_chunks)),
            Arc::new(
                FixedSizeListArray::from_iter_primitive::<arrow_array::types::Float32Type, _, _>(
                    vectors.into_iter(),
                    EMBEDDING_DIM,
                ),
            ),
        ],
    )?;
    Ok(record_batch)
}
