use std::{env, fs, path::PathBuf};

use brdsearch_core::config::Config;
use brdsearch_core::error::Error;
use brdsearch_embed::get_default_embedder;
use brdsearch_ingest::IngestPipeline;
use brdsearch_vector::schema::EMBEDDING_DIM;
use brdsearch_vector::IndexWriter;

fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let args: Vec<String> = env::args().skip(1).collect();
    let mut doc_path = None;
    let mut dry_run = false;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--dry-run" | "-n" => dry_run = true,
            _ if !args[i].starts_with('-') => doc_path = Some(PathBuf::from(&args[i])),
            _ => {}
        }
        i += 1;
    }
    let doc_path = doc_path.unwrap_or_else(|| {
        let p: String = config.get_or("data.brd_path", "data/brd-example-001.md".to_string());
        PathBuf::from(p)
    });

    println!("BRD Ingestion\n=============");
    println!("Document: {}", doc_path.display());
    if dry_run {
        println!("⚠️  Dry run: chunks will not be embedded or uploaded");
    }

    let raw = fs::read_to_string(&doc_path)
        .map_err(|e| Error::NotFound(format!("{}: {}", doc_path.display(), e)))?;

    let pipeline = IngestPipeline::default();
    let records = pipeline.run(&raw)?;
    println!("Split document into {} chunks", records.len());

    if dry_run {
        for record in &records {
            println!(
                "chunk {}: part={} section={}",
                record.id,
                record
                    .metadata
                    .document_part
                    .map(|p| p.as_str())
                    .unwrap_or("-"),
                record.metadata.section_title.as_deref().unwrap_or("-"),
            );
        }
        return Ok(());
    }

    let embedder = get_default_embedder()?;
    if embedder.dim() != EMBEDDING_DIM as usize {
        return Err(Error::InvalidConfig(format!(
            "embedder dim {} does not match index schema dim {}",
            embedder.dim(),
            EMBEDDING_DIM
        ))
        .into());
    }
    let texts: Vec<String> = records.iter().map(|r| r.content.clone()).collect();
    let embeddings = embedder.embed_batch(&texts)?;

    let index_dir = PathBuf::from(
        config.get_or("data.lancedb_index_dir", "data/indexes/lancedb".to_string()),
    );
    fs::create_dir_all(&index_dir)?;
    let table_name: String = config.get_or("data.index_table", "brd_chunks".to_string());

    let rt = tokio::runtime::Runtime::new()?;
    let writer = rt.block_on(async { IndexWriter::new(&index_dir, &table_name).await })?;
    rt.block_on(async { writer.upsert(&records, &embeddings).await })?;

    println!(
        "\n✅ Successfully uploaded {} documents to the search index",
        records.len()
    );
    Ok(())
}
