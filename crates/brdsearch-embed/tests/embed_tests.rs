use brdsearch_embed::{HashingEmbedder, Embedder, DEFAULT_DIM};

#[test]
fn embedder_shapes_and_determinism() {
    let embedder = HashingEmbedder::new(DEFAULT_DIM);
    let texts = vec!["hello world".to_string(), "hello world".to_string()];
    let embs = embedder.embed_batch(&texts).expect("embed_batch");
    let v1 = &embs[0];
    let v2 = &embs[1];

    assert_eq!(v1.len(), 3072, "embedding dim matches the index schema");

    // Norm approximately 1.0
    let norm: f32 = v1.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() <= 1e-3, "vector is L2-normalized (norm={norm})");

    // Deterministic for same input
    for (a, b) in v1.iter().zip(v2.iter()) {
        assert!((a - b).abs() <= 1e-6);
    }
}

#[test]
fn different_texts_embed_differently() {
    let embedder = HashingEmbedder::new(256);
    let embs = embedder
        .embed_batch(&["alpha beta".to_string(), "gamma delta".to_string()])
        .expect("embed_batch");
    assert_ne!(embs[0], embs[1]);
}

#[test]
fn empty_text_yields_zero_vector() {
    let embedder = HashingEmbedder::new(64);
    let embs = embedder.embed_batch(&[String::new()]).expect("embed_batch");
    assert_eq!(embs[0].len(), 64);
    assert!(embs[0].iter().all(|&x| x == 0.0));
}
