use crate::application::ports::{SearchResult, VectorStoreError};
use crate::domain::{Embedding, VectorEntry};

/// Scores every entry against `query` and returns the best `top_k`, highest first.
///
/// Sorting is stable, so entries with equal scores keep their document order. A NaN
/// score ranks as `0.0`. Every stored embedding must share the query's dimension.
pub fn rank(
    query: &Embedding,
    entries: &[VectorEntry],
    top_k: usize,
) -> Result<Vec<SearchResult>, VectorStoreError> {
    if let Some(mismatch) = entries
        .iter()
        .find(|e| e.embedding.dimensions() != query.dimensions())
    {
        return Err(VectorStoreError::DimensionMismatch {
            query: query.dimensions(),
            stored: mismatch.embedding.dimensions(),
        });
    }

    let mut scored: Vec<(usize, f32)> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let score = query.cosine_similarity(&e.embedding);
            (i, if score.is_nan() { 0.0 } else { score })
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(scored
        .into_iter()
        .take(top_k)
        .map(|(i, score)| SearchResult {
            text: entries[i].text.clone(),
            score,
        })
        .collect())
}
