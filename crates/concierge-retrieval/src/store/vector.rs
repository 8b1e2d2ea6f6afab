//! Exact nearest neighbours by L2 distance.

pub fn l2_distance(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = (*x - *y) as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Indices of the `k` closest vectors, ascending by distance, ties by index.
pub fn nearest<'a>(
    query: &[f32],
    vectors: impl IntoIterator<Item = &'a [f32]>,
    k: usize,
) -> Vec<(usize, f64)> {
    let mut dists: Vec<(usize, f64)> = vectors
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i, l2_distance(query, v)))
        .collect();
    dists.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    dists.truncate(k);
    dists
}
