//! Feature-hashing embedding provider.
//!
//! Generates fixed-dimension vectors by hashing terms into buckets weighted by
//! term frequency. No model files, so it works in air-gapped deployments and
//! as the last resort when a neural provider is down.

use std::collections::HashMap;

use concierge_core::errors::ConciergeResult;
use concierge_core::text::tokens;
use concierge_core::traits::IEmbeddingProvider;

/// Deterministic bag-of-words embedder.
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// FNV-1a bucket for a term.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let terms: Vec<String> = tokens(text).into_iter().filter(|t| t.len() >= 2).collect();
        let mut vec = vec![0.0f32; self.dimensions];
        if terms.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for t in &terms {
            *tf.entry(t.as_str()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        for (term, count) in tf {
            // Longer terms carry more signal than short function words.
            let weight = 1.0 + (term.len() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += (count / total) * weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> ConciergeResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing-tf"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_requested_dimensions() {
        let e = HashingEmbedder::new(64);
        assert_eq!(e.embed("principal of the college").unwrap().len(), 64);
        assert_eq!(e.dimensions(), 64);
    }

    #[test]
    fn output_is_unit_length() {
        let v = HashingEmbedder::new(128).embed("head of department cse").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4);
    }

    #[test]
    fn empty_text_is_zero_vector() {
        let v = HashingEmbedder::new(16).embed("  ?? ").unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn deterministic() {
        let e = HashingEmbedder::new(32);
        assert_eq!(e.embed("library timings").unwrap(), e.embed("library timings").unwrap());
    }

    #[test]
    fn batch_matches_single() {
        let e = HashingEmbedder::new(32);
        let batch = e
            .embed_batch(&["fees".to_string(), "hostel".to_string()])
            .unwrap();
        assert_eq!(batch[1], e.embed("hostel").unwrap());
    }
}
