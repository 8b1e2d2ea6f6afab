//! BM25 Okapi keyword index.
//!
//! `idf = ln((N - n + 0.5) / (n + 0.5) + 1)`, which stays positive for terms
//! present in most documents. `k1 = 1.5`, `b = 0.75` (the Okapi defaults the
//! corpus scores were tuned against).

use std::collections::HashMap;

use concierge_core::text::tokens;

const K1: f64 = 1.5;
const B: f64 = 0.75;

pub struct Bm25Index {
    term_freqs: Vec<HashMap<String, u32>>,
    doc_lens: Vec<usize>,
    avg_doc_len: f64,
    doc_freq: HashMap<String, usize>,
}

impl Bm25Index {
    pub fn build<'a>(docs: impl IntoIterator<Item = &'a str>) -> Self {
        let mut term_freqs = Vec::new();
        let mut doc_lens = Vec::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in docs {
            let toks = tokens(doc);
            let mut tf: HashMap<String, u32> = HashMap::new();
            for t in &toks {
                *tf.entry(t.clone()).or_default() += 1;
            }
            for term in tf.keys() {
                *doc_freq.entry(term.clone()).or_default() += 1;
            }
            doc_lens.push(toks.len());
            term_freqs.push(tf);
        }

        let avg_doc_len = if doc_lens.is_empty() {
            0.0
        } else {
            doc_lens.iter().sum::<usize>() as f64 / doc_lens.len() as f64
        };

        Self {
            term_freqs,
            doc_lens,
            avg_doc_len,
            doc_freq,
        }
    }

    pub fn len(&self) -> usize {
        self.doc_lens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_lens.is_empty()
    }

    fn idf(&self, term: &str) -> f64 {
        let n = self.doc_freq.get(term).copied().unwrap_or(0) as f64;
        let total = self.len() as f64;
        ((total - n + 0.5) / (n + 0.5) + 1.0).ln()
    }

    /// Scores of every document with at least one query term. Repeated query
    /// terms count once per occurrence.
    pub fn scores(&self, query_terms: &[String]) -> HashMap<usize, f64> {
        let mut out: HashMap<usize, f64> = HashMap::new();
        if self.avg_doc_len <= 0.0 {
            return out;
        }

        for term in query_terms {
            if !self.doc_freq.contains_key(term) {
                continue;
            }
            let idf = self.idf(term);
            for (doc, tf) in self.term_freqs.iter().enumerate() {
                let Some(&f) = tf.get(term) else { continue };
                let f = f as f64;
                let norm = 1.0 - B + B * self.doc_lens[doc] as f64 / self.avg_doc_len;
                *out.entry(doc).or_default() += idf * (f * (K1 + 1.0)) / (f + K1 * norm);
            }
        }
        out.retain(|_, s| *s > 0.0);
        out
    }
}
