//! TF-IDF weighting and sparse cosine similarity

use std::collections::{BTreeMap, HashMap, HashSet};

/// Smoothed inverse document frequency, one entry per indexed term
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    values: HashMap<String, f64>,
}

impl IdfTable {
    /// `idf = ln((n + 1) / (df + 1)) + 1` with `n = max(1, chunk count)`
    pub fn from_term_frequencies(doc_tfs: &[BTreeMap<String, usize>]) -> Self {
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tf in doc_tfs {
            let unique: HashSet<&str> = tf.keys().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = doc_tfs.len().max(1) as f64;
        let values = doc_freq
            .into_iter()
            .map(|(term, df)| {
                let idf = ((n_docs + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
                (term.to_string(), idf)
            })
            .collect();

        Self { values }
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.values.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(t, &v)| (t.as_str(), v))
    }
}

/// Sparse term weights with a cached L2 norm.
///
/// Entries are ordered by term so every sum over the vector runs in the same
/// order, which keeps scores bit-identical between builds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: BTreeMap<String, f64>,
    norm: f64,
}

impl TermVector {
    /// `(1 + ln(freq)) * idf` per term; terms without a positive weight are dropped
    pub fn weighted(tf: &BTreeMap<String, usize>, idf: &IdfTable) -> Self {
        let weights: BTreeMap<String, f64> = tf
            .iter()
            .filter(|(_, &freq)| freq > 0)
            .filter_map(|(term, &freq)| {
                let weight = (1.0 + (freq as f64).ln()) * idf.get(term).unwrap_or(0.0);
                (weight > 0.0).then(|| (term.clone(), weight))
            })
            .collect();
        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        Self { weights, norm }
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(t, &w)| (t.as_str(), w))
    }

    /// Cosine similarity; 0 when either vector has zero norm
    pub fn cosine(&self, other: &TermVector) -> f64 {
        let denom = self.norm * other.norm;
        if denom == 0.0 {
            return 0.0;
        }

        let (small, big) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: f64 = small
            .weights
            .iter()
            .filter_map(|(term, w)| big.weights.get(term).map(|v| w * v))
            .sum();

        dot / denom
    }
}
