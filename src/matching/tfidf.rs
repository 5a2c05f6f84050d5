// TF-IDF vector space over per-career skill documents.
//
// Each career's skills are joined into one document and the whole set of
// career documents is the corpus. Weights are:
//
//   tf(t, d)  = raw count of t in d
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//   w(t, d)   = tf(t, d) * idf(t), then L2-normalized per document
//
// The +1 terms keep weights finite and non-zero for terms present in every
// document. Because every vector is unit length, cosine similarity is a
// plain dot product.
//
// Once built, the vocabulary and IDF weights never change. Queries are
// projected into the existing space; unknown terms are ignored.

use std::collections::{BTreeSet, HashMap};

use tracing::info;

use super::index::CareerSkillProfile;
use super::tokenizer::Tokenizer;

/// Sparse term vector: (column, weight) pairs sorted by column.
pub type SparseVector = Vec<(usize, f64)>;

/// A fitted TF-IDF vocabulary plus one unit vector per career.
///
/// Row `i` of the matrix always belongs to `careers()[i]`.
#[derive(Debug, Clone, Default)]
pub struct TermVectorSpace {
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    careers: Vec<String>,
    vectors: Vec<SparseVector>,
}

impl TermVectorSpace {
    /// Fit the space to career profiles using the default English tokenizer.
    pub fn build(profiles: &[CareerSkillProfile]) -> Self {
        Self::build_with_tokenizer(profiles, Tokenizer::default())
    }

    /// Fit the space with an explicit tokenizer.
    ///
    /// Zero profiles produce an empty space, which ranks every query as
    /// an empty result.
    pub fn build_with_tokenizer(profiles: &[CareerSkillProfile], tokenizer: Tokenizer) -> Self {
        let documents: Vec<Vec<String>> = profiles
            .iter()
            .map(|p| tokenizer.tokenize(&p.document))
            .collect();

        // Columns are assigned in sorted term order so the layout does not
        // depend on hash iteration order.
        let terms: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| doc.iter().map(String::as_str))
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.to_string(), col))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for doc in &documents {
            let unique: BTreeSet<usize> = doc.iter().map(|t| vocabulary[t]).collect();
            for col in unique {
                document_frequency[col] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut space = Self {
            tokenizer,
            vocabulary,
            idf,
            careers: profiles.iter().map(|p| p.career.clone()).collect(),
            vectors: Vec::with_capacity(documents.len()),
        };
        let vectors: Vec<SparseVector> = documents.iter().map(|doc| space.weigh(doc)).collect();
        space.vectors = vectors;

        info!(
            careers = space.careers.len(),
            vocabulary = space.vocabulary.len(),
            "Built TF-IDF skill space"
        );

        space
    }

    /// Project free text into the fitted space without modifying it.
    ///
    /// Returns an empty vector when no term of `text` is in the vocabulary.
    pub fn project(&self, text: &str) -> SparseVector {
        let terms = self.tokenizer.tokenize(text);
        self.weigh(&terms)
    }

    /// Career names in row order.
    pub fn careers(&self) -> &[String] {
        &self.careers
    }

    /// Unit vectors, one per career, aligned with `careers()`.
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF weight of a term, or `None` if it is out of vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&col| self.idf[col])
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    /// Turn a token list into a normalized TF-IDF vector over the fitted
    /// vocabulary.
    fn weigh(&self, terms: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in terms {
            if let Some(&col) = self.vocabulary.get(term) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(col, tf)| (col, tf * self.idf[col]))
            .collect();
        vector.sort_by_key(|&(col, _)| col);

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut vector {
                *w /= norm;
            }
        }
        vector
    }
}
