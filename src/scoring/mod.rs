/// Inverse document frequency, unsmoothed: `ln(total_docs / doc_freq)`.
/// No Laplace smoothing — a term present in every document scores exactly
/// zero, not a small positive residual.
///
/// `doc_freq` is assumed to be non-zero; callers only compute IDF for terms
/// present in the inverted index, where `doc_freq >= 1` by construction.
pub fn idf(total_docs: usize, doc_freq: usize) -> f64 {
    (total_docs as f64 / doc_freq as f64).ln()
}
