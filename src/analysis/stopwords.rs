use std::collections::BTreeSet;

use crate::core::error::{Error, Result};

/// Immutable, ordered set of stop words. Ordered (`BTreeSet`) rather than
/// hashed so lookups and iteration are deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    terms: BTreeSet<String>,
}

impl StopWords {
    /// Builds a stop-word set from whitespace-separated text, e.g. `"in the
    /// and"`. Fails if any resulting word is empty or contains a control
    /// character (byte 0..=31).
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_terms(text.split_whitespace())
    }

    /// Builds a stop-word set from an explicit sequence of terms.
    pub fn from_terms<'a, I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = BTreeSet::new();
        for term in terms {
            if term.is_empty() {
                continue;
            }
            if has_control_char(term) {
                return Err(Error::invalid_text(format!(
                    "stop word {term:?} contains a control character"
                )));
            }
            set.insert(term.to_string());
        }
        Ok(StopWords { terms: set })
    }

    pub fn is_stop(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Filters `tokens`, keeping only non-stop entries in their original
    /// order.
    pub fn filter<'a>(&self, tokens: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        tokens.into_iter().filter(|t| !self.is_stop(t)).collect()
    }
}

pub fn has_control_char(text: &str) -> bool {
    text.bytes().any(|b| b <= 31)
}
