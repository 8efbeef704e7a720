use std::collections::BTreeSet;

use crate::analysis::stopwords::{has_control_char, StopWords};
use crate::analysis::tokenizer;
use crate::core::error::{Error, Result};

/// A parsed query: disjoint, deduplicated plus- and minus-term sets.
/// `BTreeSet` keeps traversal order deterministic, which both the
/// sequential and parallel query engines rely on for a canonical result
/// order (see the query-representation decision in `DESIGN.md`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub plus: BTreeSet<String>,
    pub minus: BTreeSet<String>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.plus.is_empty() && self.minus.is_empty()
    }
}

/// Parses raw query text into a [`ParsedQuery`], honoring stop-word
/// discarding and minus-term validation.
pub struct QueryParser<'a> {
    stop_words: &'a StopWords,
}

impl<'a> QueryParser<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        QueryParser { stop_words }
    }

    pub fn parse(&self, raw_query: &str) -> Result<ParsedQuery> {
        let mut query = ParsedQuery::default();

        for token in tokenizer::split(raw_query) {
            let (term, is_minus) = split_minus(token)?;

            if has_control_char(term) {
                return Err(Error::invalid_text(format!(
                    "query token {token:?} contains a control character"
                )));
            }

            if self.stop_words.is_stop(term) {
                continue;
            }

            if is_minus {
                query.minus.insert(term.to_string());
            } else {
                query.plus.insert(term.to_string());
            }
        }

        // A term recorded on both sides is kept only as minus (spec rule 5).
        query.plus.retain(|term| !query.minus.contains(term));

        Ok(query)
    }
}

/// Strips a leading `-` marker from a single token, validating that the
/// stripped term is non-empty and does not itself start or end with `-`.
fn split_minus(token: &str) -> Result<(&str, bool)> {
    match token.strip_prefix('-') {
        Some(rest) => {
            if rest.is_empty() || rest.starts_with('-') || rest.ends_with('-') {
                Err(Error::invalid_query(format!(
                    "malformed minus token {token:?}"
                )))
            } else {
                Ok((rest, true))
            }
        }
        None => Ok((token, false)),
    }
}
