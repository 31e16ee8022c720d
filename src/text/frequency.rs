use std::collections::HashMap;

use rayon::prelude::*;

use super::stopwords::StopwordSet;
use super::tokenizer::tokenize;

/// Term counts that remember the order in which terms were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, term: &str, count: usize) {
        match self.index.get(term) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(term.to_string(), self.entries.len());
                self.entries.push((term.to_string(), count));
            }
        }
    }

    pub fn get(&self, term: &str) -> usize {
        self.index.get(term).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Entries by descending count; equal counts keep first-seen order.
    /// `limit` of `None` returns everything.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(n) = limit {
            ranked.truncate(n);
        }
        ranked
    }

    /// Fold `other` in; its new terms land after ours, in its own order.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (term, count) in other.entries {
            self.add(&term, count);
        }
    }
}

/// Normalize one raw token: alphabetic only, lowercased, not a stopword.
fn normalize(token: &str, stopwords: &StopwordSet) -> Option<String> {
    if !token.chars().all(char::is_alphabetic) {
        return None;
    }
    let term = token.to_lowercase();
    (!stopwords.contains(&term)).then_some(term)
}

fn count_line(line: &str, stopwords: &StopwordSet, table: &mut FrequencyTable) {
    for term in tokenize(line).filter_map(|t| normalize(t, stopwords)) {
        table.add(&term, 1);
    }
}

/// Count the terms of every line, in line order.
pub fn aggregate<S: AsRef<str>>(lines: &[S], stopwords: &StopwordSet) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for line in lines {
        count_line(line.as_ref(), stopwords, &mut table);
    }
    table
}

/// Same result as [`aggregate`], with chunks of lines counted on the rayon pool.
/// Partial tables are merged in chunk order, so first-seen order is preserved.
pub fn aggregate_parallel<S: AsRef<str> + Sync>(
    lines: &[S],
    stopwords: &StopwordSet,
    chunk: usize,
) -> FrequencyTable {
    let partials: Vec<FrequencyTable> = lines
        .par_chunks(chunk.max(1))
        .map(|part| aggregate(part, stopwords))
        .collect();

    partials.into_iter().fold(FrequencyTable::new(), |mut acc, part| {
        acc.merge(part);
        acc
    })
}
