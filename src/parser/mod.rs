pub mod document;
pub mod extract;

use tracing::debug;

use crate::config::PARALLEL_CHUNK;
use crate::error::Result;
use crate::text::frequency::{aggregate, aggregate_parallel, FrequencyTable};
use crate::text::stopwords::StopwordSet;
use document::Document;

/// Title and term counts for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStats {
    pub title: Option<String>,
    pub terms: FrequencyTable,
}

/// Markup → document tree → container lines → term counts.
pub fn process_page(markup: &str, stopwords: &StopwordSet) -> Result<PageStats> {
    let document = Document::parse(markup)?;
    let corpus = extract::extract(&document)?;
    debug!("Extracted {} lines of text", corpus.lines.len());

    let terms = if corpus.lines.len() > PARALLEL_CHUNK {
        aggregate_parallel(&corpus.lines, stopwords, PARALLEL_CHUNK)
    } else {
        aggregate(&corpus.lines, stopwords)
    };
    debug!("Counted {} distinct terms ({} total)", terms.len(), terms.total());

    Ok(PageStats {
        title: corpus.title,
        terms,
    })
}
