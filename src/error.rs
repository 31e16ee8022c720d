use std::fmt;

use thiserror::Error;

/// Why a page was rejected as markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Nothing but whitespace was received.
    Empty,
    /// The document has no `<title>` element.
    NoTitle,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Empty => f.write_str("document is empty"),
            MalformedReason::NoTitle => f.write_str("document has no title element"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TermFreqError {
    /// Page could not be fetched. `status` is set only when the server answered.
    #[error("{}", retrieval_message(.url, .status))]
    Retrieval { url: String, status: Option<u16> },

    #[error("Given web page is not a valid html file")]
    MalformedDocument { reason: MalformedReason },
}

impl TermFreqError {
    pub fn malformed(reason: MalformedReason) -> Self {
        TermFreqError::MalformedDocument { reason }
    }
}

fn retrieval_message(url: &str, status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("Remote server returned {} code for {}", code, url),
        None => format!("Exception occurred while loading {}", url),
    }
}

pub type Result<T> = std::result::Result<T, TermFreqError>;
