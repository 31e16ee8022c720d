use std::sync::LazyLock;

use regex::{Matches, Regex};

// Runs of word characters (letters, digits, underscore) and apostrophes, or
// runs of punctuation. Whitespace separates tokens and is never emitted.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w']+|[^\w\s']+").unwrap());

/// Lazy, single-pass token stream over one string.
pub struct Tokens<'t> {
    inner: Matches<'static, 't>,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| m.as_str())
    }
}

/// Split `text` into word and punctuation tokens, left to right.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        inner: TOKEN_RE.find_iter(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<&str> {
        tokenize(text).collect()
    }

    #[test]
    fn words_and_punctuation() {
        assert_eq!(tokens("Hamburger? hamburger!"), vec!["Hamburger", "?", "hamburger", "!"]);
    }

    #[test]
    fn punctuation_runs_group() {
        assert_eq!(tokens("wait...what?!"), vec!["wait", "...", "what", "?!"]);
    }

    #[test]
    fn digits_and_apostrophes_stay_in_word() {
        assert_eq!(tokens("it's 2019 b2b"), vec!["it's", "2019", "b2b"]);
    }

    #[test]
    fn unicode_letters() {
        assert_eq!(tokens("Crème brûlée, façade"), vec!["Crème", "brûlée", ",", "façade"]);
    }

    #[test]
    fn whitespace_only() {
        assert!(tokens(" \t\n ").is_empty());
        assert!(tokens("").is_empty());
    }
}
