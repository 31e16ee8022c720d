//! Tokenizing, stopword filtering and term counting.

pub mod frequency;
pub mod stopwords;
pub mod tokenizer;
