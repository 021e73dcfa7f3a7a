// Keyword extraction — fixed-rule lexical tokenization for idea notes.

pub mod extractor;
pub mod stopwords;

pub use extractor::KeywordExtractor;
