// Keyword extractor — turns raw note text into a bounded keyword list.
//
// The extraction rule is fixed, not learned: strip `#word` tags, blank out
// everything that isn't a word character, whitespace, or Hangul, lowercase,
// split, then drop short tokens and stop words. The first ten survivors
// (in order of first occurrence) are the note's keyword set.

use regex_lite::Regex;

use super::stopwords;

/// Maximum number of keywords kept per note.
pub const MAX_KEYWORDS: usize = 10;

/// Keyword extractor with compiled cleanup patterns.
///
/// Extraction is deterministic and side-effect free; the same content
/// always yields the same keyword list.
pub struct KeywordExtractor {
    /// How many keywords to keep after filtering
    pub max_keywords: usize,
    tag_pattern: Regex,
    non_word_pattern: Regex,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(MAX_KEYWORDS)
    }
}

impl KeywordExtractor {
    /// Build an extractor keeping up to `max_keywords` tokens.
    pub fn new(max_keywords: usize) -> Self {
        Self {
            max_keywords,
            // A tag is `#` plus word characters; the path tail of a tag
            // like `#seed/idea` survives as ordinary text.
            tag_pattern: Regex::new(r"#\w+").expect("valid pattern"),
            // Keep word characters, whitespace, and Hangul syllables;
            // everything else becomes a token boundary.
            non_word_pattern: Regex::new(r"[^\w\s가-힣]").expect("valid pattern"),
        }
    }

    /// Extract the keyword set from one note's content.
    ///
    /// Empty content, or content that is all tags and stop words, yields
    /// an empty set — never an error.
    pub fn extract(&self, content: &str) -> Vec<String> {
        let without_tags = self.tag_pattern.replace_all(content, "");
        let cleaned = self.non_word_pattern.replace_all(&without_tags, " ");

        cleaned
            .to_lowercase()
            .split_whitespace()
            // Length is measured in bytes so multi-byte Hangul tokens
            // like "학습" survive alongside 3+ letter ASCII words.
            .filter(|word| word.len() > 2 && !stopwords::is_stop_word(word))
            .map(str::to_string)
            .take(self.max_keywords)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_lowercases() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("#seed Mobile Learning platform");
        assert_eq!(keywords, vec!["mobile", "learning", "platform"]);
    }

    #[test]
    fn tag_path_tail_hits_stop_list() {
        // "#seed/idea" loses "#seed" to the tag pattern; the leftover
        // "idea" token must die as a stop word.
        let extractor = KeywordExtractor::default();
        assert!(extractor.extract("#seed/idea ").is_empty());
    }

    #[test]
    fn short_tokens_dropped_but_hangul_survives() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("an ab 학습 모바일");
        assert_eq!(keywords, vec!["학습", "모바일"]);
    }

    #[test]
    fn punctuation_is_a_boundary() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("note-taking, (fast)");
        assert_eq!(keywords, vec!["note", "taking", "fast"]);
    }

    #[test]
    fn caps_at_max_keywords() {
        let extractor = KeywordExtractor::default();
        let content = (0..15)
            .map(|i| format!("word{i:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        let keywords = extractor.extract(&content);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "word00");
        assert_eq!(keywords[9], "word09");
    }

    #[test]
    fn empty_content_yields_empty_set() {
        let extractor = KeywordExtractor::default();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   ").is_empty());
    }
}
