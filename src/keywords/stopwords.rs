// Stop-word table for keyword extraction.
//
// This is a closed, domain-specific list of filler words from the
// note-capture vocabulary — not a general language stop list. Idea notes
// are written in Korean or English, so both spellings of each filler
// word are listed.

/// Filler words that carry no thematic signal in an idea note.
pub const STOP_WORDS: &[&str] = &[
    // Korean
    "아이디어",
    "생각",
    "방법",
    "도구",
    "시스템",
    "서비스",
    "앱",
    "웹",
    // English
    "idea",
    "thought",
    "method",
    "tool",
    "system",
    "service",
    "app",
    "web",
];

/// Check whether a lowercased token is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
