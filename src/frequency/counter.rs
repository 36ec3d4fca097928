use crate::frequency::WordFrequencyMap;
use crate::page::Region;
use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of Unicode word characters
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Counts the words of a content region
///
/// Text pieces are trimmed and joined with single spaces, so words in adjacent
/// elements never fuse. Matching is case-insensitive.
pub fn count_words(region: &Region<'_>) -> WordFrequencyMap {
    count_text(&region.text_with_separator(" "))
}

/// Counts the words of a plain string
pub fn count_text(text: &str) -> WordFrequencyMap {
    let lowered = text.to_lowercase();
    let mut counts = WordFrequencyMap::new();
    for word in WORD.find_iter(&lowered) {
        counts.add(word.as_str(), 1);
    }
    counts
}
