use crate::analysis::LanguageCorpus;
use crate::frequency::WordFrequencyMap;
use std::fmt;
use std::str::FromStr;

/// Where the compared words come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Most frequent words of the collected articles
    Article,
    /// Most frequent words of the general language
    #[default]
    Language,
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "article" => Ok(Self::Article),
            "language" => Ok(Self::Language),
            other => Err(format!(
                "unknown mode '{}', expected 'article' or 'language'",
                other
            )),
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Article => write!(f, "article"),
            Self::Language => write!(f, "language"),
        }
    }
}

/// One compared word
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyComparison {
    pub word: String,
    /// Article count relative to the most frequent article word
    pub wiki_norm: f64,
    /// Language frequency relative to the most frequent language word
    pub lang_norm: f64,
    pub wiki_raw: u64,
    pub lang_freq: f64,
}

/// Compares collected word counts against a language corpus
///
/// Both sides are normalized against their own most frequent word so the
/// values land in `0.0..=1.0`.
pub fn analyze(
    counts: &WordFrequencyMap,
    corpus: &dyn LanguageCorpus,
    mode: AnalysisMode,
    count: usize,
) -> Vec<FrequencyComparison> {
    let words: Vec<String> = match mode {
        AnalysisMode::Article => counts
            .top(count)
            .into_iter()
            .map(|(word, _)| word.to_string())
            .collect(),
        AnalysisMode::Language => corpus.top_words(count),
    };

    let max_wiki = counts.max_count().unwrap_or(1).max(1) as f64;
    let max_lang = corpus
        .top_words(1)
        .first()
        .map(|word| corpus.frequency(word))
        .unwrap_or(0.0);

    words
        .into_iter()
        .map(|word| {
            let wiki_raw = counts.get(&word);
            let lang_freq = corpus.frequency(&word);
            let lang_norm = if max_lang > 0.0 {
                lang_freq / max_lang
            } else {
                0.0
            };

            FrequencyComparison {
                wiki_norm: wiki_raw as f64 / max_wiki,
                lang_norm,
                wiki_raw,
                lang_freq,
                word,
            }
        })
        .collect()
}
