use std::fmt;

/// Path prefix shared by every article link on a MediaWiki site
pub const WIKI_PATH_PREFIX: &str = "/wiki/";

/// Human-readable article key, e.g. `Team Rocket`
///
/// Stored in normalized form: surrounding whitespace trimmed and underscores
/// replaced by spaces, so `Ash_Ketchum` and `Ash Ketchum` are the same phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phrase(String);

impl Phrase {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().replace('_', " "))
    }

    /// Builds a phrase from an `href`, if it is an internal article link
    ///
    /// Only targets starting with `/wiki/` qualify. Other namespaces such as
    /// `File:` pages are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use wiki_harvest::page::Phrase;
    ///
    /// assert_eq!(Phrase::from_wiki_href("/wiki/Ash_Ketchum"), Some(Phrase::new("Ash Ketchum")));
    /// assert_eq!(Phrase::from_wiki_href("https://google.com"), None);
    /// ```
    pub fn from_wiki_href(href: &str) -> Option<Self> {
        let target = href.strip_prefix(WIKI_PATH_PREFIX)?;
        let phrase = Self::new(target);
        if phrase.is_empty() {
            return None;
        }
        Some(phrase)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The article title as it appears in a wiki path (`Team_Rocket`)
    pub fn to_title(&self) -> String {
        self.0.replace(' ', "_")
    }

    /// Address of the article under `base`
    ///
    /// `<base>/wiki/<phrase with spaces replaced by underscores>`
    pub fn address(&self, base: &str) -> String {
        format!(
            "{}{}{}",
            base.trim_end_matches('/'),
            WIKI_PATH_PREFIX,
            self.to_title()
        )
    }

    /// File name used when exporting a table of this article
    ///
    /// Path separators are replaced so the export stays in its directory.
    pub fn file_stem(&self) -> String {
        self.0.replace(['/', '\\'], "_")
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phrase {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Phrase {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
