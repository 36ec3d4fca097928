use crate::config::SourceConfig;
use crate::page::{Document, Region};

/// Finds the article body inside a page
///
/// MediaWiki skins wrap the rendered article either in a `div` carrying the
/// parser output class, or (older skins) in a `div` with the content id.
#[derive(Debug, Clone)]
pub struct ContentLocator {
    content_class: String,
    content_id: String,
}

impl ContentLocator {
    pub fn new(content_class: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            content_class: content_class.into(),
            content_id: content_id.into(),
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(&config.content_class, &config.content_id)
    }

    /// Returns the main content region, trying the class before the id
    pub fn locate<'d>(&self, doc: &'d Document) -> Option<Region<'d>> {
        if let Some(region) = doc.find_by_class("div", &self.content_class) {
            return Some(region);
        }

        let region = doc.find_by_id("div", &self.content_id);
        if region.is_none() {
            tracing::debug!(
                "No div with class '{}' or id '{}'",
                self.content_class,
                self.content_id
            );
        }
        region
    }
}

impl Default for ContentLocator {
    fn default() -> Self {
        Self::from_config(&SourceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_by_class() {
        let doc = Document::parse(
            r#"<div id="mw-content-text"><div class="mw-parser-output"><p>Body</p></div></div>"#,
        );
        let region = ContentLocator::default().locate(&doc).unwrap();
        assert_eq!(region.attr("class"), Some("mw-parser-output"));
    }

    #[test]
    fn test_locate_falls_back_to_id() {
        let doc = Document::parse(r#"<div id="mw-content-text"><p>Body</p></div>"#);
        let region = ContentLocator::default().locate(&doc).unwrap();
        assert_eq!(region.attr("id"), Some("mw-content-text"));
    }

    #[test]
    fn test_locate_absent() {
        let doc = Document::parse(r#"<div class="content"><p>Body</p></div>"#);
        assert!(ContentLocator::default().locate(&doc).is_none());
    }

    #[test]
    fn test_locate_ignores_non_div_elements() {
        let doc = Document::parse(r#"<section class="mw-parser-output"><p>Body</p></section>"#);
        assert!(ContentLocator::default().locate(&doc).is_none());
    }

    #[test]
    fn test_custom_markers() {
        let doc = Document::parse(r#"<div class="article"><p>Body</p></div>"#);
        let locator = ContentLocator::new("article", "content");
        assert!(locator.locate(&doc).is_some());
    }
}
