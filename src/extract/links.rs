//! Internal link extraction
//!
//! Collects the article links inside a content region, keeping only
//! `<a href="/wiki/...">` targets. Links to other namespaces (files,
//! categories, talk pages) are kept; callers filter them if they care.

use crate::page::{Phrase, Region};

/// Extracts the phrases of all internal links in document order
///
/// Duplicates are kept; deduplication is the crawler's job.
pub fn internal_links(region: &Region<'_>) -> Vec<Phrase> {
    region
        .find_all_with_attr("a", "href")
        .into_iter()
        .filter_map(|anchor| anchor.attr("href"))
        .filter_map(|href| Phrase::from_wiki_href(href.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ContentLocator, Document};

    fn links_of(html: &str) -> Vec<Phrase> {
        let doc = Document::parse(html);
        let region = ContentLocator::default().locate(&doc).unwrap();
        internal_links(&region)
    }

    #[test]
    fn test_internal_link_filter() {
        let links = links_of(
            r#"
            <div class="mw-parser-output">
                <a href="/wiki/Pikachu">Link 1</a>
                <a href="https://google.com">External</a>
                <a href="/wiki/File:Image.png">File</a>
                <a href="/wiki/Ash_Ketchum">Link 2</a>
            </div>
            "#,
        );

        assert_eq!(
            links,
            vec![
                Phrase::new("Pikachu"),
                Phrase::new("File:Image.png"),
                Phrase::new("Ash Ketchum"),
            ]
        );
    }

    #[test]
    fn test_skip_anchor_without_href() {
        let links = links_of(
            r##"<div class="mw-parser-output"><a name="top">Top</a><a href="#cite">1</a></div>"##,
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_non_article_paths() {
        let links = links_of(
            r#"<div class="mw-parser-output">
                <a href="/w/index.php?title=Pikachu&action=edit">edit</a>
                <a href="//bulbapedia.example/wiki/Pikachu">protocol relative</a>
            </div>"#,
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let links = links_of(
            r#"<div class="mw-parser-output">
                <a href="/wiki/B">b</a><a href="/wiki/A">a</a><a href="/wiki/B">b again</a>
            </div>"#,
        );
        assert_eq!(
            links,
            vec![Phrase::new("B"), Phrase::new("A"), Phrase::new("B")]
        );
    }

    #[test]
    fn test_links_outside_region_ignored() {
        let links = links_of(
            r#"<a href="/wiki/Main_Page">Home</a>
               <div class="mw-parser-output"><a href="/wiki/Eevee">Eevee</a></div>"#,
        );
        assert_eq!(links, vec![Phrase::new("Eevee")]);
    }
}
