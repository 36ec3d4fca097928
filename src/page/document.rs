//! Narrow query layer over a parsed HTML page
//!
//! Everything else in the crate talks to pages through [`Document`] and
//! [`Region`]; only this file touches `scraper` tree types. Table extraction
//! uses `find_all`, `closest` and `children` to walk rows and cells; link
//! extraction uses `find_all_with_attr`.

use scraper::{ElementRef, Html};
use std::fmt;

/// A parsed article page
///
/// Owns the parsed tree for the duration of one fetch cycle. The tree is not
/// `Send`, so callers drop the document before awaiting anything else.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document (fragments are wrapped in `<html><body>`)
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// The whole document as a region
    pub fn root(&self) -> Region<'_> {
        Region {
            element: self.html.root_element(),
        }
    }

    /// Finds the first `tag` element whose class list contains `class`
    pub fn find_by_class(&self, tag: &str, class: &str) -> Option<Region<'_>> {
        self.root().find_by_class(tag, class)
    }

    /// Finds the first `tag` element whose id is `id`
    pub fn find_by_id(&self, tag: &str, id: &str) -> Option<Region<'_>> {
        self.root().find_by_id(tag, id)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("errors", &self.html.errors.len())
            .finish()
    }
}

/// A sub-tree of a [`Document`]
///
/// Borrows from the document it was found in.
#[derive(Clone, Copy)]
pub struct Region<'d> {
    element: ElementRef<'d>,
}

impl<'d> Region<'d> {
    /// Lowercase tag name of the region's root element
    pub fn tag_name(&self) -> &'d str {
        self.element.value().name()
    }

    /// Value of an attribute on the region's root element
    pub fn attr(&self, name: &str) -> Option<&'d str> {
        self.element.value().attr(name)
    }

    /// Finds the first descendant `tag` element carrying `class`
    pub fn find_by_class(&self, tag: &str, class: &str) -> Option<Region<'d>> {
        self.descendants(tag)
            .find(|region| region.element.value().classes().any(|c| c == class))
    }

    /// Finds the first descendant `tag` element with the given id
    pub fn find_by_id(&self, tag: &str, id: &str) -> Option<Region<'d>> {
        self.descendants(tag)
            .find(|region| region.element.value().id() == Some(id))
    }

    /// All descendant `tag` elements in document order
    ///
    /// The region's own root element is never part of the result.
    pub fn find_all(&self, tag: &str) -> Vec<Region<'d>> {
        self.descendants(tag).collect()
    }

    /// All descendant `tag` elements that carry the attribute `attr`
    pub fn find_all_with_attr(&self, tag: &str, attr: &str) -> Vec<Region<'d>> {
        self.descendants(tag)
            .filter(|region| region.attr(attr).is_some())
            .collect()
    }

    /// Direct child elements named any of `tags`, in document order
    pub fn children(&self, tags: &[&str]) -> Vec<Region<'d>> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|element| tags.contains(&element.value().name()))
            .map(|element| Region { element })
            .collect()
    }

    /// Nearest enclosing `tag` element, not counting the region itself
    pub fn closest(&self, tag: &str) -> Option<Region<'d>> {
        self.element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == tag)
            .map(|element| Region { element })
    }

    /// All text nodes of the region concatenated as-is
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Text nodes trimmed, empty ones dropped, joined with `separator`
    pub fn text_with_separator(&self, separator: &str) -> String {
        self.element
            .text()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn descendants<'t>(&self, tag: &'t str) -> impl Iterator<Item = Region<'d>> + 't
    where
        'd: 't,
    {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(move |element| element.value().name() == tag)
            .map(|element| Region { element })
    }
}

impl PartialEq for Region<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.element.id() == other.element.id()
    }
}

impl fmt::Debug for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("tag", &self.tag_name())
            .field("id", &self.attr("id"))
            .field("class", &self.attr("class"))
            .finish()
    }
}
