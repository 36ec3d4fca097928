//! Page model: article keys, parsed documents and the content locator

mod document;
mod locator;
mod phrase;

pub use document::{Document, Region};
pub use locator::ContentLocator;
pub use phrase::{Phrase, WIKI_PATH_PREFIX};
