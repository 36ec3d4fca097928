use crate::page::Region;

/// Returns the text of the first paragraph that has any visible text
///
/// `None` means the article simply has no summary paragraph, which is a
/// normal outcome for list and redirect pages.
pub fn summarize(region: &Region<'_>) -> Option<String> {
    region
        .find_all("p")
        .into_iter()
        .map(|paragraph| paragraph.text().trim().to_string())
        .find(|text| !text.is_empty())
}
