use scraper::ElementRef;

/// All descendant text of `element`, whitespace runs collapsed, trimmed.
#[must_use]
pub fn normalized_text(element: &ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
