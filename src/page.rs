use scraper::{Html, Selector};

/// Read-only view of a loaded job posting page: parsed DOM plus source URL.
/// Built once per extraction call; detectors and parsers never mutate it.
pub struct Page {
    url: String,
    document: Html,
    body_text: String,
    title: String,
}

impl Page {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        let document = Html::parse_document(html);
        let body_text = collect_text(&document, "body")
            .unwrap_or_else(|| document.root_element().text().collect());
        let title = collect_text(&document, "title")
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        Self {
            url: url.into(),
            document,
            body_text,
            title,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Page <title> text, trimmed.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Concatenated text content of <body>, whitespace as in the source.
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    /// First non-empty trimmed text across an ordered selector list.
    /// Unparseable selectors are skipped, same as the original's
    /// try/catch around querySelector.
    pub fn select_first_text(&self, selectors: &[&str]) -> String {
        for sel in selectors {
            let Ok(selector) = Selector::parse(sel) else {
                continue;
            };
            for element in self.document.select(&selector) {
                let text: String = element.text().collect();
                let text = text.trim();
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
        String::new()
    }

    /// Trimmed text of every element matching the selector.
    pub fn select_all_texts(&self, sel: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(sel) else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// Value of the named attribute on every element matching the selector.
    pub fn select_all_attrs(&self, sel: &str, attr: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(sel) else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .map(|v| v.trim().to_string())
            .collect()
    }

    /// `content` attribute of the first element matching the selector.
    pub fn meta_content(&self, sel: &str) -> Option<String> {
        let selector = Selector::parse(sel).ok()?;
        self.document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Does at least one element match the selector?
    pub fn has_match(&self, sel: &str) -> bool {
        Selector::parse(sel)
            .map(|selector| self.document.select(&selector).next().is_some())
            .unwrap_or(false)
    }
}

fn collect_text(document: &Html, sel: &str) -> Option<String> {
    let selector = Selector::parse(sel).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect())
}
