//! Shared extraction helpers used by every site adapter: common selector
//! lists, structural fallbacks (page title, breadcrumbs, URL domain), a
//! quick salary regex, and text cleanup.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::models::JobRecord;
use crate::page::Page;

/// Job-title selectors that work across several boards.
pub const COMMON_TITLE_SELECTORS: &[&str] = &[
    r#"h1[data-automation="job-title"]"#,
    ".jobsearch-JobInfoHeader-title",
    r#"[data-testid="job-title"]"#,
    "h1.job-title",
    ".job-title",
    "h1",
    ".topcard__title",
    ".job-details-jobs-unified-top-card__job-title",
];

pub const COMMON_COMPANY_SELECTORS: &[&str] = &[
    r#"[data-testid="company-name"]"#,
    ".jobsearch-InlineCompanyRating",
    r#"[data-automation="company-name"]"#,
    ".company-name",
    r#"a[href*="/company/"]"#,
    ".topcard__org-name-link",
    ".job-details-jobs-unified-top-card__company-name",
    r#"a[data-control-name="job_details_topcard_company_url"]"#,
];

pub const COMMON_SALARY_SELECTORS: &[&str] = &[
    r#"[data-testid="salary"]"#,
    ".salary-snippet",
    r#"[data-automation="salary"]"#,
    r#"[data-test-id="job-salary-info"]"#,
    ".salary",
    r#"[class*="salary"]"#,
];

/// Quick salary shapes for fallback text scans; the full pattern table
/// lives in the salary detector.
static QUICK_SALARY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\$[\d,]+(?:\.\d{2})?(?:\s*-\s*\$[\d,]+(?:\.\d{2})?)?(?:\s*(?:per\s+)?(?:hour|hr|year|yr|annually|month|mo))?",
        r"(?i)[\d,]+k?(?:\s*-\s*[\d,]+k?)?\s*(?:per\s+)?(?:hour|hr|year|yr|annually|month|mo)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("salary fallback pattern must compile"))
    .collect()
});

/// First non-empty text across the selector list, cleaned.
pub fn extract_by_selectors(page: &Page, selectors: &[&str]) -> String {
    page.select_first_text(selectors)
}

/// Last segment of the page <title> when split on | / - / – separators.
/// Boards commonly put the company there ("Senior Engineer - Acme").
pub fn extract_from_page_title(page: &Page) -> String {
    let parts: Vec<&str> = page
        .title()
        .split(['|', '-', '–'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() > 1 {
        parts.last().copied().unwrap_or_default().to_string()
    } else {
        String::new()
    }
}

/// Text of the last breadcrumb link, if any.
pub fn extract_from_breadcrumbs(page: &Page) -> String {
    let crumbs = page.select_all_texts(r#"[aria-label="breadcrumb"] a, .breadcrumb a, nav a"#);
    crumbs
        .into_iter()
        .filter(|c| !c.is_empty())
        .next_back()
        .unwrap_or_default()
}

/// Second-level domain token of the page URL ("jobs.acme.com" -> "acme").
pub fn extract_from_url_domain(page: &Page) -> String {
    let Ok(url) = Url::parse(page.url()) else {
        return String::new();
    };
    let Some(host) = url.host_str() else {
        return String::new();
    };
    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() > 1 {
        parts[parts.len() - 2].to_string()
    } else {
        String::new()
    }
}

/// First quick salary shape found in a text blob, verbatim.
pub fn extract_salary_from_text(text: &str) -> String {
    for pattern in QUICK_SALARY_PATTERNS.iter() {
        if let Some(m) = pattern.find(text) {
            return m.as_str().to_string();
        }
    }
    String::new()
}

/// Collapse whitespace and normalize curly quotes.
pub fn clean_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .chars()
        .map(|c| match c {
            '\u{201c}' | '\u{201d}' | '\u{2018}' | '\u{2019}' => '"',
            c => c,
        })
        .collect()
}

/// Fresh record for this page, notes tagged with the adapter that ran.
pub fn default_record(page: &Page, site_name: &str) -> JobRecord {
    let mut record = JobRecord::empty(page.url());
    record.notes = format!("Extracted using {site_name} parser");
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_takes_last_segment() {
        let page = Page::new(
            "https://example.com",
            "<html><head><title>Senior Engineer - Acme Robotics</title></head><body></body></html>",
        );
        assert_eq!(extract_from_page_title(&page), "Acme Robotics");
    }

    #[test]
    fn page_title_without_separator_is_empty() {
        let page = Page::new(
            "https://example.com",
            "<html><head><title>Careers</title></head><body></body></html>",
        );
        assert_eq!(extract_from_page_title(&page), "");
    }

    #[test]
    fn url_domain_takes_second_level() {
        let page = Page::new("https://jobs.acme.com/listing/1", "<html><body></body></html>");
        assert_eq!(extract_from_url_domain(&page), "acme");
    }

    #[test]
    fn quick_salary_scan_finds_dollar_amounts() {
        assert_eq!(
            extract_salary_from_text("Pay: $95,000 - $120,000 per year, plus equity"),
            "$95,000 - $120,000 per year"
        );
        assert_eq!(extract_salary_from_text("no numbers here"), "");
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Acme \n  Robotics  "), "Acme Robotics");
    }
}
