use crate::detectors::{company, role, salary};
use crate::models::candidate::{CandidateSource, CompanyCandidate};
use crate::models::JobRecord;
use crate::page::Page;
use crate::parsers::{SiteParser, base};

/// Fallback adapter for unknown boards and company career pages. Instead
/// of trusting one selector list it pools candidates from every company
/// strategy and lets arbitration pick the winner.
pub struct GenericParser;

const META_SELECTORS: &[&str] = &[
    r#"meta[property="og:site_name"]"#,
    r#"meta[name="author"]"#,
    r#"meta[name="publisher"]"#,
    r#"meta[property="og:title"]"#,
];

const JOB_CONTENT_KEYWORDS: &[&str] = &[
    "job description",
    "responsibilities",
    "requirements",
    "qualifications",
    "skills required",
    "experience",
    "education",
    "benefits",
    "salary",
    "employment type",
    "full time",
    "part time",
    "remote",
    "on-site",
];

impl SiteParser for GenericParser {
    fn site_name(&self) -> &'static str {
        "Generic"
    }

    fn url_patterns(&self) -> &'static [&'static str] {
        &["*"]
    }

    /// Count independent "this looks like a job posting" signals and
    /// require at least two.
    fn is_valid_job_page(&self, page: &Page) -> bool {
        let title = page.title().to_lowercase();
        let url = page.url().to_lowercase();
        let body = page.body_text().to_lowercase();

        let signals = [
            title.contains("job"),
            title.contains("career"),
            title.contains("position"),
            url.contains("job"),
            url.contains("career"),
            url.contains("position"),
            page.has_match(r#"[data-testid*="job"], [class*="job"], [id*="job"]"#),
            body.contains("apply now"),
            body.contains("apply for"),
            JOB_CONTENT_KEYWORDS.iter().any(|kw| body.contains(kw)),
        ];

        signals.iter().filter(|s| **s).count() >= 2
    }

    fn parse(&self, page: &Page) -> JobRecord {
        let mut record = base::default_record(page, self.site_name());
        record.company_name = self.smart_extract_company(page);
        record.role = self.smart_extract_role(page);
        record.salary = self.smart_extract_salary(page);
        record.notes = "Auto-extracted (please verify)".to_string();
        record
    }
}

impl GenericParser {
    /// Pool every company signal into one candidate list and arbitrate.
    fn smart_extract_company(&self, page: &Page) -> String {
        let mut candidates: Vec<CompanyCandidate> = Vec::new();

        if let Some(c) = company::extract_from_json_ld(page) {
            candidates.push(c);
        }
        if let Some(c) = company::extract_from_subdomain(page.url()) {
            candidates.push(c);
        }

        candidates.extend(company::extract_from_context_patterns(page.body_text()));
        candidates.extend(company::extract_by_frequency(page));

        // Single-shot structural strategies, each at its own confidence tier.
        let structural = [
            (
                base::extract_by_selectors(page, base::COMMON_COMPANY_SELECTORS),
                CandidateSource::Selector,
                90,
            ),
            (self.extract_from_meta_tags(page), CandidateSource::Meta, 80),
            (base::extract_from_page_title(page), CandidateSource::Title, 70),
            (base::extract_from_breadcrumbs(page), CandidateSource::Title, 60),
            (self.extract_from_logo_alt(page), CandidateSource::Selector, 50),
            (base::extract_from_url_domain(page), CandidateSource::Url, 30),
        ];

        for (name, source, confidence) in structural {
            let name = base::clean_text(&name);
            if name.len() > 1 && !company::is_ats_platform_name(&name) {
                candidates.push(CompanyCandidate {
                    name,
                    frequency: 1,
                    source,
                    confidence,
                });
            }
        }

        company::select_best_candidate(&candidates)
    }

    /// Collect plausible title strings and let the role detector rank them.
    fn smart_extract_role(&self, page: &Page) -> String {
        let mut candidates: Vec<String> = Vec::new();

        candidates.extend(page.select_all_texts("h1"));
        // First segment of the page title ("Senior Engineer | Acme").
        if let Some(first) = page.title().split(['|', '-', '–']).next() {
            candidates.push(first.trim().to_string());
        }
        candidates.push(base::extract_by_selectors(page, base::COMMON_TITLE_SELECTORS));
        candidates.extend(page.select_all_texts("h2"));
        candidates.extend(page.select_all_texts("h3"));

        role::extract_best_role(&candidates)
            .map(|m| base::clean_text(&m.text))
            .unwrap_or_default()
    }

    fn smart_extract_salary(&self, page: &Page) -> String {
        let detected = salary::extract_salary_string(page);
        if !detected.is_empty() {
            return base::clean_text(&detected);
        }

        let from_selectors = base::extract_by_selectors(page, base::COMMON_SALARY_SELECTORS);
        if !from_selectors.is_empty() {
            return base::clean_text(&from_selectors);
        }

        for line in page.body_text().lines() {
            let found = base::extract_salary_from_text(line);
            if !found.is_empty() {
                return base::clean_text(&found);
            }
        }

        String::new()
    }

    fn extract_from_meta_tags(&self, page: &Page) -> String {
        for selector in META_SELECTORS {
            if let Some(content) = page.meta_content(selector) {
                return content;
            }
        }
        String::new()
    }

    fn extract_from_logo_alt(&self, page: &Page) -> String {
        let alts = page.select_all_attrs(
            r#"img[alt*="logo"], img[src*="logo"], img[class*="logo"]"#,
            "alt",
        );
        for alt in alts {
            if alt.to_lowercase().contains("logo") {
                let name = alt
                    .split_whitespace()
                    .filter(|w| !w.eq_ignore_ascii_case("logo"))
                    .collect::<Vec<_>>()
                    .join(" ");
                if name.len() > 1 {
                    return name;
                }
            }
        }
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_page(html: &str) -> Page {
        Page::new("https://example.com/careers/backend-engineer", html)
    }

    #[test]
    fn validity_needs_two_signals() {
        // URL has "career" but nothing else job-ish
        let sparse = Page::new(
            "https://example.com/careers",
            "<html><head><title>Welcome</title></head><body><p>hello</p></body></html>",
        );
        assert!(!GenericParser.is_valid_job_page(&sparse));

        let rich = job_page(
            "<html><head><title>Backend Engineer Job</title></head>\
             <body><p>Apply now! Responsibilities include shipping.</p></body></html>",
        );
        assert!(GenericParser.is_valid_job_page(&rich));
    }

    #[test]
    fn role_comes_from_headers() {
        let page = job_page(
            "<html><head><title>Openings</title></head><body>\
             <h1>Senior Backend Engineer</h1><p>apply now</p></body></html>",
        );
        assert_eq!(
            GenericParser.smart_extract_role(&page),
            "Senior Backend Engineer"
        );
    }

    #[test]
    fn company_from_meta_site_name() {
        let page = job_page(
            r#"<html><head><title>Jobs</title>
            <meta property="og:site_name" content="Initech">
            </head><body><p>apply now for a job at our company</p></body></html>"#,
        );
        assert_eq!(GenericParser.smart_extract_company(&page), "Initech");
    }

    #[test]
    fn logo_alt_drops_the_word_logo() {
        let page = job_page(
            r#"<html><body><img alt="Initech logo" src="/x.png"></body></html>"#,
        );
        assert_eq!(GenericParser.extract_from_logo_alt(&page), "Initech");
    }

    #[test]
    fn parse_never_panics_on_empty_page() {
        let page = Page::new("https://example.com", "<html><body></body></html>");
        let record = GenericParser.parse(&page);
        assert_eq!(record.link_to_job_req, "https://example.com");
        assert_eq!(record.role, "");
    }
}
