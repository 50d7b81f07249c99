use url::Url;

use crate::models::{ExtractionOutcome, JobRecord};
use crate::page::Page;
use crate::parsers::{GenericParser, SiteParser, all_parsers};

/// Tokens that make a salary string plausible during soft validation.
const SALARY_TOKENS: &[&str] = &[
    "$", "k", "hour", "year", "annually", "monthly", "salary", "usd", "eur", "gbp",
];

/// Pick the adapter for this page: first site-specific adapter whose URL
/// patterns match and whose own validity check passes. Falls back to the
/// Generic adapter, which is used even when its validity check fails, so
/// dispatch always produces an adapter.
pub fn get_parser(page: &Page) -> Box<dyn SiteParser> {
    for parser in all_parsers() {
        if parser.site_name() == "Generic" {
            continue;
        }

        let matches_pattern = parser
            .url_patterns()
            .iter()
            .any(|pattern| *pattern == "*" || page.url().contains(pattern));

        if matches_pattern && parser.is_valid_job_page(page) {
            tracing::info!("Using {} parser for {}", parser.site_name(), page.url());
            return parser;
        }
    }

    let generic = GenericParser;
    if generic.is_valid_job_page(page) {
        tracing::info!("Using Generic parser for {}", page.url());
    } else {
        tracing::info!(
            "No suitable parser found for {}, using Generic parser anyway",
            page.url()
        );
    }
    Box::new(generic)
}

/// Run dispatch + extraction + soft validation. Infallible for any
/// well-formed page: worst case is an empty record plus warnings.
pub fn extract_job_data(page: &Page) -> ExtractionOutcome {
    let parser = get_parser(page);
    let record = parser.parse(page);
    let warnings = validate_record(&record);

    for warning in &warnings {
        tracing::warn!("{}: {warning}", page.url());
    }

    ExtractionOutcome {
        success: true,
        record,
        parser_used: Some(parser.site_name().to_string()),
        warnings,
        error: None,
    }
}

/// Failure outcome with an empty placeholder record; used by callers when
/// they cannot even produce a Page.
pub fn failed_outcome(url: &str, message: impl Into<String>) -> ExtractionOutcome {
    let mut record = JobRecord::empty(url);
    record.application_status = "Submitted - Pending Response".to_string();
    record.rejection_reason = "N/A".to_string();
    record.notes = "Manual entry required - extraction failed".to_string();

    ExtractionOutcome {
        success: false,
        record,
        parser_used: None,
        warnings: Vec::new(),
        error: Some(message.into()),
    }
}

/// Soft validation: advisory only, never fails the extraction.
fn validate_record(record: &JobRecord) -> Vec<String> {
    let mut warnings = Vec::new();

    if record.company_name.len() < 2 {
        warnings.push("Company name may be incomplete".to_string());
    }
    if record.role.len() < 3 {
        warnings.push("Job title may be incomplete".to_string());
    }
    if !record.link_to_job_req.is_empty() && Url::parse(&record.link_to_job_req).is_err() {
        warnings.push("Job URL may be invalid".to_string());
    }
    if !record.salary.is_empty() && !contains_salary_tokens(&record.salary) {
        warnings.push("Salary information may be inaccurate".to_string());
    }

    warnings
}

fn contains_salary_tokens(salary: &str) -> bool {
    let lower = salary.to_lowercase();
    SALARY_TOKENS.iter().any(|token| lower.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greenhouse_urls_pick_the_greenhouse_parser() {
        let page = Page::new(
            "https://boards.greenhouse.io/acme/jobs/123",
            "<html><body><h1 class=\"app-title\">Backend Engineer</h1></body></html>",
        );
        let parser = get_parser(&page);
        assert_eq!(parser.site_name(), "Greenhouse");
    }

    #[test]
    fn unknown_sites_fall_back_to_generic() {
        let page = Page::new(
            "https://smallco.example/open-roles/1",
            "<html><head><title>Data Engineer position</title></head>\
             <body><p>apply now</p></body></html>",
        );
        let parser = get_parser(&page);
        assert_eq!(parser.site_name(), "Generic");
    }

    #[test]
    fn generic_is_used_even_when_invalid() {
        let page = Page::new("https://example.com", "<html><body><p>hi</p></body></html>");
        let parser = get_parser(&page);
        assert_eq!(parser.site_name(), "Generic");
    }

    #[test]
    fn url_pattern_match_alone_is_not_enough() {
        // LinkedIn URL without LinkedIn DOM: adapter validity check fails,
        // dispatch keeps scanning and lands on Generic.
        let page = Page::new(
            "https://www.linkedin.com/jobs/view/123",
            "<html><body><p>loading...</p></body></html>",
        );
        let parser = get_parser(&page);
        assert_eq!(parser.site_name(), "Generic");
    }

    #[test]
    fn extraction_always_returns_an_outcome() {
        let page = Page::new("https://example.com", "<html><body></body></html>");
        let outcome = extract_job_data(&page);
        assert!(outcome.success);
        assert_eq!(outcome.record.link_to_job_req, "https://example.com");
        assert!(!outcome.warnings.is_empty());
    }

    #[test]
    fn validation_flags_short_fields_and_odd_salary() {
        let mut record = JobRecord::empty("https://example.com/job");
        record.company_name = "A".to_string();
        record.role = "QA".to_string();
        record.salary = "competitive".to_string();

        let warnings = validate_record(&record);
        assert!(warnings.iter().any(|w| w.contains("Company name")));
        assert!(warnings.iter().any(|w| w.contains("Job title")));
        assert!(warnings.iter().any(|w| w.contains("Salary")));
    }

    #[test]
    fn plausible_record_passes_validation() {
        let mut record = JobRecord::empty("https://example.com/job");
        record.company_name = "Acme Robotics".to_string();
        record.role = "Backend Engineer".to_string();
        record.salary = "$120k - $150k/yr".to_string();

        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn failed_outcome_has_placeholder_record() {
        let outcome = failed_outcome("https://example.com", "fetch failed");
        assert!(!outcome.success);
        assert_eq!(outcome.record.company_name, "");
        assert_eq!(outcome.error.as_deref(), Some("fetch failed"));
    }
}
