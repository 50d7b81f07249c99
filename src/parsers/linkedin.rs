use crate::detectors::salary;
use crate::models::JobRecord;
use crate::page::Page;
use crate::parsers::{SiteParser, base};

pub struct LinkedInParser;

const COMPANY_SELECTORS: &[&str] = &[
    ".topcard__org-name-link",
    ".job-details-jobs-unified-top-card__company-name",
    r#"a[data-control-name="job_details_topcard_company_url"]"#,
    ".topcard__flavor--black-link",
    ".jobs-unified-top-card__company-name",
    ".job-details-jobs-unified-top-card__company-name a",
];

const TITLE_SELECTORS: &[&str] = &[
    ".topcard__title",
    ".job-details-jobs-unified-top-card__job-title",
    r#"h1[data-test-id="job-title"]"#,
    ".jobs-unified-top-card__job-title",
    ".job-details-jobs-unified-top-card__job-title h1",
];

const SALARY_FALLBACK_SELECTORS: &[&str] = &[
    r#"[data-test-id="job-salary-info"]"#,
    ".job-details-preferences-and-skills__salary",
    ".jobs-description__salary",
];

impl SiteParser for LinkedInParser {
    fn site_name(&self) -> &'static str {
        "LinkedIn"
    }

    fn url_patterns(&self) -> &'static [&'static str] {
        &["linkedin.com/jobs/view", "linkedin.com/jobs/collections"]
    }

    fn is_valid_job_page(&self, page: &Page) -> bool {
        let has_title =
            page.has_match(".topcard__title, .job-details-jobs-unified-top-card__job-title");
        let has_company = page
            .has_match(".topcard__org-name-link, .job-details-jobs-unified-top-card__company-name");
        has_title || has_company
    }

    fn parse(&self, page: &Page) -> JobRecord {
        let mut record = base::default_record(page, self.site_name());
        record.company_name = self.extract_company(page);
        record.role = base::clean_text(&base::extract_by_selectors(page, TITLE_SELECTORS));
        record.salary = self.extract_salary(page);
        record
    }
}

impl LinkedInParser {
    fn extract_company(&self, page: &Page) -> String {
        let mut company = base::extract_by_selectors(page, COMPANY_SELECTORS);
        if company.is_empty() {
            company = page.select_first_text(&[r#"a[href*="/company/"]"#]);
        }
        base::clean_text(&company)
    }

    fn extract_salary(&self, page: &Page) -> String {
        let detected = salary::extract_salary_string(page);
        if !detected.is_empty() {
            return base::clean_text(&detected);
        }
        base::clean_text(&base::extract_by_selectors(page, SALARY_FALLBACK_SELECTORS))
    }
}
