use crate::detectors::company;
use crate::models::JobRecord;
use crate::page::Page;
use crate::parsers::{SiteParser, base};

pub struct GreenhouseParser;

const COMPANY_SELECTORS: &[&str] = &[
    ".company-name",
    ".header-company-name",
    r#"a[href*="/company/"]"#,
    ".app-title",
];

const TITLE_SELECTORS: &[&str] = &[".app-title", "h1", ".job-title", ".header-job-title"];

const SALARY_SELECTORS: &[&str] = &[
    ".salary",
    ".compensation",
    r#"[class*="salary"]"#,
    r#"[class*="compensation"]"#,
];

impl SiteParser for GreenhouseParser {
    fn site_name(&self) -> &'static str {
        "Greenhouse"
    }

    fn url_patterns(&self) -> &'static [&'static str] {
        &["greenhouse.io", "boards.greenhouse.io"]
    }

    fn is_valid_job_page(&self, page: &Page) -> bool {
        page.has_match(".app-title, h1")
    }

    fn parse(&self, page: &Page) -> JobRecord {
        let mut record = base::default_record(page, self.site_name());
        record.company_name = self.extract_company(page);
        record.role = base::clean_text(&base::extract_by_selectors(page, TITLE_SELECTORS));
        record.salary = self.extract_salary(page);
        record
    }
}

impl GreenhouseParser {
    fn extract_company(&self, page: &Page) -> String {
        let mut name = base::extract_by_selectors(page, COMPANY_SELECTORS);

        if name.is_empty() {
            // Greenhouse boards carry the company in the subdomain.
            if let Some(candidate) = company::extract_from_subdomain(page.url()) {
                name = candidate.name;
            }
        }
        if name.is_empty() {
            name = base::extract_from_page_title(page);
        }

        base::clean_text(&name)
    }

    fn extract_salary(&self, page: &Page) -> String {
        let mut salary = base::extract_by_selectors(page, SALARY_SELECTORS);
        if salary.is_empty() {
            salary = base::extract_salary_from_text(page.body_text());
        }
        base::clean_text(&salary)
    }
}
