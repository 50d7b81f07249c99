use crate::detectors::company;
use crate::models::JobRecord;
use crate::page::Page;
use crate::parsers::{SiteParser, base};

pub struct IndeedParser;

const COMPANY_SELECTORS: &[&str] = &[
    r#"[data-testid="company-name"]"#,
    r#"[data-testid="inlineHeader-companyName"]"#,
    ".jobsearch-InlineCompanyRating",
    ".jobsearch-CompanyInfoContainer a",
    ".jobsearch-JobInfoHeader-subtitle a",
    r#"a[data-jk][href*="cmp"]"#,
    ".icl-u-lg-mr--sm",
    r#"[data-company-name="true"]"#,
];

const TITLE_SELECTORS: &[&str] = &[
    ".jobsearch-JobInfoHeader-title",
    r#"h1[data-automation="job-title"]"#,
    ".jobsearch-JobInfoHeader-title span[title]",
    "h1.icl-u-xs-mb--xs",
];

const SALARY_SELECTORS: &[&str] = &[
    ".salary-snippet",
    r#"[data-testid="job-salary"]"#,
];

const METADATA_SELECTORS: &[&str] = &[
    ".jobsearch-JobMetadataHeader-item",
    ".jobsearch-JobDescriptionSection-sectionItem",
];

impl SiteParser for IndeedParser {
    fn site_name(&self) -> &'static str {
        "Indeed"
    }

    fn url_patterns(&self) -> &'static [&'static str] {
        &["indeed.com/viewjob", "indeed.com/jobs/view"]
    }

    fn is_valid_job_page(&self, page: &Page) -> bool {
        let has_title = page.has_match(".jobsearch-JobInfoHeader-title");
        let has_company =
            page.has_match(r#"[data-testid="company-name"], .jobsearch-InlineCompanyRating"#);
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

impl IndeedParser {
    fn extract_company(&self, page: &Page) -> String {
        // Structured data is the most reliable signal when present.
        if let Some(candidate) = company::extract_from_json_ld(page) {
            return base::clean_text(&candidate.name);
        }

        let mut name = base::extract_by_selectors(page, COMPANY_SELECTORS);

        if name.is_empty() {
            name = page.select_first_text(&[r#"a[href*="/cmp/"]"#]);
        }

        if company::is_ats_platform_name(&name) {
            name.clear();
        }

        base::clean_text(&name)
    }

    fn extract_salary(&self, page: &Page) -> String {
        let mut salary = base::extract_by_selectors(page, SALARY_SELECTORS);

        if salary.is_empty() {
            for selector in METADATA_SELECTORS {
                for text in page.select_all_texts(selector) {
                    let found = base::extract_salary_from_text(&text);
                    if !found.is_empty() {
                        salary = found;
                        break;
                    }
                }
                if !salary.is_empty() {
                    break;
                }
            }
        }

        if salary.is_empty() {
            salary = base::extract_salary_from_text(page.body_text());
        }

        base::clean_text(&salary)
    }
}
