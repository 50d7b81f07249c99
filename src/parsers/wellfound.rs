use crate::models::JobRecord;
use crate::page::Page;
use crate::parsers::{SiteParser, base};

/// AngelList rebranded to Wellfound; both hosts stay in the pattern list.
pub struct WellfoundParser;

const COMPANY_SELECTORS: &[&str] = &[
    r#"[data-test="StartupLink"]"#,
    ".company-name",
    ".startup-link",
    r#"a[href*="/company/"]"#,
    ".job-detail-header .company",
    r#"[class*="JobDetail_companyName"]"#,
];

const TITLE_SELECTORS: &[&str] = &[
    r#"[data-test="JobTitle"]"#,
    ".job-title",
    "h1.job-detail-title",
    r#"[class*="JobDetail_title"]"#,
    r#"h1[data-test="job-title"]"#,
];

const SALARY_SELECTORS: &[&str] = &[
    r#"[data-test="salary"]"#,
    ".salary-range",
    ".compensation",
    r#"[class*="salary"]"#,
    r#"[class*="Salary"]"#,
];

impl SiteParser for WellfoundParser {
    fn site_name(&self) -> &'static str {
        "Wellfound"
    }

    fn url_patterns(&self) -> &'static [&'static str] {
        &["angel.co/jobs", "wellfound.com/jobs", "angel.co/company"]
    }

    fn is_valid_job_page(&self, page: &Page) -> bool {
        let has_job = page.has_match(r#"[data-test="JobTitle"], .job-title, .job-detail-title"#);
        let has_company = page.has_match(r#"[data-test="StartupLink"], .company-name"#);
        has_job || has_company
    }

    fn parse(&self, page: &Page) -> JobRecord {
        let mut record = base::default_record(page, self.site_name());
        record.company_name = self.extract_company(page);
        record.role = self.extract_role(page);
        record.salary = self.extract_salary(page);
        record
    }
}

impl WellfoundParser {
    fn extract_company(&self, page: &Page) -> String {
        let mut name = base::extract_by_selectors(page, COMPANY_SELECTORS);

        if name.is_empty() {
            name = page.select_first_text(&[r#"a[href*="/startup/"]"#]);
        }
        if name.is_empty() {
            name = base::extract_from_page_title(page);
        }

        base::clean_text(&name)
    }

    fn extract_role(&self, page: &Page) -> String {
        let mut role = base::extract_by_selectors(page, TITLE_SELECTORS);

        if role.is_empty() {
            // First h1 that is not the platform's own branding.
            role = page
                .select_all_texts("h1")
                .into_iter()
                .find(|text| {
                    let lower = text.to_lowercase();
                    !text.is_empty() && !lower.contains("angel") && !lower.contains("wellfound")
                })
                .unwrap_or_default();
        }

        base::clean_text(&role)
    }

    fn extract_salary(&self, page: &Page) -> String {
        let mut salary = base::extract_by_selectors(page, SALARY_SELECTORS);

        if salary.is_empty() {
            for text in page.select_all_texts(r#"[class*="compensation"]"#) {
                let found = base::extract_salary_from_text(&text);
                if !found.is_empty() {
                    salary = found;
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
