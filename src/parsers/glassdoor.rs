use crate::models::JobRecord;
use crate::page::Page;
use crate::parsers::{SiteParser, base};

pub struct GlassdoorParser;

const COMPANY_SELECTORS: &[&str] = &[
    r#"[data-test="employer-name"]"#,
    ".employerName",
    ".job-details-header .employerName",
    r#"a[data-test="employer-name"]"#,
    r#"[class*="JobDetails_companyName"]"#,
    ".EmployerProfile_profileContainer .employerName",
];

const TITLE_SELECTORS: &[&str] = &[
    r#"[data-test="job-title"]"#,
    ".jobTitle",
    ".job-details-header .jobTitle",
    r#"h1[data-test="job-title"]"#,
    r#"[class*="JobDetails_jobTitle"]"#,
];

const SALARY_SELECTORS: &[&str] = &[
    r#"[data-test="salary-estimate"]"#,
    ".salaryEstimate",
    ".SalaryEstimate",
    r#"[data-test="detailSalary"]"#,
    r#"[class*="JobDetails_salary"]"#,
];

impl SiteParser for GlassdoorParser {
    fn site_name(&self) -> &'static str {
        "Glassdoor"
    }

    fn url_patterns(&self) -> &'static [&'static str] {
        &["glassdoor.com/job-listing", "glassdoor.com/jobs/view"]
    }

    fn is_valid_job_page(&self, page: &Page) -> bool {
        let has_title = page.has_match(r#"[data-test="job-title"], .jobTitle"#);
        let has_company = page.has_match(r#"[data-test="employer-name"], .employerName"#);
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

impl GlassdoorParser {
    fn extract_company(&self, page: &Page) -> String {
        let mut name = base::extract_by_selectors(page, COMPANY_SELECTORS);
        if name.is_empty() {
            name = page.select_first_text(&[".job-details-header a"]);
        }
        base::clean_text(&name)
    }

    fn extract_salary(&self, page: &Page) -> String {
        let mut salary = base::extract_by_selectors(page, SALARY_SELECTORS);

        if salary.is_empty() {
            for selector in [r#"[class*="salary"]"#, r#"[class*="Salary"]"#] {
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
