use jobparse::Page;
use jobparse::parsers::{self, extract_job_data, get_parser};

const GREENHOUSE_PAGE: &str = r#"<html>
<head><title>Backend Engineer - Acme Robotics</title></head>
<body>
  <h1 class="app-title">Backend Engineer</h1>
  <div class="company-name">Acme Robotics</div>
  <div class="content">
    <p>Acme Robotics is hiring a backend engineer to join the Acme Robotics team.</p>
    <p>Compensation: $140,000 - $170,000 per year</p>
    <p>Apply now!</p>
  </div>
</body>
</html>"#;

const LEVER_PAGE: &str = r#"<html>
<head><title>Platform Engineer - Initech</title></head>
<body>
  <div class="posting-headline"><h2>Platform Engineer</h2></div>
  <div class="posting-header"><div class="company">Initech</div></div>
  <p>Salary range: $60 - $80 per hour</p>
</body>
</html>"#;

const UNKNOWN_BOARD_PAGE: &str = r#"<html>
<head>
  <title>Senior Data Engineer | Jobs at Hooli</title>
  <meta property="og:site_name" content="Hooli">
  <script type="application/ld+json">
  {"@type":"JobPosting","title":"Senior Data Engineer","hiringOrganization":{"@type":"Organization","name":"Hooli"}}
  </script>
</head>
<body>
  <h1>Senior Data Engineer</h1>
  <p>Hooli is hiring! Join the Hooli team and help Hooli scale.</p>
  <p>Responsibilities: build pipelines. Requirements: SQL.</p>
  <p>Base salary: $150,000 - $180,000 per year. Apply now.</p>
</body>
</html>"#;

#[test]
fn greenhouse_page_extracts_all_fields() {
    let page = Page::new(
        "https://boards.greenhouse.io/acmerobotics/jobs/42",
        GREENHOUSE_PAGE,
    );
    let outcome = extract_job_data(&page);

    assert!(outcome.success);
    assert_eq!(outcome.parser_used.as_deref(), Some("Greenhouse"));
    assert_eq!(outcome.record.company_name, "Acme Robotics");
    assert_eq!(outcome.record.role, "Backend Engineer");
    assert!(outcome.record.salary.contains("140,000"));
    assert!(outcome.warnings.is_empty());
    assert_eq!(
        outcome.record.link_to_job_req,
        "https://boards.greenhouse.io/acmerobotics/jobs/42"
    );
}

#[test]
fn lever_page_extracts_all_fields() {
    let page = Page::new("https://jobs.lever.co/initech/99", LEVER_PAGE);
    let outcome = extract_job_data(&page);

    assert_eq!(outcome.parser_used.as_deref(), Some("Lever"));
    assert_eq!(outcome.record.company_name, "Initech");
    assert_eq!(outcome.record.role, "Platform Engineer");
    assert!(outcome.record.salary.contains('$'));
}

#[test]
fn unknown_board_uses_generic_parser_and_structured_data() {
    let page = Page::new("https://hooli.example/openings/data-eng", UNKNOWN_BOARD_PAGE);
    let parser = get_parser(&page);
    assert_eq!(parser.site_name(), "Generic");

    let outcome = extract_job_data(&page);
    assert_eq!(outcome.record.company_name, "Hooli");
    assert_eq!(outcome.record.role, "Senior Data Engineer");
    assert_eq!(outcome.record.salary, "$150k - $180k/yr");
    assert_eq!(outcome.record.notes, "Auto-extracted (please verify)");
}

#[test]
fn empty_page_still_produces_a_record() {
    let page = Page::new("https://example.com/nothing", "<html><body></body></html>");
    let outcome = extract_job_data(&page);

    assert!(outcome.success);
    assert_eq!(outcome.record.company_name, "");
    assert_eq!(outcome.record.role, "");
    assert_eq!(outcome.record.salary, "");
    assert!(!outcome.warnings.is_empty());
}

#[test]
fn extraction_is_idempotent() {
    let page = Page::new(
        "https://boards.greenhouse.io/acmerobotics/jobs/42",
        GREENHOUSE_PAGE,
    );
    let first = extract_job_data(&page);
    let second = extract_job_data(&page);

    assert_eq!(first.record.company_name, second.record.company_name);
    assert_eq!(first.record.role, second.record.role);
    assert_eq!(first.record.salary, second.record.salary);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn supported_sites_excludes_the_fallback() {
    let sites = parsers::supported_sites();
    assert!(sites.contains(&"LinkedIn"));
    assert!(sites.contains(&"Greenhouse"));
    assert!(!sites.contains(&"Generic"));
}
