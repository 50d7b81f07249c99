use std::sync::LazyLock;

use regex::Regex;

use crate::models::candidate::{Period, SalaryMatch};
use crate::page::Page;

/// Ordered pattern table, most specific first. Every pattern is applied
/// globally over the input; the caller keeps the highest-confidence match.
static SALARY_PATTERNS: LazyLock<Vec<(Regex, Period)>> = LazyLock::new(|| {
    [
        // $100,000 - $150,000 per year / annually / yr
        (
            r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*[-–to]+\s*\$?\s*([\d,]+(?:\.\d{2})?)\s*(?:per\s+)?(?:year|yr|annually|annual|pa|p\.a\.)",
            Period::Yearly,
        ),
        // $100K - $150K (assumed yearly)
        (r"(?i)\$\s*([\d.]+)\s*k\s*[-–to]+\s*\$?\s*([\d.]+)\s*k", Period::Yearly),
        // $100,000 - $150,000 with no unit; period inferred from magnitude
        (
            r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*[-–to]+\s*\$?\s*([\d,]+(?:\.\d{2})?)",
            Period::Unknown,
        ),
        // $50 - $75 per hour / hr / hourly
        (
            r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*[-–to]+\s*\$?\s*([\d,]+(?:\.\d{2})?)\s*(?:per\s+)?(?:hour|hr|hourly)",
            Period::Hourly,
        ),
        // $5,000 - $8,000 per month / mo / monthly
        (
            r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*[-–to]+\s*\$?\s*([\d,]+(?:\.\d{2})?)\s*(?:per\s+)?(?:month|mo|monthly)",
            Period::Monthly,
        ),
        // Single value: $150,000 per year
        (
            r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*(?:per\s+)?(?:year|yr|annually|annual|pa|p\.a\.)",
            Period::Yearly,
        ),
        // Single value: $150K (assumed yearly)
        (r"(?i)\$\s*([\d.]+)\s*k(?:\s|$|[,.])", Period::Yearly),
        // Single value: $50 per hour
        (
            r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*(?:per\s+)?(?:hour|hr|hourly)",
            Period::Hourly,
        ),
        // Single value: $5,000 per month
        (
            r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*(?:per\s+)?(?:month|mo|monthly)",
            Period::Monthly,
        ),
        // Range without $: 100,000 - 150,000 per year
        (
            r"(?i)([\d,]+)\s*[-–to]+\s*([\d,]+)\s*(?:per\s+)?(?:year|yr|annually)",
            Period::Yearly,
        ),
        // Range: 100k - 150k
        (r"(?i)([\d.]+)\s*k\s*[-–to]+\s*([\d.]+)\s*k", Period::Yearly),
        // Estimate format: $100K - $150K (Estimate)
        (
            r"(?i)\$\s*([\d.]+)\s*k\s*[-–]\s*\$?\s*([\d.]+)\s*k\s*(?:\(.*(?:estimate|est)\))?",
            Period::Yearly,
        ),
        // Slash-suffixed ranges: $90,000 - $120,000/yr
        (
            r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*[-–]\s*\$?\s*([\d,]+(?:\.\d{2})?)\s*/\s*(?:yr|year)",
            Period::Yearly,
        ),
        (
            r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*[-–]\s*\$?\s*([\d,]+(?:\.\d{2})?)\s*/\s*(?:hr|hour)",
            Period::Hourly,
        ),
        // Slash-suffixed single values: $45/hr, $120,000/yr
        (r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*/\s*(?:yr|year)", Period::Yearly),
        (r"(?i)\$\s*([\d,]+(?:\.\d{2})?)\s*/\s*(?:hr|hour)", Period::Hourly),
    ]
    .iter()
    .map(|(p, period)| (Regex::new(p).expect("salary pattern must compile"), *period))
    .collect()
});

/// Keywords marking a salary section of the page.
const SALARY_KEYWORDS: &[&str] = &[
    "salary",
    "compensation",
    "pay",
    "wage",
    "earning",
    "income",
    "base pay",
    "base salary",
    "annual salary",
    "hourly rate",
    "salary range",
    "pay range",
    "compensation range",
];

/// Elements that usually hold the salary directly.
const SALARY_SELECTORS: &[&str] = &[
    r#"[data-test-id="job-salary-info"]"#,
    r#"[data-test="salary-estimate"]"#,
    r#"[data-testid="salary"]"#,
    ".salary-snippet",
    ".salaryEstimate",
    ".SalaryEstimate",
    ".job-details-preferences-and-skills__salary",
    ".jobs-description__salary",
    r#"[class*="salary"]"#,
    r#"[class*="Salary"]"#,
    r#"[class*="compensation"]"#,
    r#"[class*="pay-range"]"#,
];

/// Job metadata / criteria containers worth scanning for `$`.
const DETAIL_SELECTORS: &[&str] = &[
    ".job-criteria__text",
    ".job-details__content",
    ".jobsearch-JobMetadataHeader-item",
    ".JobDetails",
    r#"[class*="job-detail"]"#,
];

/// Find every salary expression in a text snippet and return the one
/// with the highest confidence.
pub fn extract_salary(text: &str) -> Option<SalaryMatch> {
    let mut matches = Vec::new();

    for (pattern, period) in SALARY_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let raw = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            let value1 = caps.get(1).and_then(|m| parse_number(m.as_str()));
            let value2 = caps.get(2).and_then(|m| parse_number(m.as_str()));

            let min = value1;
            let max = value2.or(value1);

            let final_period = match period {
                Period::Unknown => infer_period(min),
                p => *p,
            };

            let confidence = score_confidence(raw, value2.is_some());
            let normalized = normalize_format(min, max, final_period);

            matches.push(SalaryMatch {
                raw: raw.trim().to_string(),
                normalized,
                min,
                max,
                period: final_period,
                confidence,
            });
        }
    }

    matches.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    matches.into_iter().next()
}

/// Pool salary candidates from three independent page zones and keep the
/// highest-confidence one.
pub fn extract_from_document(page: &Page) -> Option<SalaryMatch> {
    let mut candidates = Vec::new();

    // Zone 1: dedicated salary elements
    for selector in SALARY_SELECTORS {
        for text in page.select_all_texts(selector) {
            if let Some(mut m) = extract_salary(&text) {
                m.confidence += 10;
                candidates.push(m);
            }
        }
    }

    // Zone 2: body text lines near salary keywords or a dollar sign
    for line in page.body_text().lines() {
        let lower = line.to_lowercase();
        let has_keyword = SALARY_KEYWORDS.iter().any(|kw| lower.contains(kw));

        if has_keyword || line.contains('$') {
            if let Some(mut m) = extract_salary(line) {
                if has_keyword {
                    m.confidence += 15;
                }
                candidates.push(m);
            }
        }
    }

    // Zone 3: job detail containers
    for selector in DETAIL_SELECTORS {
        for text in page.select_all_texts(selector) {
            if text.contains('$')
                && let Some(mut m) = extract_salary(&text)
            {
                m.confidence += 5;
                candidates.push(m);
            }
        }
    }

    candidates.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    candidates.into_iter().next()
}

/// Display contract: canonical string when confident, the raw matched
/// text verbatim when borderline, empty when nothing matched.
pub fn extract_salary_string(page: &Page) -> String {
    match extract_from_document(page) {
        Some(m) if m.confidence >= 80 => m.normalized,
        Some(m) => m.raw,
        None => String::new(),
    }
}

/// Parse a numeric literal: commas/whitespace stripped, trailing `k`
/// multiplies by 1000.
pub fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }

    if let Some(stripped) = cleaned
        .strip_suffix('k')
        .or_else(|| cleaned.strip_suffix('K'))
    {
        return stripped.parse::<f64>().ok().map(|n| n * 1000.0);
    }

    cleaned.parse::<f64>().ok()
}

/// Canonical display form: `$120k - $150k/yr`, `$45/hr`, `$800`.
pub fn normalize_format(min: Option<f64>, max: Option<f64>, period: Period) -> String {
    let Some(min) = min else {
        return String::new();
    };

    let suffix = match period {
        Period::Hourly => "/hr",
        Period::Yearly => "/yr",
        _ => "",
    };

    match max {
        Some(max) if max != min => {
            format!("{} - {}{suffix}", format_value(min), format_value(max))
        }
        _ => format!("{}{suffix}", format_value(min)),
    }
}

fn format_value(val: f64) -> String {
    if val >= 1000.0 {
        let k = val / 1000.0;
        if k == k.floor() {
            format!("${}k", k as i64)
        } else {
            format!("${k:.1}k")
        }
    } else if val == val.floor() {
        format!("${}", val as i64)
    } else {
        format!("${val}")
    }
}

fn infer_period(min: Option<f64>) -> Period {
    match min {
        Some(v) if v >= 1000.0 => Period::Yearly,
        Some(v) if v < 500.0 => Period::Hourly,
        _ => Period::Unknown,
    }
}

fn score_confidence(raw: &str, is_range: bool) -> i32 {
    let lower = raw.to_lowercase();
    if raw.contains("/yr")
        || raw.contains("/hr")
        || lower.contains("per year")
        || lower.contains("per hour")
    {
        95
    } else if lower.contains('k') {
        85
    } else if is_range {
        80
    } else {
        70
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_range_with_explicit_unit() {
        let m = extract_salary("We pay $120,000 - $150,000 per year").unwrap();
        assert_eq!(m.min, Some(120_000.0));
        assert_eq!(m.max, Some(150_000.0));
        assert_eq!(m.period, Period::Yearly);
        assert_eq!(m.confidence, 95);
        assert_eq!(m.normalized, "$120k - $150k/yr");
    }

    #[test]
    fn hourly_single_value() {
        let m = extract_salary("Rate: $45/hr").unwrap();
        assert_eq!(m.min, Some(45.0));
        assert_eq!(m.max, Some(45.0));
        assert_eq!(m.period, Period::Hourly);
        assert_eq!(m.confidence, 95);
        assert_eq!(m.normalized, "$45/hr");
    }

    #[test]
    fn k_shorthand_range() {
        // the k-range pattern captures the digits only; the k stays in `raw`
        let m = extract_salary("$100K - $150K").unwrap();
        assert_eq!(m.min, Some(100.0));
        assert_eq!(m.max, Some(150.0));
        assert_eq!(m.period, Period::Yearly);
        assert_eq!(m.confidence, 85);
        assert_eq!(m.raw, "$100K - $150K");
    }

    #[test]
    fn bare_range_infers_yearly_from_magnitude() {
        let m = extract_salary("$90,000 - $110,000").unwrap();
        assert_eq!(m.period, Period::Yearly);
        assert_eq!(m.confidence, 80);
    }

    #[test]
    fn bare_small_values_infer_hourly() {
        let m = extract_salary("$40 - $60").unwrap();
        assert_eq!(m.period, Period::Hourly);
    }

    #[test]
    fn no_numbers_no_match() {
        assert!(extract_salary("Competitive compensation and benefits").is_none());
    }

    #[test]
    fn parse_number_handles_commas_and_k() {
        assert_eq!(parse_number("120,000"), Some(120_000.0));
        assert_eq!(parse_number("150k"), Some(150_000.0));
        assert_eq!(parse_number("1.5K"), Some(1500.0));
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn normalize_fractional_thousands_keeps_one_decimal() {
        assert_eq!(normalize_format(Some(150_500.0), Some(150_500.0), Period::Yearly), "$150.5k/yr");
    }

    #[test]
    fn parse_normalize_round_trip() {
        let n = parse_number("120k").unwrap();
        assert_eq!(normalize_format(Some(n), Some(n), Period::Unknown), "$120k");
        assert_eq!(parse_number("120"), Some(120.0));
    }

    #[test]
    fn idempotent_extraction() {
        let text = "Base pay: $130,000 - $160,000 per year plus equity";
        let a = extract_salary(text).unwrap();
        let b = extract_salary(text).unwrap();
        assert_eq!(a.normalized, b.normalized);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn document_extraction_prefers_keyword_lines() {
        let html = r#"<html><body>
            <p>Salary range: $100,000 - $130,000 per year</p>
            <p>Stipend of $500 available</p>
        </body></html>"#;
        let page = Page::new("https://example.com/job", html);
        let m = extract_from_document(&page).unwrap();
        assert_eq!(m.min, Some(100_000.0));
        // keyword line boost on top of the explicit-unit base
        assert!(m.confidence >= 95);
    }

    #[test]
    fn salary_string_falls_back_to_raw_when_borderline() {
        // monthly single value: confidence 70, below the 80 cutoff
        let m = extract_salary("Stipend: $5,000 per month").unwrap();
        assert_eq!(m.confidence, 70);
        assert_eq!(m.raw, "$5,000 per month");
        assert_eq!(m.period, Period::Monthly);
    }
}
