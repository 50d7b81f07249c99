use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::models::candidate::{CandidateSource, CompanyCandidate};
use crate::page::Page;

/// Frequency candidates need at least this many occurrences.
pub const MIN_PHRASE_FREQUENCY: u32 = 3;

/// Arbitration admits a winner only at or above this final score.
pub const SCORE_THRESHOLD: i32 = 40;

/// Natural-language mentions of the employer ("at X", "X is hiring", ...).
/// The case-insensitive flag deliberately loosens the leading [A-Z] class,
/// as in the original.
static CONTEXT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:at|@)\s+([A-Z][A-Za-z0-9\s&.,'-]+?)(?:\s+is|\s+we|[.,]|$)",
        r"(?i)join\s+(?:the\s+)?([A-Z][A-Za-z0-9\s&.,'-]+?)\s+(?:team|family)",
        r"(?i)([A-Z][A-Za-z0-9\s&.,'-]+?)\s+is\s+(?:hiring|looking|seeking)",
        r"(?i)work(?:ing)?\s+(?:at|for)\s+([A-Z][A-Za-z0-9\s&.,'-]+?)(?:\s|[.,]|$)",
        r"(?i)careers?\s+(?:at|with)\s+([A-Z][A-Za-z0-9\s&.,'-]+)",
        r"(?i)([A-Z][A-Za-z0-9\s&.,'-]+?)\s+careers?",
        r"(?i)about\s+([A-Z][A-Za-z0-9\s&.,'-]+?)(?:\s|:)",
        r"(?i)([A-Z][A-Za-z0-9\s&.,'-]+?)\s+(?:jobs?|openings?|positions?)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("context pattern must compile"))
    .collect()
});

/// 1-4 title-cased words in sequence, for the frequency strategy.
static CAPITALIZED_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-z]*(?:\s+[A-Z][a-z]*){0,3})\b").expect("phrase pattern"));

/// ATS subdomain shapes: the company lives in the subdomain token.
static ATS_SUBDOMAIN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^([a-z0-9-]+)\.greenhouse\.io$",
        r"(?i)^([a-z0-9-]+)\.lever\.co$",
        r"(?i)^([a-z0-9-]+)\.ashbyhq\.com$",
        r"(?i)^([a-z0-9-]+)\.workable\.com$",
        r"(?i)^([a-z0-9-]+)\.recruitee\.com$",
        r"(?i)^([a-z0-9-]+)\.breezy\.hr$",
        r"(?i)^([a-z0-9-]+)\.bamboohr\.com$",
        r"(?i)^([a-z0-9-]+)\.pinpointhq\.com$",
        r"(?i)^([a-z0-9-]+)\.teamtailor\.com$",
        r"(?i)^jobs\.([a-z0-9-]+)\.com$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("subdomain pattern must compile"))
    .collect()
});

const GENERIC_SUBDOMAINS: &[&str] = &["www", "jobs", "careers", "boards", "apply"];

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "as", "is", "was", "are", "were", "been",
        "be", "have", "has", "had", "do", "does", "did", "will", "would",
        "could", "should", "may", "might", "must", "shall", "can", "need",
        "job", "jobs", "career", "careers", "position", "positions", "opening",
        "apply", "application", "hiring", "looking", "seeking", "join",
        "team", "work", "working", "opportunity", "opportunities",
        "software", "engineer", "developer", "senior", "junior", "manager",
        "remote", "hybrid", "onsite", "full-time", "part-time", "contract",
        "about", "us", "our", "we", "you", "your", "this", "that", "these",
        "new", "all", "more", "view", "see", "find", "search", "home", "back",
        "next", "previous", "page", "site", "website", "company", "companies",
    ]
    .into_iter()
    .collect()
});

/// Substrings that mark page chrome or posting sections, not a company.
const NEGATIVE_INDICATORS: &[&str] = &[
    "description",
    "requirements",
    "qualifications",
    "responsibilities",
    "benefits",
    "location",
    "salary",
    "experience",
    "skills",
    "education",
    "overview",
    "summary",
    "details",
    "information",
    "posted",
    "date",
    "apply now",
    "submit",
    "sign in",
    "log in",
    "register",
    "similar jobs",
];

/// ATS and job-board brand names; never a valid employer name.
static ATS_PLATFORMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "greenhouse", "lever", "workday", "icims", "taleo", "jobvite",
        "smartrecruiters", "breezy", "jazz", "jazzhr", "bamboohr", "bamboo",
        "ashby", "rippling", "gusto", "paylocity", "paycom", "adp",
        "successfactors", "oracle", "workable", "recruitee", "pinpoint",
        "teamtailor", "personio", "deel", "remote", "oyster", "lattice",
        "linkedin", "indeed", "glassdoor", "ziprecruiter", "monster",
        "careerbuilder", "dice", "angellist", "wellfound", "ycombinator",
        "workatastartup", "hired", "triplebyte", "angel", "powered by",
    ]
    .into_iter()
    .collect()
});

const JOB_TITLE_WORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "director",
    "analyst",
    "specialist",
];

const GENERIC_TERMS: &[&str] = &["software", "remote", "hybrid", "full time", "part time"];

/// Is this name an ATS/job-board brand rather than an employer?
pub fn is_ats_platform_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    let lower = lower.trim();
    if ATS_PLATFORMS.contains(lower) {
        return true;
    }
    ATS_PLATFORMS
        .iter()
        .any(|ats| lower == *ats || lower == format!("{ats} logo") || lower == format!("{ats} careers"))
}

/// Run the contextual sentence patterns over full page text; one candidate
/// per unique (case-insensitive) cleaned name.
pub fn extract_from_context_patterns(text: &str) -> Vec<CompanyCandidate> {
    let mut candidates = Vec::new();
    let mut seen = HashSet::new();

    for pattern in CONTEXT_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(group) = caps.get(1) else { continue };
            let name = clean_company_name(group.as_str());
            if name.is_empty() || name.len() < 2 || name.len() > 50 {
                continue;
            }
            if !seen.insert(name.to_lowercase()) {
                continue;
            }
            candidates.push(CompanyCandidate {
                name,
                frequency: 1,
                source: CandidateSource::ContextPattern,
                confidence: 85,
            });
        }
    }

    candidates
}

/// Count repeated title-cased phrases in the page text; frequent ones are
/// likely the employer's name. Keeps the top 10 at >= MIN_PHRASE_FREQUENCY.
pub fn extract_by_frequency(page: &Page) -> Vec<CompanyCandidate> {
    let mut phrase_counts: HashMap<String, u32> = HashMap::new();
    // Insertion order, so equal-frequency candidates stay deterministic.
    let mut order: Vec<String> = Vec::new();

    for caps in CAPITALIZED_PHRASE.captures_iter(page.body_text()) {
        let Some(group) = caps.get(1) else { continue };
        let phrase = group.as_str().trim();

        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.len() == 1
            && words
                .first()
                .is_some_and(|w| STOP_WORDS.contains(w.to_lowercase().as_str()))
        {
            continue;
        }
        if words.iter().all(|w| STOP_WORDS.contains(w.to_lowercase().as_str())) {
            continue;
        }
        if phrase.len() < 2 || phrase.len() > 40 {
            continue;
        }
        let lower = phrase.to_lowercase();
        if NEGATIVE_INDICATORS.iter().any(|ind| lower.contains(ind)) {
            continue;
        }
        if words.len() > 4 {
            continue;
        }

        let entry = phrase_counts.entry(phrase.to_string()).or_insert(0);
        if *entry == 0 {
            order.push(phrase.to_string());
        }
        *entry += 1;
    }

    let mut candidates: Vec<CompanyCandidate> = order
        .into_iter()
        .filter_map(|name| {
            let frequency = phrase_counts.get(&name).copied().unwrap_or(0);
            (frequency >= MIN_PHRASE_FREQUENCY).then(|| CompanyCandidate {
                confidence: (50 + frequency as i32 * 5).min(95),
                name,
                frequency,
                source: CandidateSource::Frequency,
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    candidates.truncate(10);
    candidates
}

/// Embedded JSON-LD: a JobPosting's hiringOrganization or an Organization
/// name. Any parse or shape mismatch contributes nothing.
pub fn extract_from_json_ld(page: &Page) -> Option<CompanyCandidate> {
    for script in page.select_all_texts(r#"script[type="application/ld+json"]"#) {
        let Ok(data) = serde_json::from_str::<serde_json::Value>(&script) else {
            continue;
        };
        let items: Vec<&serde_json::Value> = match data.as_array() {
            Some(arr) => arr.iter().collect(),
            None => vec![&data],
        };
        for item in items {
            let type_tag = item.get("@type").and_then(|t| t.as_str());
            if type_tag == Some("JobPosting") {
                let org = item.get("hiringOrganization");
                let name = org.and_then(|o| {
                    o.as_str()
                        .map(String::from)
                        .or_else(|| o.get("name").and_then(|n| n.as_str()).map(String::from))
                });
                if let Some(name) = name
                    && !is_ats_platform_name(&name)
                {
                    return Some(CompanyCandidate {
                        name,
                        frequency: 1,
                        source: CandidateSource::Meta,
                        confidence: 95,
                    });
                }
            }
            if type_tag == Some("Organization")
                && let Some(name) = item.get("name").and_then(|n| n.as_str())
                && !is_ats_platform_name(name)
            {
                return Some(CompanyCandidate {
                    name: name.to_string(),
                    frequency: 1,
                    source: CandidateSource::Meta,
                    confidence: 90,
                });
            }
        }
    }
    None
}

/// ATS-hosted boards put the company in the subdomain
/// (acme-corp.greenhouse.io -> "Acme Corp").
pub fn extract_from_subdomain(url: &str) -> Option<CompanyCandidate> {
    let parsed = Url::parse(url).ok()?;
    let hostname = parsed.host_str()?.to_string();

    for pattern in ATS_SUBDOMAIN_PATTERNS.iter() {
        let Some(caps) = pattern.captures(&hostname) else {
            continue;
        };
        let Some(subdomain) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if GENERIC_SUBDOMAINS.contains(&subdomain) {
            continue;
        }
        let name = subdomain
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");
        if !is_ats_platform_name(&name) {
            return Some(CompanyCandidate {
                name,
                frequency: 1,
                source: CandidateSource::Url,
                confidence: 75,
            });
        }
    }
    None
}

/// Arbitration: weight each surviving candidate by confidence, source,
/// and repetition, penalize names that look like titles or page chrome,
/// and admit the winner only above SCORE_THRESHOLD.
pub fn select_best_candidate(candidates: &[CompanyCandidate]) -> String {
    let mut scored: Vec<(i32, &CompanyCandidate)> = candidates
        .iter()
        .filter(|c| !is_ats_platform_name(&c.name))
        .map(|c| (final_score(c), c))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    match scored.first() {
        Some((score, candidate)) if *score >= SCORE_THRESHOLD => candidate.name.clone(),
        _ => String::new(),
    }
}

fn final_score(candidate: &CompanyCandidate) -> i32 {
    let mut score = candidate.confidence;

    score += match candidate.source {
        CandidateSource::ContextPattern => 20,
        CandidateSource::Selector => 15,
        CandidateSource::Meta => 10,
        CandidateSource::Frequency => candidate.frequency as i32 * 3,
        CandidateSource::Title => 5,
        CandidateSource::Url => 0,
    };

    if candidate.frequency > 1 {
        score += (candidate.frequency as i32 * 2).min(20);
    }

    if candidate.name.len() < 3 {
        score -= 20;
    }

    let lower = candidate.name.to_lowercase();
    if JOB_TITLE_WORDS.iter().any(|w| lower.contains(w)) {
        score -= 50;
    }
    if GENERIC_TERMS.iter().any(|t| lower.contains(t)) {
        score -= 40;
    }

    score
}

/// Strip trailing corporate suffixes and filler, reject pure-stop-word or
/// chrome-looking results.
pub fn clean_company_name(name: &str) -> String {
    static TRAILING_FILLER: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)\s+(is|are|was|team|jobs?|careers?|Inc\.?|LLC|Ltd\.?|Corp\.?)$")
            .expect("filler pattern")
    });

    let mut cleaned = name.trim().to_string();
    cleaned = TRAILING_FILLER.replace(&cleaned, "").trim().to_string();
    cleaned = cleaned.trim_end_matches([',', '.']).trim().to_string();

    if cleaned
        .to_lowercase()
        .split_whitespace()
        .all(|w| STOP_WORDS.contains(w))
    {
        return String::new();
    }

    let lower = cleaned.to_lowercase();
    if NEGATIVE_INDICATORS.iter().any(|ind| lower.contains(ind)) {
        return String::new();
    }

    cleaned
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
