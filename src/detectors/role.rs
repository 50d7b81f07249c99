use std::sync::LazyLock;

use regex::Regex;

use crate::models::candidate::{RoleMatch, RoleMatchType};

/// Titles longer than this are rejected outright as "not a job title".
const MAX_TITLE_LEN: usize = 150;

/// Tier 1: exact tech role phrases, score 100.
const EXACT_TECH_ROLES: &[&str] = &[
    "software engineer",
    "software developer",
    "full stack developer",
    "fullstack developer",
    "full-stack developer",
    "frontend developer",
    "front-end developer",
    "frontend engineer",
    "front-end engineer",
    "backend developer",
    "back-end developer",
    "backend engineer",
    "back-end engineer",
    "devops engineer",
    "site reliability engineer",
    "sre",
    "platform engineer",
    "cloud engineer",
    "data engineer",
    "ml engineer",
    "machine learning engineer",
    "ai engineer",
    "mobile developer",
    "mobile engineer",
    "ios developer",
    "ios engineer",
    "android developer",
    "android engineer",
    "web developer",
    "systems engineer",
    "infrastructure engineer",
    "security engineer",
    "qa engineer",
    "test engineer",
    "automation engineer",
    "solutions architect",
    "technical architect",
    "software architect",
    "data scientist",
    "research scientist",
    "applied scientist",
    "research engineer",
];

/// Tier 2: common tech-title phrasings with seniority/level markers, score 90.
static TECH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(sde|swe|sre)\s*[iI1-3]{1,3}\b",
        r"(?i)\bstaff\s+(software\s+)?engineer",
        r"(?i)\bprincipal\s+(software\s+)?engineer",
        r"(?i)\bsenior\s+(software\s+)?engineer",
        r"(?i)\bjunior\s+(software\s+)?engineer",
        r"(?i)\b(sr\.|sr)\s+(software\s+)?engineer",
        r"(?i)\b(software|backend|frontend|full[- ]?stack)\s+engineer(ing)?\s+(intern|new\s+grad)",
        r"(?i)\bengineer\s*[-–]\s*(backend|frontend|platform|infrastructure|data)",
        r"(?i)\b(l[3-7]|e[3-7]|ic[1-5])\s+(software\s+)?engineer",
        r"(?i)\bnew\s+grad\s+(software\s+)?engineer",
        r"(?i)\bentry[- ]level\s+(software\s+)?engineer",
        r"(?i)\b(backend|frontend|fullstack|full-stack)\s+engineer",
        r"(?i)\b(python|java|golang|rust|node|react|typescript)\s+(developer|engineer)",
        r"(?i)\bdev\s*ops\b",
        r"(?i)\bsoftware\s+development\s+engineer",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("tech pattern must compile"))
    .collect()
});

/// Tier 3: generic tech nouns, score 70 (40 with a non-tech indicator).
const GENERIC_TECH_KEYWORDS: &[&str] = &["engineer", "developer", "architect", "programmer", "coder"];

/// Tier 4: generic business-role nouns, score 30.
const GENERIC_KEYWORDS: &[&str] = &[
    "manager",
    "analyst",
    "specialist",
    "lead",
    "director",
    "consultant",
    "coordinator",
];

/// Phrases that suggest a non-tech role; penalize the generic tiers.
const NON_TECH_INDICATORS: &[&str] = &[
    "sales",
    "marketing",
    "hr",
    "human resources",
    "recruiting",
    "recruiter",
    "talent acquisition",
    "account manager",
    "customer success",
    "support specialist",
    "office manager",
    "administrative",
    "financial analyst",
    "operations manager",
    "project manager",
    "product manager",
];

/// Score a short text as a job-title candidate. Tiers are mutually
/// exclusive per call: the first tier that matches decides the score.
pub fn score_role(text: &str) -> Option<RoleMatch> {
    if text.len() > MAX_TITLE_LEN {
        return None;
    }
    let lower = text.to_lowercase();
    let lower = lower.trim();

    // A non-tech indicator is cancelled by an exact tech phrase.
    let has_non_tech_indicator = NON_TECH_INDICATORS
        .iter()
        .any(|ind| lower.contains(ind))
        && !EXACT_TECH_ROLES.iter().any(|role| lower.contains(role));

    for role in EXACT_TECH_ROLES {
        if lower.contains(role) {
            return Some(RoleMatch {
                text: text.to_string(),
                score: 100,
                match_type: RoleMatchType::ExactTech,
            });
        }
    }

    for pattern in TECH_PATTERNS.iter() {
        if pattern.is_match(lower) {
            return Some(RoleMatch {
                text: text.to_string(),
                score: 90,
                match_type: RoleMatchType::TechPattern,
            });
        }
    }

    for keyword in GENERIC_TECH_KEYWORDS {
        if lower.contains(keyword) {
            let score = if has_non_tech_indicator { 40 } else { 70 };
            return Some(RoleMatch {
                text: text.to_string(),
                score,
                match_type: RoleMatchType::GenericTech,
            });
        }
    }

    if !has_non_tech_indicator {
        for keyword in GENERIC_KEYWORDS {
            if lower.contains(keyword) {
                return Some(RoleMatch {
                    text: text.to_string(),
                    score: 30,
                    match_type: RoleMatchType::Generic,
                });
            }
        }
    }

    if has_non_tech_indicator {
        // Known non-tech role with no tech signal: floor score, not "no match".
        return Some(RoleMatch {
            text: text.to_string(),
            score: 10,
            match_type: RoleMatchType::Generic,
        });
    }

    None
}

/// Score every non-empty candidate and keep the strict maximum;
/// ties keep the first-seen match.
pub fn extract_best_role<I, S>(candidates: I) -> Option<RoleMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<RoleMatch> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref().trim();
        if candidate.is_empty() {
            continue;
        }
        if let Some(m) = score_role(candidate)
            && best.as_ref().is_none_or(|b| m.score > b.score)
        {
            best = Some(m);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_text_is_rejected() {
        let text = "x".repeat(151);
        assert!(score_role(&text).is_none());
    }

    #[test]
    fn exact_tech_role_scores_100_regardless_of_case() {
        let m = score_role("Senior SOFTWARE ENGINEER, Payments").unwrap();
        assert_eq!(m.score, 100);
        assert_eq!(m.match_type, RoleMatchType::ExactTech);
    }

    #[test]
    fn tech_pattern_scores_90() {
        let m = score_role("SDE II").unwrap();
        assert_eq!(m.score, 90);
        assert_eq!(m.match_type, RoleMatchType::TechPattern);
    }

    #[test]
    fn generic_tech_keyword_scores_70() {
        let m = score_role("Solutions Developer").unwrap();
        assert_eq!(m.score, 70);
    }

    #[test]
    fn non_tech_indicator_penalizes_generic_tech() {
        // "sales" + "engineer" without an exact tech phrase
        let m = score_role("Sales Engineer").unwrap();
        assert_eq!(m.score, 40);
    }

    #[test]
    fn non_tech_indicator_floor_is_10() {
        let m = score_role("Sales Manager").unwrap();
        assert_eq!(m.score, 10);
    }

    #[test]
    fn exact_phrase_overrides_non_tech_indicator() {
        let m = score_role("Sales Platform - Software Engineer").unwrap();
        assert_eq!(m.score, 100);
    }

    #[test]
    fn no_match_returns_none() {
        assert!(score_role("About our benefits").is_none());
    }

    #[test]
    fn best_role_prefers_higher_score() {
        let best = extract_best_role(["Sales Manager", "Senior Software Engineer"]).unwrap();
        assert_eq!(best.text, "Senior Software Engineer");
        assert_eq!(best.score, 100);
    }

    #[test]
    fn best_role_skips_empty_candidates() {
        let best = extract_best_role(["", "   ", "Backend Engineer"]).unwrap();
        assert_eq!(best.text, "Backend Engineer");
    }

    #[test]
    fn idempotent_scoring() {
        let a = score_role("Staff Engineer").unwrap();
        let b = score_role("Staff Engineer").unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.match_type, b.match_type);
    }
}
