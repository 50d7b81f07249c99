use serde::{Deserialize, Serialize};

/// Where a company-name candidate came from. Arbitration weights
/// sources differently, so provenance travels with the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    ContextPattern,
    Selector,
    Meta,
    Title,
    Frequency,
    Url,
}

/// A proposed company name prior to arbitration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCandidate {
    pub name: String,
    pub frequency: u32,
    pub source: CandidateSource,
    pub confidence: i32,
}

/// How a role candidate matched: which tier fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleMatchType {
    ExactTech,
    TechPattern,
    GenericTech,
    Generic,
}

/// A scored job-title candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMatch {
    pub text: String,
    pub score: i32,
    pub match_type: RoleMatchType,
}

/// Pay period attached to a salary match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Hourly,
    Yearly,
    Monthly,
    Unknown,
}

/// A salary expression found in text. `min` is `None` only when no numeric
/// text matched; a single value has `max == min`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryMatch {
    pub raw: String,
    pub normalized: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub period: Period,
    pub confidence: i32,
}
