use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One extracted job application row. The extraction core fills
/// `company_name`, `role`, `salary` and `notes`; the bookkeeping fields
/// (status, date, rejection reason) are defaulted here and owned by the
/// caller from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub company_name: String,
    pub application_status: String,
    pub role: String,
    pub salary: String,
    pub date_submitted: String,
    pub link_to_job_req: String,
    pub rejection_reason: String,
    pub notes: String,
}

impl JobRecord {
    /// Empty record for the given source URL, dated today.
    pub fn empty(url: &str) -> Self {
        Self {
            company_name: String::new(),
            application_status: "Not Applied".to_string(),
            role: String::new(),
            salary: String::new(),
            date_submitted: Utc::now().format("%Y-%m-%d").to_string(),
            link_to_job_req: url.to_string(),
            rejection_reason: String::new(),
            notes: String::new(),
        }
    }
}

/// Result of one dispatch + extraction pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    pub success: bool,
    pub record: JobRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_used: Option<String>,
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
