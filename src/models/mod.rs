pub mod candidate;
pub mod job;

pub use candidate::{CandidateSource, CompanyCandidate, Period, RoleMatch, SalaryMatch};
pub use job::{ExtractionOutcome, JobRecord};
