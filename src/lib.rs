//! Heuristic extraction of job-application data (company, role, salary)
//! from job posting pages. Detectors generate competing candidates from
//! independent signals; per-site parsers compose them; a factory picks
//! the parser and validates the result.

pub mod config;
pub mod detectors;
pub mod error;
pub mod fetch;
pub mod models;
pub mod page;
pub mod parsers;

pub use error::AppError;
pub use models::{ExtractionOutcome, JobRecord};
pub use page::Page;
