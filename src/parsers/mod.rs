// Site parser module.
// Defines the adapter trait, the fixed site table, and the dispatcher.

pub mod base;
pub mod factory;

mod generic;
mod glassdoor;
mod greenhouse;
mod indeed;
mod lever;
mod linkedin;
mod wellfound;

pub use factory::{extract_job_data, get_parser};
pub use generic::GenericParser;

use crate::models::JobRecord;
use crate::page::Page;

/// Trait that all site adapters implement. Each one composes the three
/// detectors with site-specific selector lists into a complete extraction
/// for one page.
pub trait SiteParser: Send + Sync {
    /// Human-readable site name; "Generic" marks the fallback adapter.
    fn site_name(&self) -> &'static str;

    /// URL substrings this adapter claims.
    fn url_patterns(&self) -> &'static [&'static str];

    /// Site-specific heuristic: does this page look like a job posting
    /// this adapter can handle?
    fn is_valid_job_page(&self, page: &Page) -> bool;

    /// Extract a record from the page. Infallible: missing fields come
    /// back empty, never as errors.
    fn parse(&self, page: &Page) -> JobRecord;
}

/// The compiled-in adapter table, in dispatch order. Generic goes last
/// and is only reached as a fallback.
pub fn all_parsers() -> Vec<Box<dyn SiteParser>> {
    vec![
        Box::new(linkedin::LinkedInParser),
        Box::new(indeed::IndeedParser),
        Box::new(glassdoor::GlassdoorParser),
        Box::new(wellfound::WellfoundParser),
        Box::new(greenhouse::GreenhouseParser),
        Box::new(lever::LeverParser),
        Box::new(GenericParser),
    ]
}

/// Names of all site-specific adapters (the fallback excluded).
pub fn supported_sites() -> Vec<&'static str> {
    all_parsers()
        .iter()
        .map(|p| p.site_name())
        .filter(|name| *name != "Generic")
        .collect()
}
