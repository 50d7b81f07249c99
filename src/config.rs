use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobparse", about = "Extract job application data from posting pages")]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract company/role/salary from a job posting page
    Extract {
        /// URL of the posting; fetched unless --file is given
        url: String,

        /// Read HTML from a local file instead of fetching the URL
        #[arg(long)]
        file: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the site-specific parsers
    Sites,
}
