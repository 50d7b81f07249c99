use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobparse::config::{Command, Config};
use jobparse::parsers;
use jobparse::{Page, fetch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobparse=info")),
        )
        .init();

    let config = Config::parse();

    match config.command {
        Command::Extract { url, file, pretty } => {
            let outcome = match load_page(&url, file.as_deref()).await {
                Ok(page) => parsers::extract_job_data(&page),
                Err(e) => {
                    tracing::error!("Failed to load {url}: {e}");
                    parsers::factory::failed_outcome(&url, e.to_string())
                }
            };

            let json = if pretty {
                serde_json::to_string_pretty(&outcome)?
            } else {
                serde_json::to_string(&outcome)?
            };
            println!("{json}");
        }
        Command::Sites => {
            for site in parsers::supported_sites() {
                println!("{site}");
            }
        }
    }

    Ok(())
}

async fn load_page(url: &str, file: Option<&std::path::Path>) -> anyhow::Result<Page> {
    match file {
        Some(path) => {
            let html = std::fs::read_to_string(path)?;
            Ok(Page::new(url, &html))
        }
        None => Ok(fetch::fetch_page(url).await?),
    }
}
