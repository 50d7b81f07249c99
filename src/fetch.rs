use crate::error::AppError;
use crate::page::Page;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Fetch a job posting over HTTP and wrap it as a Page. Job boards often
/// reject default client user agents, so send a browser-like one.
pub async fn fetch_page(url: &str) -> Result<Page, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client
        .get(url)
        .header("Accept", "text/html,application/xhtml+xml,*/*;q=0.8")
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(AppError::Internal(format!(
            "{url} returned {}",
            resp.status()
        )));
    }

    let html = resp.text().await?;
    Ok(Page::new(url, &html))
}
