use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

const USER_AGENT: &str = "ksong/0.1 (karaoke song page scraper)";

/// Failure of a page or audio fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// The request produced no usable response (connect, TLS, body read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Build the HTTP client shared by one scrape run.
pub fn client() -> Result<Client, FetchError> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// GET a URL and return the response body as text.
pub async fn text(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = checked_get(client, url).await?;
    Ok(response.text().await?)
}

/// GET a URL and return the raw response body bytes.
pub async fn bytes(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = checked_get(client, url).await?;
    Ok(response.bytes().await?.to_vec())
}

/// Single-attempt GET. Any non-success status is an error; nothing is
/// retried.
async fn checked_get(client: &Client, url: &str) -> Result<Response, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: url.to_string(),
        });
    }
    Ok(response)
}
