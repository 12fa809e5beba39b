// ABOUTME: HTTP fetching of day pages: one GET with the client's timeout, returning the raw markup.
// ABOUTME: Timeouts and transport failures map to QueryError codes; no retry is attempted.

use crate::error::QueryError;

/// Fetch a page from the given URL, returning its body as text.
///
/// A timed-out request yields a Timeout error; any other transport failure
/// or a non-success HTTP status yields a Fetch error.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<String, QueryError> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            QueryError::timeout(url, "Fetch", Some(anyhow::anyhow!("request timed out: {}", e)))
        } else {
            QueryError::fetch(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(QueryError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("HTTP {}", status)),
        ));
    }

    response.text().await.map_err(|e| {
        if e.is_timeout() {
            QueryError::timeout(url, "Fetch", Some(anyhow::anyhow!("body read timed out: {}", e)))
        } else {
            QueryError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("failed to read response body: {}", e)),
            )
        }
    })
}
