use reqwest::{StatusCode, Url};
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{Result, TermFreqError};

/// Fetch the page at `settings.url` and return its body as text.
///
/// Only a `200 OK` answer counts as success. No retries: a failed fetch is
/// reported to the caller and the user re-invokes.
pub async fn fetch_page(settings: &Settings) -> Result<String> {
    let url = settings.url.as_str();
    let failed = |status: Option<u16>| TermFreqError::Retrieval {
        url: url.to_string(),
        status,
    };

    let parsed = Url::parse(url).map_err(|e| {
        debug!("Invalid URL {}: {}", url, e);
        failed(None)
    })?;

    let client = reqwest::Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(settings.timeout)
        .build()
        .map_err(|e| {
            debug!("Failed to build HTTP client: {}", e);
            failed(None)
        })?;

    info!("Fetching page: {}", url);
    let response = client.get(parsed).send().await.map_err(|e| {
        debug!("Exception during loading web page: {}", e);
        failed(None)
    })?;

    let status = response.status();
    debug!("{} answered {}", url, status);
    if status != StatusCode::OK {
        return Err(failed(Some(status.as_u16())));
    }

    let body = response.text().await.map_err(|e| {
        debug!("Failed to read body of {}: {}", url, e);
        failed(None)
    })?;
    debug!("Received {} bytes", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unparsable_url_is_retrieval_error() {
        let settings = Settings::new("not a url".into(), false);
        match fetch_page(&settings).await {
            Err(TermFreqError::Retrieval { url, status }) => {
                assert_eq!(url, "not a url");
                assert_eq!(status, None);
            }
            other => panic!("expected retrieval error, got {:?}", other),
        }
    }
}
