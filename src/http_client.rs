use std::time::Duration;

/// Builds a fresh client for a single upstream call. Nothing is pooled
/// across requests.
pub fn client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let builder = reqwest::Client::builder();
    match timeout {
        Some(timeout) => builder.timeout(timeout).build(),
        None => builder.build(),
    }
}
