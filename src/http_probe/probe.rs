use reqwest::{Client, Method};
use url::Url;

use super::ProbeError;
use super::result::ProbeResult;

/// Issue a single request with the given method and an empty body, and reduce
/// the response to a [`ProbeResult`].
///
/// The client is connection-pooled and shared by every concurrent probe; this
/// function touches no state beyond the one request. Construction failures
/// (bad URL, bad method token) and transport failures (DNS, connect, TLS) both
/// come back as [`ProbeError`] and produce no partial result.
pub async fn probe(client: &Client, url: &str, method: &str) -> Result<ProbeResult, ProbeError> {
    let target = Url::parse(url)?;
    let verb = Method::from_bytes(method.as_bytes())
        .map_err(|_| ProbeError::Method(method.to_string()))?;

    let response = client.request(verb, target).body(Vec::new()).send().await?;
    let status = response.status().as_u16();

    // A failed body read still counts: the status is known, the length falls
    // back to zero. The connection is released when the response drops.
    let length = response.bytes().await.map(|body| body.len()).unwrap_or(0);

    Ok(ProbeResult {
        url: url.to_string(),
        method: method.to_string(),
        status,
        length,
    })
}
