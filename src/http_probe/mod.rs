pub mod probe;
pub mod result;

use std::fmt::Write;

use thiserror::Error;

/// Why a single probe produced no result. Failed probes are dropped by the
/// caller, so this only ever surfaces in debug logs.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid method token {0:?}")]
    Method(String),
    #[error("invalid target URL")]
    Url(#[from] url::ParseError),
    #[error("request failed")]
    Transport(#[from] reqwest::Error),
}

/// Render an error together with its source chain on one line.
pub fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}
