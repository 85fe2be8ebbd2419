use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::http_probe::result::ProbeResult;

/// Persistence failures are best effort for the caller: it logs them and
/// exits normally.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize results")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Serialize results as a pretty-printed JSON array (2-space indent) in
/// accumulation order, overwriting whatever is at `path`.
pub fn write_results(results: &[ProbeResult], path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}
