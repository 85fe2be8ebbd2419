use serde::{Deserialize, Serialize};

/// One accepted (url, method) probe: the status the server answered with and
/// how many body bytes came back. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProbeResult {
    pub url: String,
    pub method: String,
    pub status: u16,
    pub length: usize,
}
