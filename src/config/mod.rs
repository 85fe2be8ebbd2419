use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

/// Command-line surface for verbmap.
///
/// `--url` and `--wordlist` select the probing mode; when both are supplied,
/// `--url` wins. With neither, the binary prints usage and probes nothing.
#[derive(Debug, Parser)]
#[command(name = "verbmap", version, about = "Concurrent HTTP method enumeration probe")]
#[command(after_help = "Method and mode selectors are double-dash long options \
(--method, --combine); -m is the short form of --method.\n\n\
Examples:\n  \
verbmap -u https://target.example/\n  \
verbmap -w urls.txt -m OPTIONS -o methods.json\n  \
verbmap -w urls.txt --combine")]
pub struct Cli {
    /// Probe every catalog method against a single URL (results go to stdout).
    #[arg(short = 'u', long, value_name = "URL")]
    pub url: Option<String>,

    /// File with newline-separated target URLs.
    #[arg(short = 'w', long, value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// HTTP method to probe in multi-target mode.
    #[arg(short = 'm', long, default_value = "GET", value_name = "NAME")]
    pub method: String,

    /// Output path for JSON results.
    #[arg(short = 'o', long, default_value = "results.json", value_name = "FILE")]
    pub output: PathBuf,

    /// Probe every catalog method against every target in the wordlist.
    #[arg(long)]
    pub combine: bool,

    /// Cap on in-flight probes; 0 launches one task per (url, method) pair.
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub concurrency: usize,
}

/// Read a wordlist file into a target list.
pub fn load_targets(path: &Path) -> io::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(split_targets(&raw))
}

/// Split raw wordlist content on newlines. Blank lines are kept on purpose:
/// they become work items that fail at the probe layer, they are never
/// pre-filtered here.
pub fn split_targets(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}
