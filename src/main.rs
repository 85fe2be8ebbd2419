use clap::{CommandFactory, Parser};
use reqwest::Client;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use verbmap::config::{self, Cli};
use verbmap::{report, runner};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_client() -> reqwest::Result<Client> {
    // Recon targets frequently run self-signed or expired certificates; the
    // probe is about methods, not trust. No explicit timeout: a hung request
    // holds its task until the transport gives up.
    Client::builder()
        .danger_accept_invalid_certs(true)
        .user_agent(concat!("verbmap/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let client = match build_client() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("[-] Failed to build HTTP client: {}", err);
            return;
        }
    };

    if let Some(url) = cli.url.as_deref() {
        runner::scan_single_target(&client, url, cli.concurrency).await;
    } else if let Some(path) = cli.wordlist.as_deref() {
        let targets = match config::load_targets(path) {
            Ok(targets) => targets,
            Err(err) => {
                eprintln!("[-] Failed to read {}: {}", path.display(), err);
                return;
            }
        };

        let results = if cli.combine {
            runner::scan_targets_all_methods(&client, &targets, cli.concurrency).await
        } else {
            runner::scan_targets(&client, &targets, &cli.method, cli.concurrency).await
        };

        // Persistence is best effort: a failed write is logged, not fatal.
        match report::write_results(&results, &cli.output) {
            Ok(()) => println!("[+] Results saved to {}", cli.output.display()),
            Err(err) => warn!("{}", verbmap::http_probe::report(&err)),
        }
    } else {
        let _ = Cli::command().print_help();
    }
}
