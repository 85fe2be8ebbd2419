use std::sync::Arc;

use reqwest::Client;
use tokio::sync::{Semaphore, mpsc};
use tracing::debug;

use crate::http_probe::probe::probe;
use crate::http_probe::result::ProbeResult;
use crate::http_probe::{ProbeError, report};
use crate::methods::METHOD_CATALOG;

/// "Method not supported" noise, excluded from persisted result sets.
const STATUS_METHOD_NOT_ALLOWED: u16 = 405;

/// One (target, method) pair to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub url: String,
    pub method: String,
}

/// Cross product of targets and methods, target-major order.
pub fn work_items(targets: &[String], methods: &[&str]) -> Vec<WorkItem> {
    targets
        .iter()
        .flat_map(|url| {
            methods.iter().map(move |method| WorkItem {
                url: url.clone(),
                method: (*method).to_string(),
            })
        })
        .collect()
}

/// Launch one task per work item and hand back the receiving end of the
/// outcome channel. The channel closes once every task has sent its outcome,
/// so draining the receiver doubles as the join barrier.
///
/// `cap` bounds the number of in-flight probes; 0 leaves the fan-out
/// unbounded (the classic one-task-per-pair shape).
fn fan_out(
    client: &Client,
    items: Vec<WorkItem>,
    cap: usize,
) -> mpsc::UnboundedReceiver<Result<ProbeResult, ProbeError>> {
    let (tx, rx) = mpsc::unbounded_channel();
    let permits = (cap > 0).then(|| Arc::new(Semaphore::new(cap)));

    for item in items {
        let client = client.clone();
        let tx = tx.clone();
        let permits = permits.clone();
        tokio::spawn(async move {
            let _permit = match permits {
                Some(semaphore) => semaphore.acquire_owned().await.ok(),
                None => None,
            };
            let outcome = probe(&client, &item.url, &item.method).await;
            // The receiver only goes away if the caller gave up on the batch.
            let _ = tx.send(outcome);
        });
    }

    rx
}

/// Drain every outcome from a fan-out, keeping successes whose status is not
/// 405. Failed probes are dropped, best effort: logged at debug, counted, and
/// otherwise invisible to the caller.
async fn collect_filtered(
    mut rx: mpsc::UnboundedReceiver<Result<ProbeResult, ProbeError>>,
) -> Vec<ProbeResult> {
    let mut results = Vec::new();
    let mut dropped = 0usize;

    while let Some(outcome) = rx.recv().await {
        match outcome {
            Ok(res) if res.status != STATUS_METHOD_NOT_ALLOWED => results.push(res),
            Ok(_) => {}
            Err(err) => {
                dropped += 1;
                debug!("probe dropped: {}", report(&err));
            }
        }
    }

    if dropped > 0 {
        debug!(dropped, "probes failed and were dropped");
    }
    results
}

/// Single-target mode: probe every catalog method against one URL, printing
/// each accepted method as its round-trip completes. Nothing is persisted and
/// nothing is filtered.
pub async fn scan_single_target(client: &Client, url: &str, cap: usize) {
    println!("[*] Probing HTTP methods on: {}", url);

    let target = [url.to_string()];
    let mut rx = fan_out(client, work_items(&target, &METHOD_CATALOG), cap);

    while let Some(outcome) = rx.recv().await {
        match outcome {
            Ok(res) => println!("[{}] {} ({} bytes)", res.method, res.status, res.length),
            Err(err) => debug!("probe dropped: {}", report(&err)),
        }
    }
}

/// Multi-target, single-method mode: probe one method against every target
/// and collect the filtered results.
pub async fn scan_targets(
    client: &Client,
    targets: &[String],
    method: &str,
    cap: usize,
) -> Vec<ProbeResult> {
    println!("[*] Probing {} on {} targets...", method, targets.len());
    collect_filtered(fan_out(client, work_items(targets, &[method]), cap)).await
}

/// Multi-target, all-methods mode: the full targets x catalog cross product.
pub async fn scan_targets_all_methods(
    client: &Client,
    targets: &[String],
    cap: usize,
) -> Vec<ProbeResult> {
    println!(
        "[*] Probing all {} catalog methods on {} targets...",
        METHOD_CATALOG.len(),
        targets.len()
    );
    collect_filtered(fan_out(client, work_items(targets, &METHOD_CATALOG), cap)).await
}
