use anyhow::Result;
use kube::Client;
use tracing::info;

mod config;
mod kubernetes;
mod metrics;
mod quantity;
mod report;
mod usage;

use config::load_config;
use kubernetes::{count_namespace_pods, fetch_namespace_usage};
use report::UsageReport;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cfg = load_config()?;
    info!("namespace = {}", cfg.namespace);

    let client = Client::try_default().await?;

    let usage = fetch_namespace_usage(&client, &cfg.namespace).await?;
    let pods_in_namespace = count_namespace_pods(&client, &cfg.namespace).await?;
    info!(
        "{} of {} pods reported usage",
        usage.pods.len(),
        pods_in_namespace
    );

    let report = UsageReport {
        namespace: cfg.namespace,
        collected_at: usage.collected_at,
        pods: usage.pods,
        pods_in_namespace,
    };
    println!("{}", report.render());

    Ok(())
}

fn init_tracing() {
    // Logs go to stderr; the rendered report owns stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
