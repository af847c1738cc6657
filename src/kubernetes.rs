use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client};
use tracing::warn;

use crate::metrics::{container_usage, list_pod_metrics};
use crate::usage::{aggregate, PodUsageSummary};

/// A namespace's usage snapshot: one summary per pod reporting metrics, in
/// the order the metrics API returned them, plus the measurement timestamp
/// the API attached.
#[derive(Debug)]
pub struct NamespaceUsage {
    pub pods: Vec<PodUsageSummary>,
    pub collected_at: Option<DateTime<Utc>>,
}

pub async fn fetch_namespace_usage(client: &Client, namespace: &str) -> Result<NamespaceUsage> {
    let items = list_pod_metrics(client, namespace).await?;
    let collected_at = items.iter().find_map(|item| item.timestamp);

    let mut pods = Vec::with_capacity(items.len());
    for item in items {
        // A conformant API server always names list items
        let Some(name) = item.metadata.name.clone() else {
            warn!("skipping pod metrics item without a name");
            continue;
        };
        let records = container_usage(&item)
            .with_context(|| format!("invalid usage data for pod {}/{}", namespace, name))?;
        pods.push(aggregate(name, records));
    }
    Ok(NamespaceUsage { pods, collected_at })
}

/// Counts all pods present in the namespace, whatever their phase; the report
/// header compares this against how many pods reported metrics.
pub async fn count_namespace_pods(client: &Client, namespace: &str) -> Result<usize> {
    let pod_api: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pods = pod_api
        .list(&ListParams::default())
        .await
        .with_context(|| format!("listing pods in namespace {}", namespace))?;
    Ok(pods.items.len())
}
