use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::Client;
use serde::Deserialize;
use std::collections::HashMap;

use crate::quantity::{CpuQuantity, MemoryQuantity};
use crate::usage::ContainerUsage;

#[derive(Debug, Deserialize)]
pub struct ContainerMetrics {
    pub name: String,
    pub usage: HashMap<String, String>,
}

/// One item of the `metrics.k8s.io/v1beta1` pod metrics list, as serialized
/// by metrics-server.
#[derive(Debug, Deserialize)]
pub struct PodMetricsItem {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub window: Option<String>,
    pub containers: Vec<ContainerMetrics>,
}

#[derive(Debug, Deserialize)]
struct PodMetricsList {
    items: Vec<PodMetricsItem>,
}

/// Lists pod metrics for a namespace through the metrics API. The metrics
/// group has no typed client, so the request goes through the kube client as
/// a raw GET.
pub async fn list_pod_metrics(client: &Client, namespace: &str) -> Result<Vec<PodMetricsItem>> {
    use http::Request as HttpRequest;
    let path = format!("/apis/metrics.k8s.io/v1beta1/namespaces/{}/pods", namespace);
    let req = HttpRequest::builder()
        .method("GET")
        .uri(path)
        .body(Vec::new())
        .map_err(|e| anyhow!("build request: {}", e))?;
    match client.request::<PodMetricsList>(req).await {
        Ok(list) => Ok(list.items),
        Err(kube::Error::Api(err)) if err.code == 404 => Err(anyhow!(
            "metrics API (metrics.k8s.io/v1beta1) not found; is metrics-server installed in this cluster?"
        )),
        Err(e) => {
            Err(e).with_context(|| format!("listing pod metrics in namespace {}", namespace))
        }
    }
}

/// Converts one pod metrics item into usage records, one per container.
///
/// This is the only place raw measurement text becomes typed quantities. A
/// container with a missing or unparseable cpu/memory measurement fails the
/// whole item, with the container named; a partially summed pod would
/// misstate its usage.
pub fn container_usage(item: &PodMetricsItem) -> Result<Vec<ContainerUsage>> {
    item.containers
        .iter()
        .map(|container| {
            let cpu = container
                .usage
                .get("cpu")
                .ok_or_else(|| anyhow!("container {} reports no cpu usage", container.name))?;
            let memory = container
                .usage
                .get("memory")
                .ok_or_else(|| anyhow!("container {} reports no memory usage", container.name))?;
            Ok(ContainerUsage {
                cpu: CpuQuantity::parse(cpu)
                    .with_context(|| format!("bad cpu quantity for container {}", container.name))?,
                memory: MemoryQuantity::parse(memory).with_context(|| {
                    format!("bad memory quantity for container {}", container.name)
                })?,
            })
        })
        .collect()
}
