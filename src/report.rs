use chrono::{DateTime, SecondsFormat, Utc};

use crate::usage::PodUsageSummary;

/// Rendered view of a namespace's pod usage. Holds no I/O; the caller owns
/// where the text goes.
pub struct UsageReport {
    pub namespace: String,
    pub collected_at: Option<DateTime<Utc>>,
    pub pods: Vec<PodUsageSummary>,
    pub pods_in_namespace: usize,
}

impl UsageReport {
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        let mut header = format!(
            "Namespace {}: {} of {} pods reporting usage",
            self.namespace,
            self.pods.len(),
            self.pods_in_namespace
        );
        if let Some(at) = self.collected_at {
            header.push_str(&format!(
                " (measured {})",
                at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }
        lines.push(header);

        if self.pods.is_empty() {
            lines.push("No pod usage reported.".to_string());
        }
        for pod in &self.pods {
            let pad = " ".repeat(pod.pod.len());
            lines.push(format!(
                "{} => Number of containers in pod: {}",
                pod.pod, pod.containers
            ));
            lines.push(format!("{} ╚> Memory: {}", pad, pod.memory));
            lines.push(format!("{} ╚> CPU: {}", pad, pod.cpu));
        }

        lines.join("\n")
    }
}
