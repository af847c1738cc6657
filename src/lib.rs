// Public modules
pub mod config;
pub mod kubernetes;
pub mod metrics;
pub mod quantity;
pub mod report;
pub mod usage;

// Re-export commonly used items
pub use config::{load_config, load_config_with, Config, EnvironmentProvider, MockEnvironment, SystemEnvironment};
pub use kubernetes::{count_namespace_pods, fetch_namespace_usage, NamespaceUsage};
pub use metrics::{container_usage, list_pod_metrics, ContainerMetrics, PodMetricsItem};
pub use quantity::{CpuQuantity, MemoryQuantity, QuantityParseError};
pub use report::UsageReport;
pub use usage::{aggregate, ContainerUsage, PodUsageSummary};
