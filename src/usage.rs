use crate::quantity::{CpuQuantity, MemoryQuantity};

/// One container's measured CPU and memory usage at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerUsage {
    pub cpu: CpuQuantity,
    pub memory: MemoryQuantity,
}

/// Per-pod total usage, summed across the pod's containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodUsageSummary {
    pub pod: String,
    pub cpu: CpuQuantity,
    pub memory: MemoryQuantity,
    pub containers: usize,
}

/// Folds container usage records into one summary for the named pod.
///
/// A pure fold from the zero quantities: record order does not affect the
/// totals, an empty sequence yields zero usage and a container count of 0,
/// and the operation cannot fail. The pod name travels as a separate argument
/// because the records themselves do not carry it.
pub fn aggregate<I>(pod: impl Into<String>, records: I) -> PodUsageSummary
where
    I: IntoIterator<Item = ContainerUsage>,
{
    let mut cpu = CpuQuantity::ZERO;
    let mut memory = MemoryQuantity::ZERO;
    let mut containers = 0;
    for record in records {
        cpu += record.cpu;
        memory += record.memory;
        containers += 1;
    }
    PodUsageSummary {
        pod: pod.into(),
        cpu,
        memory,
        containers,
    }
}
