use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kube_usage_reporter::{CpuQuantity, MemoryQuantity};

fn cpu_parsing_benchmark(c: &mut Criterion) {
    let test_values = vec![
        "100m",
        "1",
        "0.5",
        "2.5",
        "1000000000n",
        "1000000u",
        "500m",
        "84730506n",
    ];

    c.bench_function("parse_cpu_quantity", |b| {
        b.iter(|| {
            for value in &test_values {
                black_box(CpuQuantity::parse(black_box(value)));
            }
        })
    });
}

fn memory_parsing_benchmark(c: &mut Criterion) {
    let test_values = vec![
        "1Ki", "1Mi", "1Gi", "1Ti", "1K", "1M", "1G", "1T", "512Mi", "2.5Gi",
    ];

    c.bench_function("parse_memory_quantity", |b| {
        b.iter(|| {
            for value in &test_values {
                black_box(MemoryQuantity::parse(black_box(value)));
            }
        })
    });
}

fn display_benchmark(c: &mut Criterion) {
    let cpu_values: Vec<CpuQuantity> = ["300m", "1", "84730506n", "123u"]
        .iter()
        .map(|v| v.parse().unwrap())
        .collect();
    let memory_values: Vec<MemoryQuantity> = ["256Mi", "1Gi", "1536", "300Ki"]
        .iter()
        .map(|v| v.parse().unwrap())
        .collect();

    c.bench_function("render_quantities", |b| {
        b.iter(|| {
            for value in &cpu_values {
                black_box(value.to_string());
            }
            for value in &memory_values {
                black_box(value.to_string());
            }
        })
    });
}

criterion_group!(
    benches,
    cpu_parsing_benchmark,
    memory_parsing_benchmark,
    display_benchmark
);
criterion_main!(benches);
