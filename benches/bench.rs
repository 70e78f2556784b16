//! Criterion benchmarks for coursefind.
//!
//! Covers the two hot paths of the search service:
//! - Ranked search over a synthetic catalog
//! - Autocomplete suggestion collection

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use coursefind::catalog::{Course, Experiment, Syllabus, Unit};
use coursefind::search::SearchService;

/// Generate a synthetic catalog for benchmarking.
fn generate_catalog(course_count: usize) -> Vec<Course> {
    let words = [
        "search",
        "sorting",
        "trees",
        "graphs",
        "hashing",
        "recursion",
        "dynamic",
        "greedy",
        "matrix",
        "strings",
        "queues",
        "stacks",
        "heaps",
        "tries",
        "flows",
        "geometry",
    ];

    (0..course_count)
        .map(|i| {
            let topic_a = words[i % words.len()];
            let topic_b = words[(i + 3) % words.len()];

            Course::new(
                format!("c{i}"),
                format!("6CS{i:03}CC22"),
                format!("Course on {topic_a} and {topic_b}"),
                format!("Covers {topic_a}, {topic_b}, and their applications"),
            )
            .with_syllabus(
                Syllabus::new()
                    .unit(
                        Unit::new(
                            1,
                            format!("Introduction to {topic_a}"),
                            format!("Basic {topic_a} techniques and analysis"),
                        )
                        .with_topics(vec![
                            format!("Basic {topic_a}"),
                            format!("Advanced {topic_a}"),
                        ]),
                    )
                    .unit(
                        Unit::new(
                            2,
                            format!("Applications of {topic_b}"),
                            format!("Case studies using {topic_b}"),
                        )
                        .with_topics(vec![format!("Applied {topic_b}")]),
                    )
                    .experiment(
                        Experiment::new(
                            1,
                            format!("{topic_a} lab"),
                            format!("Implement {topic_a} from scratch"),
                        )
                        .with_topics(vec![format!("{topic_a} implementation")]),
                    )
                    .reference(format!("Textbook of {topic_a}, 3rd edition")),
            )
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for course_count in [10, 100, 500] {
        let service = SearchService::new(generate_catalog(course_count));
        group.throughput(Throughput::Elements(course_count as u64));
        group.bench_function(format!("search_{course_count}_courses"), |b| {
            b.iter(|| {
                let results = service.search(black_box("search trees dynamic")).unwrap();
                black_box(results)
            })
        });
    }

    group.finish();
}

fn bench_suggestions(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggestions");

    for course_count in [10, 100, 500] {
        let service = SearchService::new(generate_catalog(course_count));
        group.throughput(Throughput::Elements(course_count as u64));
        group.bench_function(format!("suggest_{course_count}_courses"), |b| {
            b.iter(|| {
                let suggestions = service.quick_suggestions(black_box("adv"));
                black_box(suggestions)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_suggestions);
criterion_main!(benches);
