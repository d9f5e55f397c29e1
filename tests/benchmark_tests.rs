//! Performance benchmarks for the definition pipeline

use host::{validate_definition, DefinitionRequest, Resolver, ResolverConfig};
use serde_json::json;
use shared::GameDefinition;
use std::fs;
use std::time::Instant;

fn large_definition(class_count: usize, state_count: usize) -> GameDefinition {
    let classes: serde_json::Map<_, _> = (0..class_count)
        .map(|i| (format!("Class{}", i), json!({ "fields": { "value": "number" } })))
        .collect();
    let states: serde_json::Map<_, _> = (0..state_count)
        .map(|i| (format!("state{}", i), json!({ "on": {} })))
        .collect();

    serde_json::from_value(json!({
        "id": "benchmark",
        "name": "Benchmark",
        "schema": { "root": "Class0", "classes": classes },
        "machine": { "id": "bench", "initial": "state0", "states": states }
    }))
    .unwrap()
}

/// Benchmarks validation of a definition with many classes and states
#[test]
fn benchmark_validation() {
    let definition = large_definition(500, 500);

    let iterations = 100_000;
    let start = Instant::now();

    for _ in 0..iterations {
        assert!(validate_definition(&definition).is_ok());
    }

    let duration = start.elapsed();
    println!(
        "Validation: {} iterations in {:?} ({:.2} ns/iter)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    // Lookups only, should finish well under a second
    assert!(duration.as_millis() < 1000);
}

/// Benchmarks loading a DSL directory from disk
#[tokio::test]
async fn benchmark_directory_load() {
    let dir = tempfile::tempdir().unwrap();
    let definition = large_definition(200, 200);
    let schema = definition.schema.as_ref().unwrap();
    let machine = definition.machine.as_ref().unwrap();

    fs::write(
        dir.path().join("manifest.json"),
        json!({ "slug": "benchmark", "name": "Benchmark" }).to_string(),
    )
    .unwrap();
    fs::write(
        dir.path().join("schema.json"),
        serde_json::to_string(schema).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.path().join("machine.json"),
        serde_json::to_string(machine).unwrap(),
    )
    .unwrap();
    fs::write(dir.path().join("data.json"), "{}").unwrap();

    let resolver = Resolver::new(ResolverConfig::default().with_dsl_dir(dir.path()));

    let iterations = 200;
    let start = Instant::now();

    for _ in 0..iterations {
        let loaded = resolver
            .load(DefinitionRequest::new("benchmark"))
            .await
            .unwrap();
        assert_eq!(loaded.class_count(), 200);
    }

    let duration = start.elapsed();
    println!(
        "Directory load: {} iterations in {:?} ({:.2} μs/iter)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    // Should complete in under 5 seconds
    assert!(duration.as_millis() < 5000);
}
