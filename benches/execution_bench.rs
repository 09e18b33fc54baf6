use criterion::{criterion_group, criterion_main, Criterion};
use playwright_runner::command::{run_command, CommandOptions};
use playwright_runner::core::test_cmd::{build_arguments, TestOptions};
use playwright_runner::version::parse_version;
use std::hint::black_box;
use tokio::runtime::Runtime;

fn bench_parse_version(c: &mut Criterion) {
    c.bench_function("parse_version", |b| {
        b.iter(|| parse_version(black_box("v1.42.0-alpha-1700000000")))
    });
}

fn bench_build_arguments(c: &mut Criterion) {
    let options = TestOptions {
        config: "playwright.config.ts".to_string(),
        output: "../../dist/playwright/apps/web-e2e/test-results".to_string(),
        headed: true,
        browser: Some("firefox".to_string()),
        debug: false,
        reporter: Some("list".to_string()),
        workers: Some(1),
    };

    c.bench_function("build_arguments", |b| {
        b.iter(|| build_arguments(black_box(&options), black_box("src")))
    });
}

fn bench_run_command(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("run_command", |b| {
        b.to_async(&rt).iter(|| async {
            let _ = run_command("echo", ["bench"], CommandOptions::new().on_stdout(|_| {})).await;
        });
    });
}

criterion_group!(benches, bench_parse_version, bench_build_arguments, bench_run_command);
criterion_main!(benches);
