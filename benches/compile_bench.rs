use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use suite_runner::core::command::compile;
use suite_runner::core::models::{Environment, Mode, Project, RunOptions, TestTag};

fn bench_compile(c: &mut Criterion) {
    let options = RunOptions {
        environment: Environment::Stage,
        mode: Mode::Ui,
        projects: vec![
            Project::Chrome,
            Project::Safari,
            Project::MobileChrome,
            Project::MobileSafari,
        ],
        tags: vec![TestTag::Login, TestTag::Smoke, TestTag::Regression],
    };

    c.bench_function("compile_run_options", |b| {
        b.iter(|| compile(black_box(&options)));
    });
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
