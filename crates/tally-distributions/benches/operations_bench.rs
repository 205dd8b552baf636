use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tally_core::Distribution;
use tally_distributions::{add, fit_curve, make_distribution, scale, AnyDistribution};

fn bench_fit(c: &mut Criterion) {
    c.bench_function("fit_curve_10_75", |b| {
        b.iter(|| fit_curve(black_box(10.0), black_box(75.0)).unwrap());
    });
    c.bench_function("make_distribution_range", |b| {
        b.iter(|| make_distribution(black_box("(10-75)")).unwrap());
    });
}

fn bench_add(c: &mut Criterion) {
    let x: AnyDistribution = fit_curve(10.0, 75.0).unwrap().into();
    let y: AnyDistribution = fit_curve(5.0, 20.0).unwrap().into();
    let xy = add(&x, &y);

    c.bench_function("add_log_logistic_pair", |b| {
        b.iter(|| add(black_box(&x), black_box(&y)));
    });
    c.bench_function("add_tabulated_and_log_logistic", |b| {
        b.iter(|| add(black_box(&xy), black_box(&x)));
    });
    c.bench_function("scale_tabulated", |b| {
        b.iter(|| scale(black_box(&xy), black_box(150.0)).unwrap());
    });
    c.bench_function("quantile_tabulated", |b| {
        b.iter(|| xy.quantile(black_box(0.9)).unwrap());
    });
}

criterion_group!(benches, bench_fit, bench_add);
criterion_main!(benches);
