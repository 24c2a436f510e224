// Criterion benchmarks for Score Predict

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use score_predict::core::{FeatureVector, LinearModel, Predictor, Regressor, WeightedFormula};
use score_predict::models::PredictionRequest;

fn create_rows(count: usize) -> Vec<FeatureVector> {
    (0..count)
        .map(|i| FeatureVector::new((i % 41) as f64, (i % 101) as f64, (i % 11) as f64))
        .collect()
}

fn bench_predict_request(c: &mut Criterion) {
    let formula = Predictor::with_default_formula();
    let model = Predictor::new(LinearModel::new([1.62, 0.41, 3.87], 4.15));
    let req = PredictionRequest::new(10.0, 80.0, 5.0);

    c.bench_function("predict_formula", |b| {
        b.iter(|| formula.predict(black_box(&req)))
    });

    c.bench_function("predict_model", |b| {
        b.iter(|| model.predict(black_box(&req)))
    });
}

fn bench_regressor_batch(c: &mut Criterion) {
    let formula = WeightedFormula::with_default_weights();
    let model = LinearModel::new([1.62, 0.41, 3.87], 4.15);

    let mut group = c.benchmark_group("regressor_batch");

    for row_count in [1, 100, 10_000].iter() {
        let rows = create_rows(*row_count);

        group.bench_with_input(BenchmarkId::new("formula", row_count), &rows, |b, rows| {
            b.iter(|| formula.predict(black_box(rows)))
        });

        group.bench_with_input(BenchmarkId::new("linear_model", row_count), &rows, |b, rows| {
            b.iter(|| model.predict(black_box(rows)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_predict_request, bench_regressor_batch);

criterion_main!(benches);
