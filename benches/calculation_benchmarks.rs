//! Performance benchmarks for the Cart Totals Engine.
//!
//! Covers the pure totals calculation at several cart sizes and the full
//! `/totals` request path through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use cart_totals::api::{AppState, TotalsRequest, create_router};
use cart_totals::calculation::calculate_total;
use cart_totals::config::ConfigLoader;
use cart_totals::models::CartItem;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/demo-store").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a cart with `item_count` lines; every third line is tax-exempt.
fn create_cart(item_count: usize) -> Vec<CartItem> {
    (0..item_count)
        .map(|i| CartItem {
            price: Decimal::new(199 + (i as i64 * 37) % 5000, 2),
            quantity: (i % 4) as u32 + 1,
            is_tax_exempt: i % 3 == 0,
        })
        .collect()
}

/// Benchmark: totals for carts of increasing size, without HTTP.
fn bench_calculate_total_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_total");
    let discount = Decimal::new(125, 1);
    let tax_rate = Decimal::new(85, 1);

    for item_count in [1, 10, 100, 1000].iter() {
        let items = create_cart(*item_count);

        group.throughput(Throughput::Elements(*item_count as u64));
        group.bench_with_input(BenchmarkId::new("items", item_count), &items, |b, items| {
            b.iter(|| black_box(calculate_total(black_box(items), discount, tax_rate).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: a single `/totals` request through the router.
fn bench_totals_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let request = TotalsRequest {
        items: create_cart(10),
        discount_percent: Some(Decimal::TEN),
        tax_rate: None,
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("totals_request_10_items", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/totals")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_calculate_total_scaling, bench_totals_request);
criterion_main!(benches);
