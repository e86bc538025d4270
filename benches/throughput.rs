use criterion::{criterion_group, criterion_main, Criterion};
use segrouter::path::tokenize;
use segrouter::{ActionController, Flavor, Router};
use serde_json::json;
use std::hint::black_box;

fn zoo_router(flavor: Flavor) -> Router {
    let mut router = Router::new(flavor).with_controller_prefix("Zoo");
    router.register_controller("Zoo\\IndexController", || {
        ActionController::new("Zoo\\IndexController")
            .with_action("indexAction", |_| Ok(json!("root")))
            .with_action("get", |_| Ok(json!("root")))
            .into_handle()
    });
    router.register_controller("Zoo\\AnimalsController", || {
        ActionController::new("Zoo\\AnimalsController")
            .with_action("showAction", |args| Ok(json!({ "id": args.first() })))
            .with_action("get", |args| Ok(json!({ "id": args.first() })))
            .with_action("put", |args| Ok(json!({ "updated": args.first() })))
            .into_handle()
    });
    router
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_short", |b| {
        b.iter(|| tokenize(black_box("/animals/42")))
    });
    c.bench_function("tokenize_messy", |b| {
        b.iter(|| tokenize(black_box("//zoo///animals/42/habitats/7/sections/3?x=1&y=2")))
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let mvc = zoo_router(Flavor::Mvc);
    let rest = zoo_router(Flavor::Rest);

    c.bench_function("dispatch_mvc_index", |b| {
        b.iter(|| mvc.dispatch(black_box("/")))
    });
    c.bench_function("dispatch_mvc_action", |b| {
        b.iter(|| mvc.dispatch(black_box("/animals/show/42")))
    });
    c.bench_function("dispatch_rest_verb", |b| {
        b.iter(|| rest.dispatch_with_verb(black_box("/animals/42"), black_box("PUT")))
    });
    c.bench_function("dispatch_not_found", |b| {
        b.iter(|| mvc.dispatch(black_box("/missing/route")))
    });
}

fn bench_nested(c: &mut Criterion) {
    let inner = zoo_router(Flavor::Rest);
    let middle = Router::rest().with_components([("v1", inner)]);
    let outer = Router::rest().with_components([("api", middle)]);

    c.bench_function("dispatch_two_components_deep", |b| {
        b.iter(|| outer.dispatch_with_verb(black_box("/api/v1/animals/42"), black_box("GET")))
    });
}

criterion_group!(benches, bench_tokenize, bench_dispatch, bench_nested);
criterion_main!(benches);
