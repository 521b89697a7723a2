//! Rendering throughput for a catalog-sized `.luacheckrc`.

use cfx_luacheck::{render, to_pascal_case, LuaTable, LuaValue};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Roughly the size of the client std: ~6000 globals in one sequence.
fn catalog_table() -> LuaValue {
    let names: Vec<String> = (0..6000)
        .map(|i| to_pascal_case(&format!("GET_NATIVE_NUMBER_{i}")).unwrap())
        .collect();
    LuaValue::Table(LuaTable::new().with("read_globals", names))
}

fn bench_render(c: &mut Criterion) {
    let value = catalog_table();
    c.bench_function("render_read_globals_6000", |b| {
        b.iter(|| render(black_box(&value), 0))
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("to_pascal_case", |b| {
        b.iter(|| to_pascal_case(black_box("GET_GROUND_Z_FOR_3D_COORD")))
    });
}

criterion_group!(benches, bench_render, bench_normalize);
criterion_main!(benches);
