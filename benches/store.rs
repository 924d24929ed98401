//! Capture parsing and store lookup benchmarks.
//!
//! Lookups are on the request path of every emulated agent; parsing runs once
//! per instance at startup.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use snmposter::oid::Oid;
use snmposter::walk;
use snmposter::{MibView, OidStore};
use std::fmt::Write;
use std::hint::black_box;

/// A synthetic interface-table capture with `rows` rows of six columns.
fn synthetic_capture(rows: u32) -> String {
    let mut out = String::new();
    for row in 1..=rows {
        let _ = writeln!(out, ".1.3.6.1.2.1.2.2.1.1.{row} = INTEGER: {row}");
        let _ = writeln!(out, ".1.3.6.1.2.1.2.2.1.2.{row} = STRING: \"Gi0/{row}\"");
        let _ = writeln!(out, ".1.3.6.1.2.1.2.2.1.3.{row} = INTEGER: ethernetCsmacd(6)");
        let _ = writeln!(
            out,
            ".1.3.6.1.2.1.2.2.1.6.{row} = Hex-STRING: 00 1A 2B {:02X} {:02X} 5E",
            (row >> 8) & 0xFF,
            row & 0xFF
        );
        let _ = writeln!(out, ".1.3.6.1.2.1.2.2.1.10.{row} = Counter32: {}", row * 1000);
        let _ = writeln!(
            out,
            ".1.3.6.1.2.1.2.2.1.9.{row} = Timeticks: ({}) 0:00:{:02}.00",
            row * 100,
            row % 60
        );
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_parse");

    for rows in [100u32, 1_000, 8_000] {
        let capture = synthetic_capture(rows);
        group.throughput(Throughput::Bytes(capture.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_str", rows), &capture, |b, text| {
            b.iter(|| black_box(walk::parse_str(text)))
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_lookup");

    // ~48k records
    let store = OidStore::build(walk::parse_str(&synthetic_capture(8_000)).records)
        .expect("synthetic capture has unique identifiers");

    let hit = Oid::from_slice(&[1, 3, 6, 1, 2, 1, 2, 2, 1, 6, 4000]);
    let miss = Oid::from_slice(&[1, 3, 6, 1, 2, 1, 2, 2, 1, 4, 4000]);

    group.bench_function("get_hit", |b| b.iter(|| black_box(MibView::get(&store, &hit))));
    group.bench_function("get_miss", |b| {
        b.iter(|| black_box(MibView::get(&store, &miss)))
    });
    group.bench_function("get_next", |b| {
        b.iter(|| black_box(MibView::get_next(&store, &hit)))
    });

    group.throughput(Throughput::Elements(store.len() as u64));
    group.bench_function("full_walk", |b| {
        b.iter(|| {
            let mut cursor = Oid::empty();
            let mut n = 0usize;
            while let Some(vb) = MibView::get_next(&store, &cursor).into_varbind() {
                cursor = vb.oid;
                n += 1;
            }
            black_box(n)
        })
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let records = walk::parse_str(&synthetic_capture(8_000)).records;

    c.bench_function("store_build", |b| {
        b.iter(|| black_box(OidStore::build(records.iter().cloned()).unwrap()))
    });
}

criterion_group!(benches, bench_parse, bench_lookup, bench_build);
criterion_main!(benches);
