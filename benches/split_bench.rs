//! Benchmarks for sqlsplit.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use sqlsplit::{FnSinkProvider, SplitConfig, Splitter};

/// Builds a synthetic dump of roughly `size` bytes with a marker every
/// `table_every` bytes of filler.
fn synthetic_dump(size: usize, table_every: usize) -> Vec<u8> {
    let mut dump = Vec::with_capacity(size + 64);
    dump.extend_from_slice(b"-- synthetic dump\n");
    let mut table = 0usize;
    while dump.len() < size {
        dump.extend_from_slice(
            format!("-- Table structure for table `t{}`\n", table).as_bytes(),
        );
        table += 1;
        let mut filler = 0usize;
        while filler < table_every && dump.len() < size {
            // Deterministic pseudo-random row data
            let row = format!("INSERT INTO x VALUES ({});\n", filler * 7 + 13);
            dump.extend_from_slice(row.as_bytes());
            filler += row.len();
        }
    }
    dump
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        let dump = synthetic_dump(size, 16 * 1024);

        group.throughput(Throughput::Bytes(dump.len() as u64));
        group.bench_with_input(
            format!("dump_{}kb", size / 1024),
            &dump,
            |b, dump| {
                b.iter(|| {
                    let splitter = Splitter::new(SplitConfig::default());
                    let points: Vec<u64> = splitter
                        .scan(black_box(&dump[..]))
                        .collect::<Result<_, _>>()
                        .unwrap();
                    black_box(points.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_marker_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_density");
    let size = 1024 * 1024; // 1 MB

    for (name, table_every) in [("sparse", 256 * 1024), ("medium", 16 * 1024), ("dense", 1024)] {
        let dump = synthetic_dump(size, table_every);

        group.throughput(Throughput::Bytes(dump.len() as u64));
        group.bench_with_input(name, &dump, |b, dump| {
            b.iter(|| {
                let splitter = Splitter::new(SplitConfig::default());
                let provider = FnSinkProvider::new(|_seq| Ok(std::io::sink()));
                let summary = splitter.split_bytes(black_box(dump), provider).unwrap();
                black_box(summary.sink_count())
            });
        });
    }

    group.finish();
}

fn bench_read_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_sizes");
    let dump = synthetic_dump(1024 * 1024, 16 * 1024);

    for read_size in [1024, 8 * 1024, 64 * 1024] {
        group.throughput(Throughput::Bytes(dump.len() as u64));
        group.bench_with_input(
            format!("{}kb_reads", read_size / 1024),
            &dump,
            |b, dump| {
                let config = SplitConfig::default().with_read_size(read_size);
                b.iter(|| {
                    let splitter = Splitter::new(config.clone());
                    let provider = FnSinkProvider::new(|_seq| Ok(std::io::sink()));
                    let summary = splitter.split_bytes(black_box(dump), provider).unwrap();
                    black_box(summary.total_bytes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scan, bench_marker_density, bench_read_sizes);
criterion_main!(benches);
