//! Decode throughput over a synthetic multi-block survey file.

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vamas::parser::VamasParser;

fn synthetic_file(blocks: usize, samples: usize) -> String {
    let mut lines: Vec<String> = [
        "VAMAS Surface Chemical Analysis Standard Data Transfer Format 1988 May 4",
        "Bench Institute",
        "Bench 1000",
        "operator",
        "throughput",
        "0",
        "NORM",
        "REGULAR",
        "1",
        "0",
        "0",
        "0",
        "0",
        "0",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    lines.push(blocks.to_string());

    for b in 0..blocks {
        lines.extend(
            [
                &format!("region {b}"),
                "sample",
                "2020",
                "6",
                "15",
                "12",
                "0",
                "0",
                "0",
                "0",
                "XPS",
                "Al Ka",
                "1486.6",
                "300",
                "1",
                "1",
                "54.4",
                "180",
                "FAT",
                "50",
                "1",
                "4.5",
                "0",
                "1",
                "1",
                "0",
                "0",
                "In",
                "3d",
                "-1",
                "kinetic energy",
                "eV",
                "1200.0",
                "-0.1",
                "1",
                "counts",
                "c/s",
                "pulse counting",
                "0.1",
                "1",
                "0",
                "0",
                "0",
                "0",
                "0",
            ]
            .iter()
            .map(|s| s.to_string()),
        );
        lines.push(samples.to_string());
        lines.push("0".to_string());
        lines.push("1".to_string());
        for k in 0..samples {
            lines.push(((k * 13 % 9973) as f64).to_string());
        }
    }
    lines.join("\n")
}

fn bench_decode(c: &mut Criterion) {
    let small = synthetic_file(1, 1024);
    let survey = synthetic_file(16, 4096);

    c.bench_function("decode_1_block_1k_points", |b| {
        b.iter(|| {
            let parser = VamasParser::from_reader(Cursor::new(black_box(small.as_bytes()))).unwrap();
            black_box(parser.experiment().blocks.len())
        })
    });

    c.bench_function("decode_16_blocks_4k_points", |b| {
        b.iter(|| {
            let parser =
                VamasParser::from_reader(Cursor::new(black_box(survey.as_bytes()))).unwrap();
            black_box(parser.experiment().blocks.len())
        })
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
