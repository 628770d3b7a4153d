// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsing throughput on synthetic multi-floor buildings
//!
//! Run with: cargo bench -p indoor-map-parser --bench parse

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use indoor_map_model::{IndoorParser, NoopListener};
use indoor_map_parser::MapParser;
use std::fmt::Write;

/// Generate a building with a grid of rooms per floor
fn generate_building(floors: usize, rooms_per_side: usize) -> String {
    let size = rooms_per_side * 5;
    let mut xml = String::new();
    let _ = writeln!(xml, r#"<map width="{size}" depth="{size}"><floors>"#);

    for f in 0..floors {
        let _ = writeln!(
            xml,
            r#"<floor atHeight="{}" height="3" name="floor-{f}"><outline>"#,
            f * 4
        );
        let _ = writeln!(
            xml,
            r#"<polygon name="all" method="0"><point x="0" y="0"/><point x="{size}" y="0"/><point x="{size}" y="{size}"/><point x="0" y="{size}"/></polygon></outline><obstacles>"#
        );

        for i in 0..=rooms_per_side {
            let at = i * 5;
            let _ = writeln!(
                xml,
                r#"<wall material="3" type="1" x1="0" y1="{at}" x2="{size}" y2="{at}"><door type="1" x01="0.3" width="0.9" heigth="2"/><window x01="0.7" y="1" width="1.2" height="1"/></wall>"#
            );
            let _ = writeln!(
                xml,
                r#"<wall material="1" type="1" x1="{at}" y1="0" x2="{at}" y2="{size}" thickness="0.2"><door type="3" x01="0.5" width="1" heigth="2" lr="true"/></wall>"#
            );
        }

        let _ = writeln!(xml, "</obstacles><accesspoints>");
        for i in 0..rooms_per_side {
            let _ = writeln!(
                xml,
                r#"<accesspoint name="AP-{f}-{i}" mac="00:00:00:00:{f:02x}:{i:02x}" x="{}" y="2.5" z="2.5" mdl_txp="-40" mdl_exp="2.5" mdl_waf="-8"/>"#,
                i * 5 + 2
            );
        }
        let _ = writeln!(xml, "</accesspoints><fingerprints>");
        for i in 0..rooms_per_side * rooms_per_side {
            let _ = writeln!(
                xml,
                r#"<location name="fp-{f}-{i}" x="{}" y="{}" dz="1.3"/>"#,
                (i % rooms_per_side) * 5 + 2,
                (i / rooms_per_side) * 5 + 2
            );
        }
        let _ = writeln!(xml, "</fingerprints></floor>");
    }

    xml.push_str("</floors></map>\n");
    xml
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = MapParser::new();

    let scenarios = [(1, 4, "small"), (4, 10, "medium"), (10, 20, "large")];

    for (floors, rooms, name) in scenarios {
        let xml = generate_building(floors, rooms);
        group.throughput(Throughput::Bytes(xml.len() as u64));

        group.bench_with_input(BenchmarkId::new("collect", name), &xml, |b, xml| {
            b.iter(|| parser.parse(black_box(xml)))
        });

        group.bench_with_input(BenchmarkId::new("walk_only", name), &xml, |b, xml| {
            b.iter(|| parser.parse_with_listener(black_box(xml), &mut NoopListener))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
