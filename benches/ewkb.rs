use geo::polygon;

use criterion::{criterion_group, criterion_main, Criterion};
use geo_ewkb::geometry::{MultiPolygon, Polygon};
use geo_ewkb::io::wkb::{from_ewkb, to_ewkb};
use geo_ewkb::value::MultiPolygonValue;

fn create_data() -> MultiPolygon {
    // An L shape
    let poly: Polygon = polygon![
        (x: 0.0, y: 0.0),
        (x: 4.0, y: 0.0),
        (x: 4.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 4.0),
        (x: 0.0, y: 4.0),
        (x: 0.0, y: 0.0),
    ]
    .into();
    MultiPolygon::new(vec![poly; 1000])
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let ewkb = to_ewkb(&data, 4326).unwrap();
    let value = MultiPolygonValue::new(data.clone());
    let hex_ewkb = value.encode().unwrap().unwrap();

    c.bench_function("encode MultiPolygon as EWKB", |b| {
        b.iter(|| {
            let _ewkb = to_ewkb(&data, 4326).unwrap();
        })
    });
    c.bench_function("decode EWKB to MultiPolygon", |b| {
        b.iter(|| {
            let _geom = from_ewkb(&ewkb).unwrap();
        })
    });
    c.bench_function("encode MultiPolygonValue as hex EWKB", |b| {
        b.iter(|| {
            let _hex = value.encode().unwrap();
        })
    });
    c.bench_function("decode hex EWKB into MultiPolygonValue", |b| {
        b.iter(|| {
            let _value: MultiPolygonValue = hex_ewkb.parse().unwrap();
        })
    });
    c.bench_function("format MultiPolygonValue as WKT", |b| {
        b.iter(|| {
            let _wkt = value.text_form();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
