use bezier_spline::editor::ContinuityEditor;
use bezier_spline::proximity::{HitTestConfig, ProximityIndex};
use bezier_spline::spline::PointRef;
use bezier_spline::vector::Vector;
use criterion::{black_box, Criterion};
use crate::common::samples::{POINTS, SPLINES};

pub fn value(c: &mut Criterion) {
    c.bench_function("value", |b| {
        for spline in SPLINES.iter() {
            b.iter(|| black_box(spline.value(0.5)))
        }
    });
}

pub fn samples(c: &mut Criterion) {
    c.bench_function("samples", |b| {
        for spline in SPLINES.iter() {
            b.iter(|| black_box(spline.samples(0.01)))
        }
    });
}

pub fn curve_at(c: &mut Criterion) {
    let config = HitTestConfig::default();
    c.bench_function("curve_at", |b| {
        for spline in SPLINES.iter() {
            let index = ProximityIndex::new(spline, &config);
            for (x, y) in POINTS.iter() {
                let position = Vector::xy(*x, *y);
                b.iter(|| black_box(index.curve_at(&position)))
            }
        }
    });
}

pub fn move_point(c: &mut Criterion) {
    c.bench_function("move_point", |b| {
        for spline in SPLINES.iter() {
            let mut editor = ContinuityEditor::new(spline.clone());
            let at = PointRef::new(0, 3);
            b.iter(|| black_box(editor.move_point(at, Vector::xy(1.0, 2.0))))
        }
    });
}

pub fn all(c: &mut Criterion) {
    value(c);
    samples(c);
    curve_at(c);
    move_point(c);
}
