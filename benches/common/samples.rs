use bezier_spline::editor::ContinuityEditor;
use bezier_spline::spline::Spline;
use bezier_spline::vector::Vector;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"({(random()-0.5)*i*100}, {(random()-0.5)*i*100})")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    (   0.0,      0.0  ),
    ( -29.734,   44.984),
    ( -52.560,   42.885),
    ( 142.777,   -2.652),
    ( 198.032,  -67.824),
    (  44.863,  -91.328),
    (-251.139,  -79.100),
    (-310.479,  -59.318),
    (-116.022, -295.591),
    (-107.946,   78.888),
];

pub static SPLINES: Lazy<Vec<Spline>> = Lazy::new(|| {
    (1..=4)
        .map(|len| draw((0..3 * len + 1).map(|i| POINTS[i % POINTS.len()])))
        .collect()
});

/// Feeds the points to an editor the way a pointer would and keeps the finished segments.
fn draw<I: Iterator<Item = (f64, f64)>>(points: I) -> Spline {
    let mut editor = ContinuityEditor::default();
    for (x, y) in points {
        editor.add_point(Vector::xy(x, y)).unwrap();
    }
    editor.remove_unfinished_curve().unwrap();
    editor.into_spline()
}
