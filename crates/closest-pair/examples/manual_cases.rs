//! Run the fixed manual point sets plus one seeded random set through both algorithms.
//!
//! Usage:
//!   cargo run -p closest-pair --example manual_cases

use closest_pair::prelude::*;

fn to_points(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

fn show(name: &str, points: &[Point]) {
    match compare(points, PairCfg::default()) {
        Ok(c) => println!(
            "{name}: n={} brute={} pair=({}, {}) ({}, {}) [{:?}] nlogn={} [{:?}] agree={}",
            points.len(),
            c.rounded_brute(),
            c.brute.a.x,
            c.brute.a.y,
            c.brute.b.x,
            c.brute.b.y,
            c.brute_time,
            c.rounded_divide(),
            c.divide_time,
            c.agree
        ),
        Err(e) => eprintln!("{name}: {e}"),
    }
}

fn main() {
    show(
        "case 1",
        &to_points(&[
            (32.0, 24.0),
            (34.0, 70.0),
            (77.0, 61.0),
            (37.0, 99.0),
            (26.0, 47.0),
            (16.0, 53.0),
        ]),
    );
    show(
        "case 2",
        &to_points(&[
            (82.0, 31.0),
            (67.0, 11.0),
            (80.0, 7.0),
            (25.0, 22.0),
            (84.0, 23.0),
            (21.0, 2.0),
            (24.0, 74.0),
            (21.0, 53.0),
            (28.0, 85.0),
            (12.0, 7.0),
        ]),
    );
    show(
        "case 3",
        &to_points(&[
            (94.0, 38.0),
            (35.0, 48.0),
            (18.0, 59.0),
            (33.0, 95.0),
            (57.0, 80.0),
            (34.0, 5.0),
            (71.0, 42.0),
            (42.0, 41.0),
            (75.0, 40.0),
            (81.0, 52.0),
            (99.0, 21.0),
            (74.0, 59.0),
            (83.0, 70.0),
            (17.0, 72.0),
            (22.0, 50.0),
            (51.0, 16.0),
            (12.0, 80.0),
            (57.0, 96.0),
            (7.0, 14.0),
            (5.0, 2.0),
        ]),
    );
    match draw_points(SampleCfg::default(), ReplayToken { seed: 2025, index: 0 }) {
        Ok(pts) => show("random 100", &pts),
        Err(e) => eprintln!("sampler: {e}"),
    }
}
