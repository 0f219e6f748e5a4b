//! JSON report for one `run`.

use closest_pair::plane::{Comparison, Point};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BruteReport {
    pub distance: f64,
    pub pair: [[f64; 2]; 2],
    pub seconds: f64,
}

#[derive(Debug, Serialize)]
pub struct DivideReport {
    pub distance: f64,
    pub seconds: f64,
}

/// Rounded distances, the brute-force pair, timings and agreement.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub tag: Option<String>,
    pub n: usize,
    pub brute_force: BruteReport,
    pub divide_and_conquer: DivideReport,
    pub agree: bool,
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

impl RunReport {
    pub fn new(n: usize, c: &Comparison, tag: Option<String>) -> Self {
        Self {
            tag,
            n,
            brute_force: BruteReport {
                distance: c.rounded_brute(),
                pair: [xy(c.brute.a), xy(c.brute.b)],
                seconds: c.brute_time.as_secs_f64(),
            },
            divide_and_conquer: DivideReport {
                distance: c.rounded_divide(),
                seconds: c.divide_time.as_secs_f64(),
            },
            agree: c.agree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use closest_pair::plane::{compare, PairCfg};
    use closest_pair::Vec2;

    #[test]
    fn report_rounds_and_keeps_pair() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), Vec2::new(1.0, 1.0)];
        let c = compare(&pts, PairCfg::default()).unwrap();
        let r = RunReport::new(pts.len(), &c, Some("demo".into()));
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["n"], 3);
        assert_eq!(v["tag"], "demo");
        assert_eq!(v["brute_force"]["distance"], 1.41);
        assert_eq!(v["divide_and_conquer"]["distance"], 1.41);
        assert_eq!(v["brute_force"]["pair"][1][0], 1.0);
        assert_eq!(v["agree"], true);
    }
}
