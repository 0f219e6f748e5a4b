//! Input point sets for `run`: a CSV file with `x`/`y` columns or the seeded sampler.

use anyhow::{anyhow, Context, Result};
use closest_pair::plane::rand::{draw_points, Bounds2, ReplayToken, SampleCfg};
use closest_pair::plane::Point;
use closest_pair::Vec2;
use polars::prelude::*;
use std::path::Path;

/// Read points from a CSV with header columns `x` and `y` (any numeric type).
pub fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("row {row}: missing coordinate")),
        })
        .collect()
}

/// Draw `n` points from the sampler.
pub fn sample(n: usize, seed: u64, bounds: Bounds2, integer: bool) -> Result<Vec<Point>> {
    let cfg = SampleCfg {
        count: n,
        bounds,
        integer,
    };
    Ok(draw_points(cfg, ReplayToken { seed, index: 0 })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_integer_and_float_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n3,4\n1.5,1\n").unwrap();
        let pts = read_csv(&path).unwrap();
        assert_eq!(
            pts,
            vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), Vec2::new(1.5, 1.0)]
        );
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();
        assert!(read_csv(&path).is_err());
    }

    #[test]
    fn sample_is_seeded() {
        let b = Bounds2 { lo: 1.0, hi: 50.0 };
        assert_eq!(sample(10, 5, b, true).unwrap(), sample(10, 5, b, true).unwrap());
        assert!(sample(0, 5, b, true).is_err());
    }
}
