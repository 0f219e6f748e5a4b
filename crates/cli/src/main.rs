mod points;
mod provenance;
mod report;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use closest_pair::plane::rand::Bounds2;
use closest_pair::plane::{compare, PairCfg, Point};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::{current_git_rev, Sidecar};
use crate::report::RunReport;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest pair of points: brute force vs divide and conquer")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run both algorithms on sampled or CSV points and print a JSON report
    Run {
        /// Number of sampled points (ignored with --input)
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Lower coordinate bound (inclusive)
        #[arg(long, default_value_t = 1.0)]
        lo: f64,
        /// Upper coordinate bound (exclusive)
        #[arg(long, default_value_t = 50.0)]
        hi: f64,
        /// Sample real coordinates instead of integers
        #[arg(long)]
        continuous: bool,
        /// CSV with `x` and `y` columns
        #[arg(long)]
        input: Option<PathBuf>,
        /// Write the report here plus a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

struct RunArgs {
    n: usize,
    seed: u64,
    bounds: Bounds2,
    continuous: bool,
    input: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            n,
            seed,
            lo,
            hi,
            continuous,
            input,
            out,
        } => {
            let args = RunArgs {
                n,
                seed,
                bounds: Bounds2 { lo, hi },
                continuous,
                input,
                out,
            };
            let report = run(&args, cmd.tag)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Action::Report => report(cmd.tag),
    }
}

fn load_points(args: &RunArgs) -> Result<Vec<Point>> {
    match &args.input {
        Some(path) => points::read_csv(path),
        None => points::sample(args.n, args.seed, args.bounds, !args.continuous),
    }
}

fn run(args: &RunArgs, tag: Option<String>) -> Result<RunReport> {
    let pts = load_points(args)?;
    tracing::info!(n = pts.len(), seed = args.seed, input = ?args.input, tag = ?tag, "run");
    if pts.len() < 2 {
        bail!("need at least 2 points, got {}", pts.len());
    }

    let c = compare(&pts, PairCfg::default())?;
    tracing::info!(
        distance = c.rounded_brute(),
        elapsed_s = c.brute_time.as_secs_f64(),
        "brute_force"
    );
    tracing::info!(
        distance = c.rounded_divide(),
        elapsed_s = c.divide_time.as_secs_f64(),
        "divide_and_conquer"
    );
    if !c.agree {
        tracing::warn!(brute = c.brute.distance, divide = c.divide, "disagree");
    }

    let report = RunReport::new(pts.len(), &c, tag.clone());
    if let Some(out) = &args.out {
        write_report(out, &report, args, tag)?;
    }
    Ok(report)
}

fn write_report(out: &Path, report: &RunReport, args: &RunArgs, tag: Option<String>) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "n": report.n,
        "seed": args.seed,
        "bounds": [args.bounds.lo, args.bounds.hi],
        "continuous": args.continuous,
        "input": args.input,
    });
    let prov = Sidecar::new(out, params, tag).write()?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote report");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "tag": tag,
        "version": closest_pair::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(n: usize) -> RunArgs {
        RunArgs {
            n,
            seed: 3,
            bounds: Bounds2 { lo: 1.0, hi: 50.0 },
            continuous: false,
            input: None,
            out: None,
        }
    }

    #[test]
    fn run_sampled_points_agree() {
        let r = run(&args(200), None).unwrap();
        assert_eq!(r.n, 200);
        assert!(r.agree);
    }

    #[test]
    fn run_rejects_single_point() {
        let err = run(&args(1), None).unwrap_err();
        assert!(err.to_string().contains("at least 2 points"));
    }

    #[test]
    fn run_rejects_unbounded_continuous_range() {
        let mut a = args(10);
        a.continuous = true;
        a.bounds = Bounds2 {
            lo: -1e308,
            hi: 1e308,
        };
        let err = run(&a, None).unwrap_err();
        assert!(err.to_string().contains("bounds span must be finite"));
    }

    #[test]
    fn run_from_csv_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.csv");
        std::fs::write(&input, "x,y\n0,0\n3,4\n1,1\n").unwrap();
        let out = dir.path().join("out").join("report.json");
        let mut a = args(0);
        a.input = Some(input);
        a.out = Some(out.clone());
        let r = run(&a, Some("csv".into())).unwrap();
        assert_eq!(r.n, 3);
        assert_eq!(r.brute_force.distance, 1.41);
        assert!(out.exists());
        assert!(out.with_file_name("report.provenance.json").exists());
    }
}
