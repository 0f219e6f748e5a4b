//! `<stem>.provenance.json` sidecars for `run --out`.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Contents of one sidecar: code revision, where it was written from, the run
/// parameters, and the artifact it describes.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    tag: Option<String>,
    params: Value,
    report: String,
}

impl Sidecar {
    #[track_caller]
    pub fn new(report: &Path, params: Value, tag: Option<String>) -> Self {
        let loc = Location::caller();
        Self {
            code_rev: current_git_rev(),
            version: closest_pair::VERSION,
            callsite: Callsite {
                file: loc.file(),
                line: loc.line(),
            },
            tag,
            params,
            report: report.display().to_string(),
        }
    }

    /// Write next to the report; returns the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(Path::new(&self.report));
        std::fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `dir/report.json` → `dir/report.provenance.json`.
fn sidecar_path(report: &Path) -> PathBuf {
    let stem = report
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    report.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit hash from `GIT_COMMIT` (build or run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !out.status.success() {
                return None;
            }
            String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
