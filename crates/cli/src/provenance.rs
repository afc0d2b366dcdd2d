//! Provenance sidecars: `<stem>.provenance.json` next to every written artifact.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact.
#[derive(Debug, Serialize)]
pub struct RunInfo<'a> {
    pub command: &'a str,
    pub tag: Option<&'a str>,
    pub inputs: Vec<String>,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a, P: Serialize> {
    code_rev: String,
    lib_version: &'static str,
    callsite: Callsite,
    #[serde(flatten)]
    run: &'a RunInfo<'a>,
    params: &'a P,
    output: String,
}

/// Write the sidecar for `artifact`; returns its path.
#[track_caller]
pub fn write_sidecar<P: Serialize>(
    artifact: &Path,
    run: &RunInfo<'_>,
    params: &P,
) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: code_rev(),
        lib_version: bemtri::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        run,
        params,
        output: artifact.to_string_lossy().into_owned(),
    };
    // artifact was just written, so its directory exists
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), command = run.command, "provenance_written");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|o| o.status.success())
                .and_then(|o| String::from_utf8(o.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
