use anyhow::{bail, Context, Result};
use bemtri::mesh::Mesh;
use bemtri::{Element, NumParams, Triangle, VertexWeights};
use clap::{Parser, Subcommand};
use nalgebra::Vector3;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;

use provenance::{write_sidecar, RunInfo};
use report::{ElementReport, MeshDoc, MeshReport, ParamsDoc};

#[derive(Parser)]
#[command(name = "bemtri-cli")]
#[command(about = "Element geometry for the 3D displacement-discontinuity BEM")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Frame, SFM and collocation points of one triangle
    Element {
        #[arg(long, value_parser = parse_vec3)]
        v0: Vector3<f64>,
        #[arg(long, value_parser = parse_vec3)]
        v1: Vector3<f64>,
        #[arg(long, value_parser = parse_vec3)]
        v2: Vector3<f64>,
        /// Edge-partition weights w0,w1,w2 (uniform if omitted)
        #[arg(long, value_parser = parse_vec3)]
        weights: Option<Vector3<f64>>,
        #[arg(long, default_value_t = bemtri::cfg::DEFAULT_BETA)]
        beta: f64,
        /// Write JSON here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Collocation points of every element in a JSON mesh
    Mesh {
        #[arg(long)]
        input: String,
        #[arg(long, value_parser = parse_vec3)]
        weights: Option<Vector3<f64>>,
        #[arg(long, default_value_t = bemtri::cfg::DEFAULT_BETA)]
        beta: f64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Element {
            v0,
            v1,
            v2,
            weights,
            beta,
            out,
        } => element(Triangle::new(v0, v1, v2), weights, beta, out, cmd.tag),
        Action::Mesh {
            input,
            weights,
            beta,
            out,
        } => mesh(input, weights, beta, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

/// Parse `x,y,z`.
fn parse_vec3(s: &str) -> Result<Vector3<f64>, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma-separated numbers, got {s:?}"));
    }
    let mut v = Vector3::zeros();
    for (k, p) in parts.iter().enumerate() {
        v[k] = p.parse::<f64>().map_err(|e| format!("{p:?}: {e}"))?;
    }
    Ok(v)
}

fn params_from(weights: Option<Vector3<f64>>, beta: f64) -> Result<NumParams> {
    let params = NumParams::default().with_beta(beta);
    Ok(match weights {
        Some(w) => params.with_weights(VertexWeights::new([w.x, w.y, w.z])?),
        None => params,
    })
}

fn element(
    tri: Triangle,
    weights: Option<Vector3<f64>>,
    beta: f64,
    out: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(beta, weighted = weights.is_some(), tag = ?tag, "element");
    let params = params_from(weights, beta)?;
    let el = Element::new(tri, &params).context("building element")?;
    let body = serde_json::to_vec_pretty(&ElementReport::from_element(&el, &params))?;
    match out {
        Some(out) => {
            write_output(&out, &body)?;
            let run = RunInfo {
                command: "element",
                tag: tag.as_deref(),
                inputs: Vec::new(),
            };
            write_sidecar(Path::new(&out), &run, &ParamsDoc::from(&params))?;
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    Ok(())
}

fn mesh(
    input: String,
    weights: Option<Vector3<f64>>,
    beta: f64,
    out: String,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input, out, beta, tag = ?tag, "mesh");
    let params = params_from(weights, beta)?;
    let raw = std::fs::read(&input).with_context(|| format!("reading {input}"))?;
    let doc: MeshDoc = serde_json::from_slice(&raw).with_context(|| format!("parsing {input}"))?;
    if doc.conn.is_empty() {
        bail!("mesh {input} has no elements");
    }
    let m = Mesh::from_rows(&doc.nodes, doc.conn).context("validating connectivity")?;
    // every element must admit a frame, not just collocation points
    let els = m.elements(&params).context("building elements")?;
    let points: Vec<Vector3<f64>> = els.iter().flat_map(|el| el.colloc).collect();
    tracing::info!(
        nodes = m.n_nodes(),
        elements = m.n_elements(),
        points = points.len(),
        "mesh_collocation"
    );
    let body = serde_json::to_vec_pretty(&MeshReport::new(&m, &params, &points))?;
    write_output(&out, &body)?;
    let run = RunInfo {
        command: "mesh",
        tag: tag.as_deref(),
        inputs: vec![input],
    };
    write_sidecar(Path::new(&out), &run, &ParamsDoc::from(&params))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "lib_version": bemtri::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_output(out: &str, body: &[u8]) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, body).with_context(|| format!("writing {out}"))?;
    Ok(())
}
