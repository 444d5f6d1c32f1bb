use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use orthoproj_core::report::ProjectionReport;
use orthoproj_core::request::ProjectionRequest;
use orthoproj_core::solid::{CaseKind, RestingOn, Solid};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "orthoproj")]
#[command(about = "Step-by-step orthographic projections of regular prisms and pyramids.")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the construction steps and print them as JSON.
    Project {
        /// Start from a JSON request; flags below override its fields.
        #[arg(long)]
        request: Option<PathBuf>,
        /// e.g. hexagonal-prism, triangular-pyramid
        #[arg(long)]
        solid: Option<Solid>,
        /// A, B, C or D
        #[arg(long)]
        case: Option<CaseKind>,
        #[arg(long)]
        base_edge: Option<f64>,
        #[arg(long)]
        axis_length: Option<f64>,
        #[arg(long)]
        edge_angle: Option<f64>,
        #[arg(long)]
        axis_angle_hp: Option<f64>,
        #[arg(long)]
        axis_angle_vp: Option<f64>,
        /// base-edge or base-corner
        #[arg(long)]
        resting_on: Option<RestingOn>,
        #[arg(long)]
        canvas_width: Option<f64>,
        #[arg(long)]
        canvas_height: Option<f64>,
        /// Emit only this step (1-based).
        #[arg(long)]
        step: Option<usize>,
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print a per-step table instead of JSON.
        #[arg(long)]
        summary: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Project {
            request,
            solid,
            case,
            base_edge,
            axis_length,
            edge_angle,
            axis_angle_hp,
            axis_angle_vp,
            resting_on,
            canvas_width,
            canvas_height,
            step,
            output,
            summary,
        } => {
            let base = match request.as_deref() {
                Some(path) => load_request(path)?,
                None => ProjectionRequest::default(),
            };
            let req = ProjectionRequest {
                solid: solid.unwrap_or(base.solid),
                case: case.unwrap_or(base.case),
                base_edge: base_edge.unwrap_or(base.base_edge),
                axis_length: axis_length.unwrap_or(base.axis_length),
                edge_angle: edge_angle.unwrap_or(base.edge_angle),
                axis_angle_hp: axis_angle_hp.unwrap_or(base.axis_angle_hp),
                axis_angle_vp: axis_angle_vp.unwrap_or(base.axis_angle_vp),
                resting_on: resting_on.unwrap_or(base.resting_on),
                canvas_width: canvas_width.unwrap_or(base.canvas_width),
                canvas_height: canvas_height.unwrap_or(base.canvas_height),
            };
            project(&req, step, output.as_deref(), summary)
        }
    }
}

fn project(req: &ProjectionRequest, step: Option<usize>, output: Option<&Path>, summary: bool) -> Result<()> {
    let report = orthoproj_engine::project(req)
        .with_context(|| format!("project {} in case {}", req.solid, req.case))?;

    let text = if summary {
        summarize(&report)
    } else if let Some(number) = step {
        let Some(found) = report.step(number) else {
            bail!("step {number} out of range (1..={})", report.total_steps);
        };
        serde_json::to_string_pretty(found).context("serialize step")?
    } else {
        serde_json::to_string_pretty(&report).context("serialize report")?
    };

    if let Some(path) = output {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        std::fs::write(path, &text).with_context(|| format!("write output: {path:?}"))?;
        info!(path = ?path, steps = report.total_steps, "wrote projection");
    } else {
        println!("{text}");
    }
    Ok(())
}

fn summarize(report: &ProjectionReport) -> String {
    let mut out = String::new();
    if let Some(beta) = report.metadata.computed_beta {
        out.push_str(&format!("beta = {beta}°\n"));
    }
    for step in &report.steps {
        let extents = step
            .extents()
            .map(|b| format!("{:.1}x{:.1} at ({:.1}, {:.1})", b.width(), b.height(), b.min.x, b.min.y))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:>2}  {:<60}  {:>4} primitives  {}\n",
            step.number,
            step.title,
            step.primitives.len(),
            extents
        ));
    }
    out
}

fn load_request(path: &Path) -> Result<ProjectionRequest> {
    ensure_input_file(path)?;
    let text = std::fs::read_to_string(path).with_context(|| format!("read request: {path:?}"))?;
    serde_json::from_str(&text).with_context(|| format!("parse request: {path:?}"))
}

fn ensure_input_file(input: &Path) -> Result<()> {
    match std::fs::metadata(input) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => bail!("request is not a file: {input:?}"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            bail!("request not found: {input:?} (cwd: {cwd:?}).");
        }
        Err(err) => Err(err).with_context(|| format!("stat request: {input:?}")),
    }
}
