use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vertex_dfs::{GraphLayout, GraphToken, GraphTraversal, Vertex, VertexSet};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "vertex-dfs workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the traversal benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,
    },
    /// Run one traversal over a JSON graph description
    Walk {
        /// Path to a JSON `GraphLayout` with integer payloads
        #[arg(long)]
        graph: PathBuf,

        /// Start vertex index; omit to walk the empty graph
        #[arg(long)]
        start: Option<usize>,

        /// End vertex index (increasing-path only)
        #[arg(long)]
        end: Option<usize>,

        /// Operation to run
        #[arg(long, value_enum)]
        op: Op,

        /// Emit the result as JSON instead of plain lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Op {
    Print,
    Reachable,
    Max,
    Leaves,
    AllOdd,
    IncreasingPath,
}

/// Result of a `walk` in machine-readable form.
#[derive(Serialize)]
#[serde(untagged)]
enum WalkOutput {
    Values(Vec<i64>),
    Scalar(i64),
    Flag(bool),
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick } => run_benchmarks(quick)?,
        Commands::Walk {
            graph,
            start,
            end,
            op,
            json,
        } => walk(&graph, start, end, op, json)?,
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    tracing::info!("running traversal benchmarks");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", "traversal_benchmark"]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("failed to launch cargo bench")?;
    if !status.success() {
        bail!("traversal benchmarks failed");
    }
    tracing::info!("benchmarks finished in {:.2?}", start.elapsed());
    Ok(())
}

fn walk(path: &Path, start: Option<usize>, end: Option<usize>, op: Op, json: bool) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph {}", path.display()))?;
    let layout: GraphLayout<i64> = GraphLayout::from_json(&text)
        .with_context(|| format!("failed to parse graph {}", path.display()))?;
    tracing::info!(
        vertices = layout.len(),
        edges = layout.edge_count(),
        ?op,
        "loaded graph"
    );

    for index in start.iter().chain(end.iter()) {
        if *index >= layout.len() {
            bail!("vertex index {index} is out of bounds for {} vertices", layout.len());
        }
    }

    GraphToken::new(|mut token| -> Result<()> {
        let vertices = layout.allocate();
        layout.wire(&mut token, &vertices)?;
        let traversal = GraphTraversal::new(&token);
        let from = start.map(|i| &vertices[i]);
        let to = end.map(|i| &vertices[i]);

        let output = match op {
            Op::Print => {
                if json {
                    WalkOutput::Values(traversal.dfs(from).map(|v| *v.data()).collect())
                } else {
                    traversal.print_vertex_vals(from)?;
                    return Ok(());
                }
            }
            Op::Reachable => WalkOutput::Values(sorted_values(&traversal.reachable(from))),
            Op::Leaves => WalkOutput::Values(sorted_values(&traversal.leaves(from))),
            Op::Max => WalkOutput::Scalar(traversal.max(from)),
            Op::AllOdd => WalkOutput::Flag(traversal.all_odd(from)),
            Op::IncreasingPath => WalkOutput::Flag(traversal.has_strictly_increasing_path(from, to)?),
        };
        emit(&output, json)
    })
}

fn sorted_values(set: &VertexSet<'_, '_, i64>) -> Vec<i64> {
    let mut values: Vec<i64> = set.iter().map(Vertex::data).copied().collect();
    values.sort_unstable();
    values
}

fn emit(output: &WalkOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(output)?);
        return Ok(());
    }
    match output {
        WalkOutput::Values(values) => {
            for value in values {
                println!("{value}");
            }
        }
        WalkOutput::Scalar(value) => println!("{value}"),
        WalkOutput::Flag(flag) => println!("{flag}"),
    }
    Ok(())
}
