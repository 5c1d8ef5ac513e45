//! Command-line driver: draws a random conjecture, hunts for a
//! counterexample and writes a JSON report plus Graphviz artifacts.

mod export;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use graph_falsifier::generator::random_conjecture;
use graph_falsifier::{CounterexampleSearch, EdgeBudget, Graph, SearchConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::export::{save_dot, Artifacts, RunReport};

#[derive(Parser, Debug)]
#[command(name = "falsify")]
#[command(about = "Search for graphs that break a random invariant conjecture")]
struct Args {
    /// Number of vertices
    #[arg(long, default_value_t = 20)]
    n: usize,

    /// Edge probability of each restart's random seed graph
    #[arg(long, default_value_t = 0.2)]
    p: f64,

    /// Independent restarts
    #[arg(long, default_value_t = 8)]
    tries: usize,

    /// Local-search steps per restart
    #[arg(long, default_value_t = 1200)]
    steps: usize,

    /// Probability of accepting a worse graph
    #[arg(long, default_value_t = 0.05)]
    temperature: f64,

    /// Let the edge count drift instead of pinning it to a quarter of all pairs
    #[arg(long)]
    no_edge_budget: bool,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output directory
    #[arg(long, default_value = "results")]
    out: PathBuf,

    /// Also write the successful restart's step trace as CSV
    #[arg(long)]
    trace: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let start = Instant::now();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    info!(
        n = args.n,
        p = args.p,
        tries = args.tries,
        steps = args.steps,
        seed = args.seed,
        "params"
    );

    let example = Graph::erdos_renyi(args.n, args.p, &mut rng)?;
    let example_name = format!("example_graph_n{}_p{}_seed{}.dot", args.n, args.p, args.seed);
    save_dot(&example, "example", &args.out.join(&example_name))?;
    info!(path = %args.out.join(&example_name).display(), "example graph saved");

    let conjecture = random_conjecture(args.n, &mut rng);
    info!("conjecture: {conjecture}");

    let config = SearchConfig {
        vertices: args.n,
        edge_probability: args.p,
        tries: args.tries,
        steps: args.steps,
        temperature: args.temperature,
        edge_budget: if args.no_edge_budget {
            EdgeBudget::Disabled
        } else {
            EdgeBudget::QuarterOfMax
        },
    };
    let search = CounterexampleSearch::new(config)?;
    let found = search.find(&conjecture, &mut rng)?;

    let mut artifacts = Artifacts {
        example_dot: example_name,
        counterexample_dot: None,
        trace_csv: None,
    };
    match &found {
        Some(ce) => {
            let dot_name = format!("counterexample_seed{}.dot", args.seed);
            save_dot(&ce.graph, "counterexample", &args.out.join(&dot_name))?;
            artifacts.counterexample_dot = Some(dot_name);
            if args.trace {
                let csv_name = format!("trace_seed{}.csv", args.seed);
                let path = args.out.join(&csv_name);
                let file = fs::File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                ce.outcome.write_trace_csv(std::io::BufWriter::new(file))?;
                artifacts.trace_csv = Some(csv_name);
            }
            info!(
                nodes = ce.graph.num_vertices(),
                edges = ce.graph.edge_count(),
                invariants = ?ce.invariants,
                "counterexample found"
            );
        }
        None => warn!("no counterexample found within the tested limits"),
    }

    let report = RunReport {
        seed: args.seed,
        n: args.n,
        p: args.p,
        tries: args.tries,
        steps: args.steps,
        conjecture: RunReport::conjecture_summary(&conjecture),
        found_counterexample: found.is_some(),
        counterexample: found.as_ref().map(RunReport::counterexample_summary),
        elapsed_seconds: start.elapsed().as_secs_f64(),
        artifacts,
    };
    let path = report.save(&args.out)?;
    info!(
        found = report.found_counterexample,
        elapsed_seconds = report.elapsed_seconds,
        path = %path.display(),
        "run saved"
    );
    Ok(())
}
