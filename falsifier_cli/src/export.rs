use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use graph_falsifier::{Conjecture, Counterexample, Graph, InvariantSnapshot};
use serde::Serialize;

const MAX_EXPORTED_EDGES: usize = 2000;

#[derive(Debug, Serialize)]
pub struct GraphSummary {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub edges: Vec<(usize, usize)>,
    pub edges_truncated: bool,
}

impl GraphSummary {
    pub fn of(graph: &Graph) -> Self {
        let mut edges = graph.edge_list();
        let edges_truncated = edges.len() > MAX_EXPORTED_EDGES;
        edges.truncate(MAX_EXPORTED_EDGES);
        GraphSummary {
            num_nodes: graph.num_vertices(),
            num_edges: graph.edge_count(),
            edges,
            edges_truncated,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConjectureSummary {
    pub premise: String,
    pub conclusion: String,
}

#[derive(Debug, Serialize)]
pub struct CounterexampleSummary {
    pub graph: GraphSummary,
    pub invariants: InvariantSnapshot,
    pub restart: usize,
}

#[derive(Debug, Serialize)]
pub struct Artifacts {
    pub example_dot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterexample_dot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_csv: Option<String>,
}

/// JSON summary of one run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub n: usize,
    pub p: f64,
    pub tries: usize,
    pub steps: usize,
    pub conjecture: ConjectureSummary,
    pub found_counterexample: bool,
    pub counterexample: Option<CounterexampleSummary>,
    pub elapsed_seconds: f64,
    pub artifacts: Artifacts,
}

impl RunReport {
    pub fn conjecture_summary(conjecture: &Conjecture) -> ConjectureSummary {
        ConjectureSummary {
            premise: conjecture.premise.to_string(),
            conclusion: conjecture.conclusion.to_string(),
        }
    }

    pub fn counterexample_summary(ce: &Counterexample) -> CounterexampleSummary {
        CounterexampleSummary {
            graph: GraphSummary::of(&ce.graph),
            invariants: ce.invariants,
            restart: ce.restart,
        }
    }

    pub fn file_name(&self) -> String {
        format!(
            "run_n{}_p{}_tries{}_steps{}_seed{}.json",
            self.n, self.p, self.tries, self.steps, self.seed
        )
    }

    pub fn save(&self, dir: &Path) -> Result<std::path::PathBuf> {
        let path = dir.join(self.file_name());
        let json = serde_json::to_string_pretty(self).context("serializing run report")?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// Graphviz rendering of an undirected graph; isolated vertices are kept.
pub fn to_dot(graph: &Graph, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "graph {name} {{");
    let _ = writeln!(out, "  node [shape=circle];");
    for u in 0..graph.num_vertices() {
        let _ = writeln!(out, "  {u};");
    }
    for (u, v) in graph.edge_list() {
        let _ = writeln!(out, "  {u} -- {v};");
    }
    out.push_str("}\n");
    out
}

pub fn save_dot(graph: &Graph, name: &str, path: &Path) -> Result<()> {
    fs::write(path, to_dot(graph, name)).with_context(|| format!("writing {}", path.display()))
}
