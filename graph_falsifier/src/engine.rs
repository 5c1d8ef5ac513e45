use std::io::Write;

use tracing::debug;

use crate::error::{check_probability, Result};
use crate::graph::Graph;
use crate::operations::{enforce_edge_budget, toggle_random_edge, EdgeBudget};
use crate::random::RandomSource;

#[derive(Clone, Debug, PartialEq)]
pub struct LocalSearchConfig {
    /// Iterations to run; the run never stops early.
    pub steps: usize,
    /// Probability of accepting a worse candidate. Constant for the whole run.
    pub temperature: f64,
    pub edge_budget: EdgeBudget,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        LocalSearchConfig {
            steps: 300,
            temperature: 0.05,
            edge_budget: EdgeBudget::Disabled,
        }
    }
}

impl LocalSearchConfig {
    pub fn validate(&self) -> Result<()> {
        check_probability("temperature", self.temperature)
    }
}

/// One iteration of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    pub step: usize,
    pub candidate: f64,
    pub current: f64,
    pub best: f64,
    pub accepted: bool,
}

#[derive(Clone, Debug)]
pub struct LocalSearchOutcome {
    pub best: Graph,
    pub best_value: f64,
    pub final_value: f64,
    pub accepted_moves: usize,
    pub trace: Vec<StepRecord>,
}

impl LocalSearchOutcome {
    /// Writes the trace as CSV, one row per step.
    pub fn write_trace_csv<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "Step,Candidate,Current,Best,Accepted")?;
        for r in &self.trace {
            writeln!(out, "{},{},{},{},{}", r.step, r.candidate, r.current, r.best, r.accepted)?;
        }
        out.flush()
    }
}

// Current and best-seen states of one run.
struct SearchState {
    current: Graph,
    current_value: f64,
    best: Graph,
    best_value: f64,
}

/// Stochastic hill climbing over edge sets.
///
/// Each step clones the current graph, toggles one random edge (then
/// repairs the edge count if a budget is set) and scores the candidate.
/// Candidates scoring at least the current value are always taken, worse
/// ones with probability `temperature`. The engine knows nothing about
/// what a good score means; callers interpret `best_value`.
pub struct LocalSearch {
    config: LocalSearchConfig,
}

impl LocalSearch {
    pub fn new(config: LocalSearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(LocalSearch { config })
    }

    pub fn config(&self) -> &LocalSearchConfig {
        &self.config
    }

    pub fn run<F, R>(
        &self,
        initial: &Graph,
        mut objective: F,
        rng: &mut R,
    ) -> Result<LocalSearchOutcome>
    where
        F: FnMut(&Graph) -> f64,
        R: RandomSource + ?Sized,
    {
        let target = self.config.edge_budget.target(initial.num_vertices())?;
        let initial_value = objective(initial);
        let mut state = SearchState {
            current: initial.clone(),
            current_value: initial_value,
            best: initial.clone(),
            best_value: initial_value,
        };
        let mut accepted_moves = 0;
        let mut trace = Vec::with_capacity(self.config.steps);

        for step in 0..self.config.steps {
            let mut candidate = state.current.clone();
            toggle_random_edge(&mut candidate, rng)?;
            if let Some(target) = target {
                enforce_edge_budget(&mut candidate, target, rng)?;
            }
            let candidate_value = objective(&candidate);

            let accepted = candidate_value >= state.current_value
                || rng.next_unit() < self.config.temperature;
            if accepted {
                state.current = candidate;
                state.current_value = candidate_value;
                accepted_moves += 1;
            }

            if state.current_value > state.best_value {
                state.best = state.current.clone();
                state.best_value = state.current_value;
            }

            trace.push(StepRecord {
                step,
                candidate: candidate_value,
                current: state.current_value,
                best: state.best_value,
                accepted,
            });
        }

        debug!(
            steps = self.config.steps,
            accepted_moves,
            best_value = state.best_value,
            "local search finished"
        );
        Ok(LocalSearchOutcome {
            best: state.best,
            best_value: state.best_value,
            final_value: state.current_value,
            accepted_moves,
            trace,
        })
    }

    /// Runs `k` independent searches, each from a fresh `base_generator`
    /// graph, and returns every run's best graph.
    pub fn extreme_graphs<G, F, R>(
        &self,
        mut base_generator: G,
        mut objective: F,
        k: usize,
        rng: &mut R,
    ) -> Result<Vec<Graph>>
    where
        G: FnMut(&mut R) -> Result<Graph>,
        F: FnMut(&Graph) -> f64,
        R: RandomSource + ?Sized,
    {
        let mut graphs = Vec::with_capacity(k);
        for _ in 0..k {
            let start = base_generator(rng)?;
            let outcome = self.run(&start, &mut objective, rng)?;
            graphs.push(outcome.best);
        }
        Ok(graphs)
    }
}
