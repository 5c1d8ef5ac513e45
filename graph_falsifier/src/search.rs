use tracing::{debug, info};

use crate::conjecture::Conjecture;
use crate::engine::{LocalSearch, LocalSearchConfig, LocalSearchOutcome};
use crate::error::{check_probability, FalsifierError, Result};
use crate::graph::Graph;
use crate::invariants::InvariantSnapshot;
use crate::operations::EdgeBudget;
use crate::random::RandomSource;

/// Score of an actual counterexample.
pub const JACKPOT: f64 = 10.0;
const PREMISE_CREDIT: f64 = 2.0;
const BROKEN_CREDIT: f64 = 1.0;

/// Guidance score for the local search.
///
/// `10` for a counterexample. Otherwise `2` if the premise holds plus `1`
/// if the implication fails, so non-counterexamples score 0, 1, 2 or 3.
pub fn counterexample_objective(conjecture: &Conjecture, graph: &Graph) -> f64 {
    let (eval, _) = conjecture.check_on_graph(graph);
    if eval.is_counterexample() {
        return JACKPOT;
    }
    let mut score = 0.0;
    if eval.premise_true {
        score += PREMISE_CREDIT;
    }
    if !eval.holds {
        score += BROKEN_CREDIT;
    }
    score
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub vertices: usize,
    /// Erdős–Rényi edge probability of each restart's seed graph.
    pub edge_probability: f64,
    pub tries: usize,
    pub steps: usize,
    pub temperature: f64,
    pub edge_budget: EdgeBudget,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            vertices: 20,
            edge_probability: 0.2,
            tries: 10,
            steps: 1200,
            temperature: 0.05,
            edge_budget: EdgeBudget::QuarterOfMax,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        check_probability("edge probability", self.edge_probability)?;
        check_probability("temperature", self.temperature)?;
        if self.steps > 0 && self.vertices < 2 {
            return Err(FalsifierError::InvalidConfig(format!(
                "searching needs at least 2 vertices, got {}",
                self.vertices
            )));
        }
        self.edge_budget.target(self.vertices)?;
        Ok(())
    }

    fn engine_config(&self) -> LocalSearchConfig {
        LocalSearchConfig {
            steps: self.steps,
            temperature: self.temperature,
            edge_budget: self.edge_budget,
        }
    }
}

/// A graph on which the conjecture's premise holds and its conclusion fails.
#[derive(Clone, Debug)]
pub struct Counterexample {
    pub graph: Graph,
    pub invariants: InvariantSnapshot,
    /// Zero-based restart that produced it.
    pub restart: usize,
    pub outcome: LocalSearchOutcome,
}

/// Randomized-restart counterexample search.
///
/// A `None` result only means nothing was found within the budget; it says
/// nothing about whether the conjecture is true.
pub struct CounterexampleSearch {
    config: SearchConfig,
    engine: LocalSearch,
}

impl CounterexampleSearch {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let engine = LocalSearch::new(config.engine_config())?;
        Ok(CounterexampleSearch { config, engine })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the first counterexample found, stopping the remaining restarts.
    pub fn find<R: RandomSource + ?Sized>(
        &self,
        conjecture: &Conjecture,
        rng: &mut R,
    ) -> Result<Option<Counterexample>> {
        for restart in 0..self.config.tries {
            let seed_graph =
                Graph::erdos_renyi(self.config.vertices, self.config.edge_probability, rng)?;
            let outcome = self.engine.run(
                &seed_graph,
                |g| counterexample_objective(conjecture, g),
                rng,
            )?;

            // The engine's score is only guidance; re-check the graph itself.
            let (eval, invariants) = conjecture.check_on_graph(&outcome.best);
            debug!(
                restart,
                best_value = outcome.best_value,
                premise_true = eval.premise_true,
                holds = eval.holds,
                "restart finished"
            );
            if eval.is_counterexample() {
                info!(
                    restart,
                    %conjecture,
                    edges = outcome.best.edge_count(),
                    "counterexample found"
                );
                return Ok(Some(Counterexample {
                    graph: outcome.best.clone(),
                    invariants,
                    restart,
                    outcome,
                }));
            }
        }
        info!(tries = self.config.tries, %conjecture, "no counterexample found");
        Ok(None)
    }
}
