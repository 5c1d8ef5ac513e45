use crate::error::{FalsifierError, Result};
use crate::graph::{max_edges, Graph};
use crate::random::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeAction {
    Added,
    Removed,
}

/// Result of one random toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub u: usize,
    pub v: usize,
    pub action: EdgeAction,
}

/// How many edges a mutated graph must keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgeBudget {
    /// Edge count drifts freely.
    #[default]
    Disabled,
    /// `floor(n(n-1)/8)`, a quarter of the possible edges.
    QuarterOfMax,
    /// A fixed edge count.
    Exact(usize),
}

impl EdgeBudget {
    /// Target edge count on `n` vertices, `None` when disabled.
    pub fn target(&self, n: usize) -> Result<Option<usize>> {
        let max = max_edges(n);
        match *self {
            EdgeBudget::Disabled => Ok(None),
            EdgeBudget::QuarterOfMax => Ok(Some(max / 4)),
            EdgeBudget::Exact(target) if target <= max => Ok(Some(target)),
            EdgeBudget::Exact(target) => Err(FalsifierError::EdgeBudgetOutOfRange { target, max }),
        }
    }
}

/// Picks two distinct vertices uniformly and flips the edge between them.
pub fn toggle_random_edge<R: RandomSource + ?Sized>(
    graph: &mut Graph,
    rng: &mut R,
) -> Result<ToggleOutcome> {
    let n = graph.num_vertices();
    if n < 2 {
        return Err(FalsifierError::TooFewVertices(n));
    }
    let (u, v) = rng.sample_pair(n);
    let action = if graph.toggle_edge(u, v)? {
        EdgeAction::Added
    } else {
        EdgeAction::Removed
    };
    Ok(ToggleOutcome { u, v, action })
}

/// Toggles random edges until `graph` has exactly `target` edges.
///
/// Above target, a uniformly chosen present edge is removed; below it, a
/// uniformly chosen absent pair is added. Every toggle moves the count one
/// step towards `target`, so this returns after exactly
/// `|edge_count - target|` toggles, which is the value returned.
pub fn enforce_edge_budget<R: RandomSource + ?Sized>(
    graph: &mut Graph,
    target: usize,
    rng: &mut R,
) -> Result<usize> {
    let max = graph.max_edges();
    if target > max {
        return Err(FalsifierError::EdgeBudgetOutOfRange { target, max });
    }
    let mut toggles = 0;
    while graph.edge_count() > target {
        let edges = graph.edge_list();
        let (u, v) = edges[rng.below(edges.len())];
        graph.remove_edge(u, v)?;
        toggles += 1;
    }
    while graph.edge_count() < target {
        let pairs = graph.non_edge_list();
        let (u, v) = pairs[rng.below(pairs.len())];
        graph.add_edge(u, v)?;
        toggles += 1;
    }
    Ok(toggles)
}
